//! Values exchanged with the API: the parameters we send and the resources we get back.

mod api_error;
mod call;
mod de;
mod resources;
mod timestamp;

pub use api_error::ApiError;
pub use call::Call;
pub use resources::{
    CallResource, CallStatus, ConferenceEndReason, ConferenceResource, ConferenceStatus,
    ConferenceSubresourceUris, ParticipantResource, ParticipantStatus, SubresourceUris,
};
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};
