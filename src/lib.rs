//! A small client for placing and controlling phone calls through the Twilio REST API.
//!
//! ```no_run
//! use twilioctl::{api::Client, types::Call};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(reqwest::Client::new(), "ACXXXXXXXX", "auth token")?;
//! let call = Call::new("+15558675310", "+15017122661")
//!     .with_url("http://demo.twilio.com/docs/voice.xml");
//!
//! let placed = client.place_call(&call).await?;
//! client.disconnect_call(&placed.sid).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod storage;
pub mod types;

pub use api::{Client, ClientConfig, TwilioError};
