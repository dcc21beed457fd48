use super::{de::null_as_default, Timestamp};
use serde::{Deserialize, Serialize};

/// The state of a call as reported by the API.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Queued,
    Initiated,
    Ringing,
    InProgress,
    Completed,
    Busy,
    Failed,
    NoAnswer,
    Canceled,
    /// A status this crate does not know about yet.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CallStatus {
    /// Whether the call has reached a final state.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Busy | Self::Failed | Self::NoAnswer | Self::Canceled
        )
    }
}

/// Links to resources related to a call. These are never fetched by this crate.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubresourceUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recordings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_summaries: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<String>,
}

/// A snapshot of a call.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CallResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_sid: String,
    #[serde(default)]
    pub annotation: Option<String>,
    /// Populated when machine detection is enabled, e.g. `human` or `machine_start`.
    #[serde(default)]
    pub answered_by: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub caller_name: Option<String>,
    #[serde(default)]
    pub date_created: Timestamp,
    #[serde(default)]
    pub date_updated: Timestamp,
    /// `inbound`, `outbound-api` or `outbound-dial`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Length of the call in seconds, sent as a string.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub end_time: Timestamp,
    #[serde(default)]
    pub forwarded_from: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub from_formatted: Option<String>,
    #[serde(default)]
    pub group_sid: Option<String>,
    #[serde(default)]
    pub parent_call_sid: Option<String>,
    #[serde(default)]
    pub phone_number_sid: Option<String>,
    /// Charged amount, only known once the call completes.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_unit: Option<String>,
    #[serde(default)]
    pub queue_time: Option<String>,
    #[serde(default)]
    pub start_time: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CallStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subresource_uris: SubresourceUris,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub to_formatted: Option<String>,
    #[serde(default)]
    pub trunk_sid: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConferenceStatus {
    Init,
    InProgress,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Why a conference ended.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConferenceEndReason {
    ConferenceEndedViaApi,
    ParticipantWithEndConferenceOnExitLeft,
    ParticipantWithEndConferenceOnExitKicked,
    LastParticipantKicked,
    LastParticipantLeft,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceSubresourceUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recordings: Option<String>,
}

/// A snapshot of a conference.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub date_created: Timestamp,
    #[serde(default)]
    pub date_updated: Timestamp,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ConferenceStatus,
    /// Only set once the conference has completed.
    #[serde(default)]
    pub reason_conference_ended: Option<ConferenceEndReason>,
    #[serde(default)]
    pub call_sid_ending_conference: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subresource_uris: ConferenceSubresourceUris,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipantStatus {
    Queued,
    Connecting,
    Ringing,
    Connected,
    Complete,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A snapshot of a single call participating in a conference.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_sid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub call_sid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conference_sid: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub call_sid_to_coach: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coaching: bool,
    #[serde(default)]
    pub date_created: Timestamp,
    #[serde(default)]
    pub date_updated: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_conference_on_exit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_conference_on_enter: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hold: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ParticipantStatus,
    #[serde(default)]
    pub uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statuses_fall_back() {
        let status: CallStatus = serde_json::from_str("\"teleported\"").unwrap();
        assert_eq!(status, CallStatus::Unknown);

        let status: ConferenceStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, ConferenceStatus::Unknown);
    }

    #[test]
    fn call_status_wire_names() {
        let status: CallStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, CallStatus::InProgress);
        assert!(!status.is_finished());

        let status: CallStatus = serde_json::from_str("\"no-answer\"").unwrap();
        assert!(status.is_finished());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let call: CallResource = serde_json::from_str(
            r#"{"sid":null,"account_sid":null,"status":null,"subresource_uris":null}"#,
        )
        .unwrap();
        assert_eq!(call, CallResource::default());

        let participant: ParticipantResource = serde_json::from_str(
            r#"{"call_sid":"CA1","muted":null,"hold":null,"coaching":null,"status":null}"#,
        )
        .unwrap();
        assert_eq!(participant.call_sid, "CA1");
        assert!(!participant.muted);
        assert!(!participant.hold);
        assert_eq!(participant.status, ParticipantStatus::Unknown);
    }

    #[test]
    fn decodes_completed_conference() {
        let conference: ConferenceResource = serde_json::from_str(
            r#"{
                "account_sid": "ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
                "api_version": "2010-04-01",
                "call_sid_ending_conference": "CAXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
                "date_created": "Fri, 18 Feb 2011 19:26:50 +0000",
                "date_updated": "Fri, 18 Feb 2011 19:27:33 +0000",
                "friendly_name": "AHH YEAH",
                "reason_conference_ended": "last-participant-left",
                "region": "us1",
                "sid": "CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
                "status": "completed",
                "subresource_uris": {
                    "participants": "/2010-04-01/Accounts/ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX/Conferences/CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX/Participants.json",
                    "recordings": "/2010-04-01/Accounts/ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX/Conferences/CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX/Recordings.json"
                },
                "uri": "/2010-04-01/Accounts/ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX/Conferences/CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX.json"
            }"#,
        )
        .unwrap();

        assert_eq!(conference.status, ConferenceStatus::Completed);
        assert_eq!(
            conference.reason_conference_ended,
            Some(ConferenceEndReason::LastParticipantLeft)
        );
        assert_eq!(
            conference.date_updated.to_string(),
            "Fri, 18 Feb 2011 19:27:33 +0000"
        );
        assert!(conference.subresource_uris.participants.is_some());
    }

    #[test]
    fn decodes_participant_flags() {
        let participant: ParticipantResource = serde_json::from_str(
            r#"{
                "account_sid": "ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
                "call_sid": "CAXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
                "conference_sid": "CFXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
                "label": "customer",
                "call_sid_to_coach": null,
                "coaching": false,
                "date_created": "Fri, 18 Feb 2011 21:07:19 +0000",
                "date_updated": "Fri, 18 Feb 2011 21:07:19 +0000",
                "end_conference_on_exit": true,
                "muted": true,
                "hold": false,
                "start_conference_on_enter": true,
                "status": "connected"
            }"#,
        )
        .unwrap();

        assert!(participant.muted);
        assert!(participant.end_conference_on_exit);
        assert!(!participant.hold);
        assert_eq!(participant.call_sid_to_coach, None);
        assert_eq!(participant.status, ParticipantStatus::Connected);
        assert!(participant.uri.is_none());
    }
}
