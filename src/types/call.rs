use serde::Serialize;

/// Parameters for placing an outbound call.
///
/// Every field is optional. Unset fields, empty strings, zeroes and `false`
/// are left out of the encoded form entirely, as the API treats a
/// present-but-empty parameter differently from an absent one.
///
/// Field names here are snake_case; the `rename` on each field is the
/// PascalCase name the API expects within a form body.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Call {
    #[serde(rename = "AccountSid", skip_serializing_if = "is_blank")]
    pub account_sid: Option<String>,
    #[serde(rename = "ApplicationSid", skip_serializing_if = "is_blank")]
    pub application_sid: Option<String>,
    #[serde(rename = "AsyncAmd", skip_serializing_if = "is_blank")]
    pub async_amd: Option<String>,
    #[serde(rename = "AsyncAmdStatusCallback", skip_serializing_if = "is_blank")]
    pub async_amd_status_callback: Option<String>,
    #[serde(rename = "AsyncAmdStatusCallbackMethod", skip_serializing_if = "is_blank")]
    pub async_amd_status_callback_method: Option<String>,
    #[serde(rename = "Byoc", skip_serializing_if = "is_blank")]
    pub byoc: Option<String>,
    #[serde(rename = "CallerId", skip_serializing_if = "is_blank")]
    pub caller_id: Option<String>,
    #[serde(rename = "CallReason", skip_serializing_if = "is_blank")]
    pub call_reason: Option<String>,
    #[serde(rename = "FallbackMethod", skip_serializing_if = "is_blank")]
    pub fallback_method: Option<String>,
    #[serde(rename = "FallbackUrl", skip_serializing_if = "is_blank")]
    pub fallback_url: Option<String>,
    #[serde(rename = "From", skip_serializing_if = "is_blank")]
    pub from: Option<String>,
    /// Either `Enable` or `DetectMessageEnd`.
    #[serde(rename = "MachineDetection", skip_serializing_if = "is_blank")]
    pub machine_detection: Option<String>,
    #[serde(
        rename = "MachineDetectionSilenceTimeout",
        skip_serializing_if = "is_zero"
    )]
    pub machine_detection_silence_timeout: Option<u32>,
    #[serde(
        rename = "MachineDetectionSpeechEndThreshold",
        skip_serializing_if = "is_zero"
    )]
    pub machine_detection_speech_end_threshold: Option<u32>,
    #[serde(
        rename = "MachineDetectionSpeechThreshold",
        skip_serializing_if = "is_zero"
    )]
    pub machine_detection_speech_threshold: Option<u32>,
    #[serde(rename = "MachineDetectionTimeout", skip_serializing_if = "is_zero")]
    pub machine_detection_timeout: Option<u32>,
    #[serde(rename = "Method", skip_serializing_if = "is_blank")]
    pub method: Option<String>,
    #[serde(rename = "Record", skip_serializing_if = "is_zero")]
    pub record: Option<bool>,
    #[serde(rename = "RecordingChannels", skip_serializing_if = "is_blank")]
    pub recording_channels: Option<String>,
    #[serde(rename = "RecordingStatusCallback", skip_serializing_if = "is_blank")]
    pub recording_status_callback: Option<String>,
    #[serde(rename = "RecordingStatusCallbackEvent", skip_serializing_if = "is_blank")]
    pub recording_status_callback_event: Option<String>,
    #[serde(rename = "RecordingStatusCallbackMethod", skip_serializing_if = "is_blank")]
    pub recording_status_callback_method: Option<String>,
    #[serde(rename = "SendDigits", skip_serializing_if = "is_blank")]
    pub send_digits: Option<String>,
    #[serde(rename = "SipAuthPassword", skip_serializing_if = "is_blank")]
    pub sip_auth_password: Option<String>,
    #[serde(rename = "SipAuthUsername", skip_serializing_if = "is_blank")]
    pub sip_auth_username: Option<String>,
    #[serde(rename = "StatusCallback", skip_serializing_if = "is_blank")]
    pub status_callback: Option<String>,
    /// Space separated, e.g. `initiated ringing answered completed`.
    #[serde(rename = "StatusCallbackEvent", skip_serializing_if = "is_blank")]
    pub status_callback_event: Option<String>,
    #[serde(rename = "StatusCallbackMethod", skip_serializing_if = "is_blank")]
    pub status_callback_method: Option<String>,
    /// Seconds to let the call ring before giving up.
    #[serde(rename = "Timeout", skip_serializing_if = "is_zero")]
    pub timeout: Option<u32>,
    #[serde(rename = "To", skip_serializing_if = "is_blank")]
    pub to: Option<String>,
    #[serde(rename = "Trim", skip_serializing_if = "is_blank")]
    pub trim: Option<String>,
    /// Inline TwiML, an alternative to `url`.
    #[serde(rename = "Twiml", skip_serializing_if = "is_blank")]
    pub twiml: Option<String>,
    #[serde(rename = "Url", skip_serializing_if = "is_blank")]
    pub url: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// `None`, `Some(0)` and `Some(false)` are all left out of the form.
fn is_zero<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().map_or(true, |value| *value == T::default())
}

impl Call {
    /// Starts a call from `from` to `to`.
    /// A TwiML source (`with_url` or `with_twiml`) is still required by the API.
    pub fn new(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            from: Some(from.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_twiml(mut self, twiml: impl Into<String>) -> Self {
        self.twiml = Some(twiml.into());
        self
    }

    pub fn with_status_callback(
        mut self,
        url: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        self.status_callback = Some(url.into());
        self.status_callback_method = Some(method.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_record(mut self, record: bool) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_machine_detection(mut self, mode: impl Into<String>) -> Self {
        self.machine_detection = Some(mode.into());
        self
    }

    /// Encodes all set parameters as an `application/x-www-form-urlencoded` body.
    pub fn to_form(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}
