use super::{
    http_client::decode_body,
    ClientConfig, ConfigError, TwilioError,
};
use crate::types::{Call, CallResource, ConferenceResource, ParticipantResource};
use reqwest::{Method, StatusCode};
use std::fmt;
use tracing::{info, instrument};

/// A client for the calls and conferences of a single account.
///
/// The client holds nothing but its credentials and an HTTP transport,
/// so clones are cheap and it may be shared freely across tasks.
/// Timeouts and cancellation are whatever the given `reqwest::Client` is
/// configured with, or whatever the caller wraps each future in.
#[derive(Clone)]
pub struct Client {
    pub(super) http: reqwest::Client,
    pub(super) config: ClientConfig,
}

impl Client {
    /// Creates a client against the public API.
    pub fn new(
        http: reqwest::Client,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_config(
            http,
            ClientConfig::new(account_sid, auth_token)?,
        ))
    }

    pub fn from_config(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds `{base}/Accounts/{account sid}/{segments...}`.
    /// Each segment is percent-encoded on its own.
    fn account_url(&self, segments: &[&str]) -> String {
        let mut url = self.config.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .push("Accounts")
                .push(&self.config.account_sid)
                .extend(segments);
        }
        url.into()
    }

    /// Places an outbound call, returning the call as first created.
    #[instrument(skip(self, call), fields(to = call.to.as_deref()))]
    pub async fn place_call(&self, call: &Call) -> Result<CallResource, TwilioError> {
        const OPERATION: &str = "Client::place_call";

        let body = call.to_form().map_err(|source| TwilioError::Encode {
            operation: OPERATION,
            source,
        })?;
        let url = self.account_url(&["Calls.json"]);

        let request = self.new_request(OPERATION, Method::POST, &url, Some(body))?;
        let response = self.send(OPERATION, request, StatusCode::CREATED).await?;
        let call_resource: CallResource = decode_body(OPERATION, response).await?;

        info!(call_sid = %call_resource.sid, status = ?call_resource.status, "Placed call");
        Ok(call_resource)
    }

    /// Retrieves the current state of a call.
    #[instrument(skip(self))]
    pub async fn call_resource(&self, call_sid: &str) -> Result<CallResource, TwilioError> {
        const OPERATION: &str = "Client::call_resource";

        let url = self.account_url(&["Calls", &format!("{call_sid}.json")]);
        let request = self.new_request(OPERATION, Method::GET, &url, None)?;
        let response = self.send(OPERATION, request, StatusCode::OK).await?;

        decode_body(OPERATION, response).await
    }

    /// Hangs up a call by moving it to `completed`.
    #[instrument(skip(self))]
    pub async fn disconnect_call(&self, call_sid: &str) -> Result<(), TwilioError> {
        const OPERATION: &str = "Client::disconnect_call";

        let body = encode_form(OPERATION, &[("Status", "completed")])?;
        let url = self.account_url(&["Calls", &format!("{call_sid}.json")]);

        let request = self.new_request(OPERATION, Method::POST, &url, Some(body))?;
        self.send(OPERATION, request, StatusCode::OK).await?;

        info!("Disconnected call");
        Ok(())
    }

    /// Mutes or unmutes a call within a conference.
    #[instrument(skip(self))]
    pub async fn set_mute(
        &self,
        conference_sid: &str,
        call_sid: &str,
        muted: bool,
    ) -> Result<(), TwilioError> {
        const OPERATION: &str = "Client::set_mute";

        let muted_value = muted.to_string();
        let body = encode_form(OPERATION, &[("Muted", muted_value.as_str())])?;
        let url = self.account_url(&[
            "Conferences",
            conference_sid,
            "Participants",
            &format!("{call_sid}.json"),
        ]);

        let request = self.new_request(OPERATION, Method::POST, &url, Some(body))?;
        self.send(OPERATION, request, StatusCode::OK).await?;

        info!("Updated participant mute state");
        Ok(())
    }

    /// Retrieves the current state of a conference.
    #[instrument(skip(self))]
    pub async fn conference(
        &self,
        conference_sid: &str,
    ) -> Result<ConferenceResource, TwilioError> {
        const OPERATION: &str = "Client::conference";

        let url = self.account_url(&["Conferences", &format!("{conference_sid}.json")]);
        let request = self.new_request(OPERATION, Method::GET, &url, None)?;
        let response = self.send(OPERATION, request, StatusCode::OK).await?;

        decode_body(OPERATION, response).await
    }

    /// Retrieves a single participant of a conference.
    #[instrument(skip(self))]
    pub async fn participant(
        &self,
        conference_sid: &str,
        call_sid: &str,
    ) -> Result<ParticipantResource, TwilioError> {
        const OPERATION: &str = "Client::participant";

        let url = self.account_url(&[
            "Conferences",
            conference_sid,
            "Participants",
            &format!("{call_sid}.json"),
        ]);
        let request = self.new_request(OPERATION, Method::GET, &url, None)?;
        let response = self.send(OPERATION, request, StatusCode::OK).await?;

        decode_body(OPERATION, response).await
    }
}

fn encode_form(operation: &'static str, params: &[(&str, &str)]) -> Result<String, TwilioError> {
    serde_urlencoded::to_string(params).map_err(|source| TwilioError::Encode { operation, source })
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
