use super::{Client, TwilioError};
use crate::types::ApiError;
use reqwest::{header, Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

impl Client {
    /// Assembles an authenticated request for the given absolute URL.
    ///
    /// `body` must already be form-encoded. Every request asks for JSON back,
    /// and carries HTTP Basic credentials of the account SID and auth token.
    pub(super) fn new_request(
        &self,
        operation: &'static str,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<Request, TwilioError> {
        let parsed_url = Url::parse(url).map_err(|source| TwilioError::InvalidUrl {
            operation,
            url: url.to_string(),
            source,
        })?;

        let mut request = self
            .http
            .request(method, parsed_url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        request
            .build()
            .map_err(|source| TwilioError::Build { operation, source })
    }

    /// Executes the request, expecting the given status in response.
    ///
    /// Any other status has its body decoded as an [`ApiError`].
    pub(super) async fn send(
        &self,
        operation: &'static str,
        request: Request,
        expected: StatusCode,
    ) -> Result<Response, TwilioError> {
        debug!(%operation, method = %request.method(), url = %request.url(), "Sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| TwilioError::Transport { operation, source })?;

        let status = response.status();
        debug!(%operation, %status, "Received response");
        if status != expected {
            return Err(decode_error(operation, response).await);
        }

        Ok(response)
    }
}

/// Decodes a successful response body.
pub(super) async fn decode_body<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, TwilioError> {
    let body = response
        .bytes()
        .await
        .map_err(|source| TwilioError::Transport { operation, source })?;

    serde_json::from_slice(&body).map_err(|source| TwilioError::Decode { operation, source })
}

/// Turns an unexpected response into an error.
///
/// If the body is not a readable [`ApiError`], that failure is reported instead.
async fn decode_error(operation: &'static str, response: Response) -> TwilioError {
    let status = response.status();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(source) => return TwilioError::Transport { operation, source },
    };

    match serde_json::from_slice::<ApiError>(&body) {
        Ok(mut error) => {
            if error.status == 0 {
                error.status = status.as_u16();
            }
            warn!(%operation, code = error.code, status = error.status, "API returned an error");
            TwilioError::Api {
                operation,
                source: error,
            }
        }
        Err(source) => {
            warn!(%operation, %status, "API returned an unreadable error");
            TwilioError::ErrorBody {
                operation,
                status: status.as_u16(),
                source,
            }
        }
    }
}
