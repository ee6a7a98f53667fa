use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. The body text is the
    /// user-facing message (the backend puts its `detail` there).
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// Transport-level failure: unreachable host, broken connection, or a
    /// response body that could not be decoded.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A protected resource was requested without a session. Raised before
    /// any request leaves the client.
    #[error("authentication required")]
    AuthRequired,
}

impl ApiError {
    /// Consumes a non-2xx response into `RequestFailed`, keeping whatever
    /// body text could be read.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::RequestFailed { status, body }
    }
}
