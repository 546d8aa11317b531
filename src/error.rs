// Error taxonomy for the library surface. Every operation is a single
// network round-trip, so there is no recovery logic here: each variant is
// surfaced to the caller unchanged and never retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout at the transport's default deadline, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure-range status. The response body
    /// is carried along verbatim since Campfire puts its diagnostics there.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A response body started with `{` but was not valid JSON, or a JSON
    /// request body failed to serialize.
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A successful response was missing the wrapper key the endpoint is
    /// documented to nest its payload under.
    #[error("response missing expected {0:?} key")]
    MissingKey(&'static str),

    /// Room-name resolution scanned the room listing without a match.
    #[error("no room named {0:?}")]
    RoomNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
