// API client module: a small blocking HTTP client for the Campfire REST
// API. Every call is one synchronous round-trip; nothing is cached and
// nothing is retried.

use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::room::Room;

/// A decoded response body: Campfire answers with a JSON object (or
/// nothing) on every endpoint this client consumes.
pub type Payload = Map<String, Value>;

/// Campfire client holding a reqwest blocking client, the account's base
/// URL and the API auth token. Immutable once built; safe to share across
/// any number of `Room` handles.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    token: String,
}

/// How a caller addresses a room: directly by numeric id, or by its
/// display name (resolved through the room listing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomRef {
    Id(u64),
    Name(String),
}

impl RoomRef {
    /// Anything that parses as an integer is an id; everything else is
    /// taken as a room name.
    pub fn parse(s: &str) -> RoomRef {
        match s.parse::<u64>() {
            Ok(id) => RoomRef::Id(id),
            Err(_) => RoomRef::Name(s.to_string()),
        }
    }
}

impl FromStr for RoomRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RoomRef::parse(s))
    }
}

/// The slice of a room summary needed for name resolution. Summaries are
/// passed through to callers untyped; this record only exists for the
/// scan in `Client::room`.
#[derive(Debug, Deserialize)]
struct RoomSummary {
    id: u64,
    name: String,
}

impl Client {
    /// Build a client for `base_url` (e.g. `https://acme.campfirenow.com`)
    /// authenticating with `token`. A trailing slash on the URL is trimmed
    /// so path joining stays uniform.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http = HttpClient::builder().build()?;
        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Perform one authenticated call. The endpoint URL is the base URL
    /// plus `path` plus a fixed `.json` suffix; auth is HTTP Basic with
    /// the token as username and an empty password. A failure-range
    /// status becomes `Error::Status` with the response text attached.
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Payload> {
        let url = format!("{}{}.json", self.base_url, path);
        let mut req = self
            .http
            .request(method, &url)
            .basic_auth(&self.token, Some(""));
        if let Some(data) = body {
            req = req
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_string(data)?);
        }
        let res = req.send()?;
        let status = res.status();
        let text = res.text()?;
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        decode_body(&text)
    }

    pub fn get(&self, path: &str) -> Result<Payload> {
        self.request(Method::GET, path, None)
    }

    pub fn post(&self, path: &str, data: &Value) -> Result<Payload> {
        self.request(Method::POST, path, Some(data))
    }

    pub fn put(&self, path: &str, data: &Value) -> Result<Payload> {
        self.request(Method::PUT, path, Some(data))
    }

    /// List every room visible to the authenticated user.
    pub fn rooms(&self) -> Result<Vec<Value>> {
        take_list(self.get("/rooms")?, "rooms")
    }

    /// Resolve a room reference to a handle. An id is used as-is with no
    /// network call; a name is matched (case-sensitive, first exact hit)
    /// against the room listing.
    pub fn room(&self, target: &RoomRef) -> Result<Room<'_>> {
        match target {
            RoomRef::Id(id) => Ok(Room::new(self, *id)),
            RoomRef::Name(name) => {
                for summary in self.rooms()? {
                    let summary: RoomSummary = serde_json::from_value(summary)?;
                    if summary.name == *name {
                        return Ok(Room::new(self, summary.id));
                    }
                }
                Err(Error::RoomNotFound(name.clone()))
            }
        }
    }

    /// Fetch a user record; Campfire accepts the literal id `me` for the
    /// authenticated user.
    pub fn user(&self, id: &str) -> Result<Value> {
        take_key(self.get(&format!("/users/{id}"))?, "user")
    }

    /// Rooms the authenticated user is currently present in.
    pub fn presence(&self) -> Result<Vec<Value>> {
        take_list(self.get("/presence")?, "rooms")
    }

    /// Full-text message search across all rooms.
    pub fn search(&self, term: &str) -> Result<Vec<Value>> {
        take_list(self.get(&format!("/search/{term}"))?, "messages")
    }
}

/// Tolerant body decode: some mutating endpoints answer with an empty or
/// non-JSON body on success, so only a body that starts with `{` is
/// parsed; everything else decodes to an empty map.
pub(crate) fn decode_body(text: &str) -> Result<Payload> {
    if text.starts_with('{') {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(Payload::new())
    }
}

/// Pull the single wrapper key an endpoint nests its payload under.
pub(crate) fn take_key(mut body: Payload, key: &'static str) -> Result<Value> {
    body.remove(key).ok_or(Error::MissingKey(key))
}

/// Same as `take_key` for endpoints whose wrapped value is a list.
pub(crate) fn take_list(body: Payload, key: &'static str) -> Result<Vec<Value>> {
    Ok(serde_json::from_value(take_key(body, key)?)?)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
