// Library root
// -----------
// This crate exposes a small library surface for talking to the Campfire
// REST API, plus the CLI front end built on top of it. The binary
// (`main.rs`) is a thin wrapper around `cli::run`.
//
// Module responsibilities:
// - `api`: the `Client` itself: authenticated requests, the JSON body
//   conventions, collection-level operations, and room resolution.
// - `room`: a handle addressing one room, composing its sub-resource
//   paths onto the client's verbs.
// - `sound`: the closed set of sound clip names `play` accepts.
// - `error`: the library error taxonomy.
// - `cli`: clap argument types and command dispatch. The library modules
//   never depend on it; embedders can use `Client` directly.

pub mod api;
pub mod cli;
pub mod error;
pub mod room;
pub mod sound;

pub use api::{Client, RoomRef};
pub use error::Error;
pub use room::Room;
pub use sound::Sound;
