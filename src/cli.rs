// CLI layer: flag/subcommand definitions and the dispatch from a parsed
// command to one library call. Results that carry a payload are printed
// as pretty JSON on stdout; void operations print nothing, so output
// stays pipeable.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::time::Duration;

use crate::api::{Client, RoomRef};
use crate::sound::Sound;

#[derive(Parser)]
#[command(name = "campfire", version, about = "Command-line client for the Campfire API")]
pub struct Cli {
    /// Account base URL, e.g. https://acme.campfirenow.com
    #[arg(long, env = "CAMPFIRE_URL")]
    pub url: String,

    /// API auth token (find it on your Campfire "My info" page)
    #[arg(long, env = "CAMPFIRE_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Room id or name, required by room-level commands
    #[arg(long, env = "CAMPFIRE_ROOM")]
    pub room: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the rooms visible to the authenticated user
    Rooms,
    /// Show a user record
    User {
        #[arg(default_value = "me")]
        id: String,
    },
    /// List the rooms you are currently present in
    Presence,
    /// Search messages across all rooms
    Search { term: String },
    /// Show the room's metadata
    Show,
    /// Rename the room
    Name { name: String },
    /// Change the room's topic
    Topic { topic: String },
    /// List recent messages in the room
    Recent,
    /// Fetch today's transcript
    Transcript,
    /// List files uploaded to the room
    Uploads,
    /// Join the room
    Join,
    /// Leave the room
    Leave,
    /// Lock the room
    Lock,
    /// Unlock the room
    Unlock,
    /// Post a text message
    Speak { message: String },
    /// Post a monospaced paste
    Paste { message: String },
    /// Play a sound clip (see `sounds` for the known names)
    Play { sound: String },
    /// List the known sound clip names (no network call)
    Sounds,
}

/// Run one parsed command to completion. Blocks for the duration of the
/// single request; a spinner on stderr shows progress and is cleared
/// before anything is printed.
pub fn run(cli: Cli) -> Result<()> {
    if let Command::Sounds = cli.command {
        for sound in Sound::ALL {
            println!("{sound}");
        }
        return Ok(());
    }

    let client = Client::new(&cli.url, &cli.token)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Talking to Campfire...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = dispatch(&client, &cli);
    spinner.finish_and_clear();

    if let Some(payload) = result? {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }
    Ok(())
}

fn dispatch(client: &Client, cli: &Cli) -> Result<Option<Value>> {
    Ok(match &cli.command {
        Command::Rooms => Some(Value::Array(client.rooms()?)),
        Command::User { id } => Some(client.user(id)?),
        Command::Presence => Some(Value::Array(client.presence()?)),
        Command::Search { term } => Some(Value::Array(client.search(term)?)),
        Command::Sounds => unreachable!("handled before dispatch"),
        room_command => {
            let target = room_target(cli)?;
            let room = client.room(&target)?;
            match room_command {
                Command::Show => Some(room.show()?),
                Command::Name { name } => {
                    room.set_name(name)?;
                    None
                }
                Command::Topic { topic } => {
                    room.set_topic(topic)?;
                    None
                }
                Command::Recent => Some(Value::Array(room.recent()?)),
                Command::Transcript => Some(Value::Array(room.transcript()?)),
                Command::Uploads => Some(Value::Array(room.uploads()?)),
                Command::Join => {
                    room.join()?;
                    None
                }
                Command::Leave => {
                    room.leave()?;
                    None
                }
                Command::Lock => {
                    room.lock()?;
                    None
                }
                Command::Unlock => {
                    room.unlock()?;
                    None
                }
                Command::Speak { message } => Some(room.speak(message)?),
                Command::Paste { message } => Some(room.paste(message)?),
                Command::Play { sound } => Some(room.play(sound)?),
                _ => unreachable!("non-room commands handled above"),
            }
        }
    })
}

fn room_target(cli: &Cli) -> Result<RoomRef> {
    let raw = cli
        .room
        .as_deref()
        .context("no room given: pass --room or set CAMPFIRE_ROOM")?;
    Ok(RoomRef::parse(raw))
}
