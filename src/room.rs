// Room handle: addresses one chat room and composes its sub-resource
// paths onto the client's verbs. The handle itself is just (client, id);
// the room's actual state lives on the server and is re-fetched on every
// read.

use serde_json::{json, Value};

use crate::api::{take_key, take_list, Client};
use crate::error::Result;

pub struct Room<'a> {
    client: &'a Client,
    id: u64,
}

impl<'a> Room<'a> {
    pub fn new(client: &'a Client, id: u64) -> Self {
        Room { client, id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    fn path(&self, suffix: &str) -> String {
        format!("/room/{}{}", self.id, suffix)
    }

    /// Fetch the room's metadata record.
    pub fn show(&self) -> Result<Value> {
        take_key(self.client.get(&self.path(""))?, "room")
    }

    pub fn set_name(&self, name: &str) -> Result<()> {
        self.client
            .put(&self.path(""), &json!({ "room": { "name": name } }))?;
        Ok(())
    }

    pub fn set_topic(&self, topic: &str) -> Result<()> {
        self.client
            .put(&self.path(""), &json!({ "room": { "topic": topic } }))?;
        Ok(())
    }

    /// Messages posted recently (server decides the window).
    pub fn recent(&self) -> Result<Vec<Value>> {
        take_list(self.client.get(&self.path("/recent"))?, "messages")
    }

    /// Today's full transcript.
    pub fn transcript(&self) -> Result<Vec<Value>> {
        take_list(self.client.get(&self.path("/transcript"))?, "messages")
    }

    pub fn uploads(&self) -> Result<Vec<Value>> {
        take_list(self.client.get(&self.path("/uploads"))?, "uploads")
    }

    pub fn join(&self) -> Result<()> {
        self.client.post(&self.path("/join"), &json!({}))?;
        Ok(())
    }

    pub fn leave(&self) -> Result<()> {
        self.client.post(&self.path("/leave"), &json!({}))?;
        Ok(())
    }

    pub fn lock(&self) -> Result<()> {
        self.client.post(&self.path("/lock"), &json!({}))?;
        Ok(())
    }

    pub fn unlock(&self) -> Result<()> {
        self.client.post(&self.path("/unlock"), &json!({}))?;
        Ok(())
    }

    /// Post a plain text message; returns the created message record.
    pub fn speak(&self, message: &str) -> Result<Value> {
        self.send_message(message, "TextMessage")
    }

    /// Post a monospaced paste message.
    pub fn paste(&self, message: &str) -> Result<Value> {
        self.send_message(message, "PasteMessage")
    }

    /// Play a sound clip. `sound` should be one of the `Sound` names but
    /// is forwarded as-is; the server rejects what it does not know.
    pub fn play(&self, sound: &str) -> Result<Value> {
        self.send_message(sound, "SoundMessage")
    }

    fn send_message(&self, body: &str, kind: &str) -> Result<Value> {
        let data = json!({ "message": { "body": body, "type": kind } });
        take_key(self.client.post(&self.path("/speak"), &data)?, "message")
    }
}
