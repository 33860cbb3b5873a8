use serde::{Deserialize, Serialize};

use super::message::Message;

/// One multi-turn dialogue. Sessions added to a [`Dataset`](super::Dataset) always hold
/// at least one message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl From<Vec<Message>> for Session {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}
