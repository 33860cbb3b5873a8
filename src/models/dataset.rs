use serde::{Deserialize, Serialize};

use super::session::Session;

/// Ordered list of sessions, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Dataset {
    pub sessions: Vec<Session>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a closed session. Empty sessions are dropped and `false` is returned.
    pub fn close_session(&mut self, session: Session) -> bool {
        if session.is_empty() {
            return false;
        }
        self.sessions.push(session);
        true
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn total_messages(&self) -> usize {
        self.sessions.iter().map(Session::len).sum()
    }

    /// Pretty-print with the given indentation width. Non-ASCII text is kept literal.
    pub fn to_json_pretty(&self, indent: usize) -> serde_json::Result<Vec<u8>> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
