//! In-memory state shared by the attendance bot's handlers.
//!
//! Nothing here survives a restart. The roster and student index are fixed
//! at construction; the identity cache and session table are the only
//! mutable parts and are only reachable through [`AttendanceStore`]'s
//! methods.

pub mod roster;
pub mod session;

pub use roster::ClassRoster;
pub use session::{session_header, AttendanceSession};

use crate::error::BotError;
use std::collections::HashMap;
use teloxide::types::ChatId;
use tokio::sync::RwLock;

/// Counters exposed on the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub classes: usize,
    pub active_sessions: usize,
    pub registered_users: usize,
}

pub struct AttendanceStore {
    roster: ClassRoster,
    student_index: HashMap<String, String>,
    identities: RwLock<HashMap<String, ChatId>>,
    sessions: RwLock<HashMap<String, AttendanceSession>>,
}

impl AttendanceStore {
    pub fn new(roster: ClassRoster) -> Self {
        let student_index = roster.student_index();
        Self {
            roster,
            student_index,
            identities: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn roster(&self) -> &ClassRoster {
        &self.roster
    }

    pub fn class_of(&self, username: &str) -> Option<&str> {
        self.student_index.get(username).map(String::as_str)
    }

    /// Stores `username -> chat_id`, replacing any earlier entry.
    /// Returns `true` when the username was already known.
    pub async fn register(&self, username: &str, chat_id: ChatId) -> bool {
        let mut identities = self.identities.write().await;
        identities.insert(username.to_string(), chat_id).is_some()
    }

    pub async fn chat_id_for(&self, username: &str) -> Option<ChatId> {
        self.identities.read().await.get(username).copied()
    }

    /// Makes `session` the active session for `class`, returning the one it
    /// replaced.
    pub async fn open_session(
        &self,
        class: &str,
        session: AttendanceSession,
    ) -> Result<Option<AttendanceSession>, BotError> {
        if !self.roster.contains_class(class) {
            return Err(BotError::UnknownClass(class.to_string()));
        }
        let mut sessions = self.sessions.write().await;
        Ok(sessions.insert(class.to_string(), session))
    }

    pub async fn session(&self, class: &str) -> Option<AttendanceSession> {
        self.sessions.read().await.get(class).cloned()
    }

    /// Records `display_name` against the active session of `username`'s
    /// class and returns a snapshot of the updated session.
    pub async fn append_mark(
        &self,
        username: &str,
        display_name: &str,
    ) -> Result<AttendanceSession, BotError> {
        let class = self
            .class_of(username)
            .ok_or_else(|| BotError::UnregisteredStudent(username.to_string()))?;

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(class)
            .ok_or_else(|| BotError::NoActiveSession(class.to_string()))?;
        session.append(display_name);
        Ok(session.clone())
    }

    pub async fn stats(&self) -> StoreStats {
        StoreStats {
            classes: self.roster.class_count(),
            active_sessions: self.sessions.read().await.len(),
            registered_users: self.identities.read().await.len(),
        }
    }
}
