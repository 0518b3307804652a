use teloxide::types::{ChatId, MessageId};

/// Header line every attendance message starts with.
pub fn session_header(class: &str) -> String {
    format!("Attendance session for {class}:")
}

/// One attendance-taking round for one class.
///
/// `chat_id`/`message_id` address the message that gets re-rendered each
/// time a student checks in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSession {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    text: String,
}

impl AttendanceSession {
    pub fn new(class: &str, chat_id: ChatId, message_id: MessageId) -> Self {
        Self {
            chat_id,
            message_id,
            text: session_header(class),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a name on its own line. Repeated names are kept.
    pub fn append(&mut self, name: &str) {
        self.text.push('\n');
        self.text.push_str(name);
    }

    /// Names recorded so far, in check-in order.
    pub fn marks(&self) -> Vec<&str> {
        self.text.lines().skip(1).collect()
    }
}
