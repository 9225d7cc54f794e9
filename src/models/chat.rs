use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Assistant,
}

/// One line of a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub text: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), author: Author::User, created_at: Utc::now() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { text: text.into(), author: Author::Assistant, created_at: Utc::now() }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}
