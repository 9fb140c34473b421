use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const TITLE_MAX_CHARS: usize = 100;
pub const BODY_MAX_CHARS: usize = 300;

/// Push notification composed in the broadcast console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("a notification title is required")]
    MissingTitle,
    #[error("a notification body is required")]
    MissingBody,
    #[error("title is limited to {max} characters (got {given})")]
    TitleTooLong { max: usize, given: usize },
    #[error("body is limited to {max} characters (got {given})")]
    BodyTooLong { max: usize, given: usize },
}

impl BroadcastMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Lengths count Unicode scalar values, not bytes.
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.title.trim().is_empty() {
            return Err(MessageError::MissingTitle);
        }
        if self.body.trim().is_empty() {
            return Err(MessageError::MissingBody);
        }

        let title_chars = self.title.chars().count();
        if title_chars > TITLE_MAX_CHARS {
            return Err(MessageError::TitleTooLong {
                max: TITLE_MAX_CHARS,
                given: title_chars,
            });
        }

        let body_chars = self.body.chars().count();
        if body_chars > BODY_MAX_CHARS {
            return Err(MessageError::BodyTooLong {
                max: BODY_MAX_CHARS,
                given: body_chars,
            });
        }

        Ok(())
    }
}
