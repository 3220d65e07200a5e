use thiserror::Error;

/// Failure to obtain the verb list at startup.
///
/// A load error is terminal for the session: the table stays empty and the
/// message is shown inline in place of the rows.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to reach verb source {location}: {reason}")]
    Transport { location: String, reason: String },

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("verb list is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("verb #{index} has an empty `{field}` field")]
    Schema { index: usize, field: &'static str },
}

impl LoadError {
    pub(crate) fn transport(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Message shown to the user in the error state of the table.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Failed to load irregular verbs ({self}).")
    }
}
