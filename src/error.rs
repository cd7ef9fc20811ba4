use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Errors that can be sent back to the frontend. `thiserror` handles the
// conversions and the manual `Serialize` impl lets a command return the
// error in its `Err` variant as a plain string.
#[derive(Debug, Error)]
pub enum Error {
    /// A share target was built from broken static configuration.
    #[error("Invalid share target configuration: {0}")]
    Config(String),
    /// The payload still has no usable title or text after normalization.
    #[error("Share payload is missing a title or text")]
    InvalidPayload,
    /// Dispatch named a target that is not registered.
    #[error("Unknown share target: {0}")]
    UnknownTarget(String),
    /// A command referenced a share session that does not exist.
    #[error("Unknown share session: {0}")]
    UnknownSession(String),
    /// A command referenced a share session that already completed.
    #[error("Share session already completed: {0}")]
    SessionClosed(String),
    /// The user dismissed the share sheet without picking a target.
    #[error("Share cancelled")]
    Cancelled,
    /// A target's custom handler failed.
    #[error("Share target handler failed: {0}")]
    Handler(String),
    #[error("Tauri API error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
