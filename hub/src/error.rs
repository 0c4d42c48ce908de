use thiserror::Error;

use crate::event::ListenerId;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for hub operations.
#[derive(Debug, Error)]
pub enum HubError {
    /// The channel name was never registered on this hub.
    #[error("unknown channel `{0}`")]
    UnknownChannel(&'static str),

    /// The channel exists but carries a different payload type.
    #[error("channel `{channel}` carries `{expected}`, not `{requested}`")]
    ChannelTypeMismatch {
        channel: &'static str,
        expected: &'static str,
        requested: &'static str,
    },

    /// A listener failed while a value was being published.
    #[error("listener {listener} on channel `{channel}` failed: {source}")]
    ListenerFailure {
        channel: &'static str,
        listener: ListenerId,
        #[source]
        source: ListenerError,
    },
}

impl HubError {
    /// Returns the channel name this error refers to.
    pub fn channel(&self) -> &'static str {
        match *self {
            HubError::UnknownChannel(channel)
            | HubError::ChannelTypeMismatch { channel, .. }
            | HubError::ListenerFailure { channel, .. } => channel,
        }
    }
}

/// Failure reported by a listener callback.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, keeping it available through `source()`.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
