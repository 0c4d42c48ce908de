//! Typed broadcast event hub for messages received by a game client.
//!
//! The host integration layer hands every received message to the hub through
//! [`GameMessageHandler`]. The hub republishes it on four channels:
//!
//! - [`ON_GAME_TEXT`] / [`ON_GAME_STRING`] for chat messages
//! - [`ON_OVERLAY_TEXT`] / [`ON_OVERLAY_STRING`] for overlay messages
//!
//! each once as the structured [`Text`] and once as a plain string with
//! formatting codes stripped. The channels themselves are an instance of the
//! general [`EventHub`], which can carry any set of named, typed channels.
//!
//! # Example
//!
//! ```rust
//! use rusty_hub::{EventHub, GameMessageHandler, HubConfig, ON_OVERLAY_STRING, Text};
//!
//! let hub = EventHub::message_hub(HubConfig::default());
//! hub.subscribe(ON_OVERLAY_STRING, |line: &String| assert_eq!(line, "Danger"))
//!     .unwrap();
//!
//! hub.on_game_message(&Text::literal("§cDanger"), true).unwrap();
//! ```
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod message;
pub mod text;

pub use config::{FailurePolicy, HubConfig};
pub use error::{HubError, ListenerError};
pub use event::{ChannelId, Event, EventHub, ListenerId, SubscriptionHandle};
pub use message::{
    GameMessageHandler, ON_GAME_STRING, ON_GAME_TEXT, ON_OVERLAY_STRING, ON_OVERLAY_TEXT,
    register_message_channels,
};
pub use text::{Formatting, Style, Text, strip_formatting};
