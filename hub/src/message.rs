//! Received-message channels.
//!
//! A host reports every message it receives through [`GameMessageHandler`].
//! The hub republishes it on two of four channels, chosen by the overlay
//! flag:
//!
//! | overlay | first publish            | second publish                    |
//! |---------|--------------------------|-----------------------------------|
//! | `true`  | [`ON_OVERLAY_TEXT`] (`m`) | [`ON_OVERLAY_STRING`] (stripped) |
//! | `false` | [`ON_GAME_TEXT`] (`m`)    | [`ON_GAME_STRING`] (stripped)    |
//!
//! The string is `strip_formatting(m.get_string())`. Listeners on a string
//! channel can rely on the text channel's listeners having already run for
//! the same message.

use log::trace;

use crate::{
    config::HubConfig,
    error::HubError,
    event::{ChannelId, EventHub},
    text::Text,
};

/// Game (chat) messages, as received.
pub const ON_GAME_TEXT: ChannelId<Text> = ChannelId::new("on_game_text");

/// Game (chat) messages as plain strings with formatting stripped.
pub const ON_GAME_STRING: ChannelId<String> = ChannelId::new("on_game_string");

/// Overlay (action bar) messages, as received.
pub const ON_OVERLAY_TEXT: ChannelId<Text> = ChannelId::new("on_overlay_text");

/// Overlay (action bar) messages as plain strings with formatting stripped.
pub const ON_OVERLAY_STRING: ChannelId<String> = ChannelId::new("on_overlay_string");

/// Upstream contract for hosts delivering received messages.
///
/// Hosts call this once per received message, before running their own
/// handling of it. The call returns after every listener has run, or with the
/// first listener failure under [`FailurePolicy::FailFast`](crate::FailurePolicy::FailFast).
pub trait GameMessageHandler {
    fn on_game_message(&self, message: &Text, overlay: bool) -> Result<(), HubError>;
}

/// Registers the four message channels on `hub`.
///
/// # Panics
///
/// Panics if any of them is already registered.
pub fn register_message_channels(hub: &mut EventHub) {
    hub.register(ON_GAME_TEXT);
    hub.register(ON_GAME_STRING);
    hub.register(ON_OVERLAY_TEXT);
    hub.register(ON_OVERLAY_STRING);
}

impl EventHub {
    /// Creates a hub with the four message channels registered.
    pub fn message_hub(config: HubConfig) -> Self {
        let mut hub = EventHub::with_config(config);
        register_message_channels(&mut hub);
        hub
    }
}

impl GameMessageHandler for EventHub {
    fn on_game_message(&self, message: &Text, overlay: bool) -> Result<(), HubError> {
        let (text_channel, string_channel) = if overlay {
            (ON_OVERLAY_TEXT, ON_OVERLAY_STRING)
        } else {
            (ON_GAME_TEXT, ON_GAME_STRING)
        };
        trace!("received message (overlay: {overlay})");

        self.publish(text_channel, message)?;
        self.publish(string_channel, &message.stripped())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{FailurePolicy, ListenerError, text::Formatting};

    #[derive(Debug, Clone, PartialEq)]
    enum Seen {
        GameText(Text),
        GameString(String),
        OverlayText(Text),
        OverlayString(String),
    }

    /// Hub with one recording listener on each channel.
    fn recording_hub(config: HubConfig) -> (EventHub, Arc<Mutex<Vec<Seen>>>) {
        let hub = EventHub::message_hub(config);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&seen);
        hub.subscribe(ON_GAME_TEXT, move |t: &Text| {
            log.lock().unwrap().push(Seen::GameText(t.clone()))
        })
        .unwrap();
        let log = Arc::clone(&seen);
        hub.subscribe(ON_GAME_STRING, move |s: &String| {
            log.lock().unwrap().push(Seen::GameString(s.clone()))
        })
        .unwrap();
        let log = Arc::clone(&seen);
        hub.subscribe(ON_OVERLAY_TEXT, move |t: &Text| {
            log.lock().unwrap().push(Seen::OverlayText(t.clone()))
        })
        .unwrap();
        let log = Arc::clone(&seen);
        hub.subscribe(ON_OVERLAY_STRING, move |s: &String| {
            log.lock().unwrap().push(Seen::OverlayString(s.clone()))
        })
        .unwrap();

        (hub, seen)
    }

    #[test]
    fn message_hub_registers_four_channels() {
        let hub = EventHub::message_hub(HubConfig::default());

        assert_eq!(
            hub.channel_names(),
            vec![
                "on_game_string",
                "on_game_text",
                "on_overlay_string",
                "on_overlay_text"
            ]
        );
    }

    // ==================== Routing ====================

    #[test]
    fn game_message_publishes_text_then_string() {
        let (hub, seen) = recording_hub(HubConfig::default());
        let message = Text::literal("§aWelcome").append(" back");

        hub.on_game_message(&message, false).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Seen::GameText(message),
                Seen::GameString("Welcome back".into())
            ]
        );
    }

    #[test]
    fn overlay_message_publishes_text_then_string() {
        let (hub, seen) = recording_hub(HubConfig::default());
        let message = Text::literal("§cDanger");

        hub.on_game_message(&message, true).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Seen::OverlayText(Text::literal("§cDanger")),
                Seen::OverlayString("Danger".into())
            ]
        );
    }

    #[test]
    fn styled_message_string_is_its_plain_content() {
        let (hub, seen) = recording_hub(HubConfig::default());
        let message = Text::empty()
            .append(Text::literal("[Guild] ").formatted(Formatting::DarkGreen))
            .append(Text::literal("§lAlex§r: hi"));

        hub.on_game_message(&message, false).unwrap();

        assert_eq!(
            seen.lock().unwrap().last(),
            Some(&Seen::GameString("[Guild] Alex: hi".into()))
        );
    }

    #[test]
    fn subscribers_run_in_order_before_string_channel() {
        let hub = EventHub::message_hub(HubConfig::default());
        let calls = Arc::new(Mutex::new(Vec::new()));

        for tag in ["L1", "L2"] {
            let calls = Arc::clone(&calls);
            hub.subscribe(ON_GAME_TEXT, move |t: &Text| {
                calls.lock().unwrap().push(format!("{tag}({})", t.get_string()))
            })
            .unwrap();
        }
        {
            let calls = Arc::clone(&calls);
            hub.subscribe(ON_GAME_STRING, move |s: &String| {
                calls.lock().unwrap().push(format!("S({s})"))
            })
            .unwrap();
        }

        hub.on_game_message(&Text::literal("Hello"), false).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["L1(Hello)", "L2(Hello)", "S(Hello)"]
        );
    }

    // ==================== Failures ====================

    #[test]
    fn failing_text_listener_suppresses_string_publish() {
        let (hub, seen) = recording_hub(HubConfig::default());
        hub.subscribe_fallible(ON_OVERLAY_TEXT, |_: &Text| Err(ListenerError::new("bad")))
            .unwrap();

        let err = hub
            .on_game_message(&Text::literal("§cDanger"), true)
            .unwrap_err();

        assert_eq!(err.channel(), "on_overlay_text");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Seen::OverlayText(Text::literal("§cDanger"))]
        );
    }

    #[test]
    fn isolated_failure_still_publishes_string() {
        let config = HubConfig {
            failure_policy: FailurePolicy::Isolate,
        };
        let (hub, seen) = recording_hub(config);
        hub.subscribe_fallible(ON_GAME_TEXT, |_: &Text| Err(ListenerError::new("bad")))
            .unwrap();

        hub.on_game_message(&Text::literal("hi"), false).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Seen::GameText(Text::literal("hi")),
                Seen::GameString("hi".into())
            ]
        );
    }

    #[test]
    fn missing_channels_are_reported() {
        let hub = EventHub::new();

        let err = hub.on_game_message(&Text::literal("hi"), false).unwrap_err();

        assert!(matches!(err, HubError::UnknownChannel("on_game_text")));
    }
}
