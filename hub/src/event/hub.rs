//! Central registry and dispatcher for all channels.
//!
//! This module provides [`EventHub`], which owns every [`Channel`] a host
//! exposes. It handles channel registration, typed subscription, removal by
//! handle, and synchronous publishing.
//!
//! # Overview
//!
//! - **Registration**: Channels are registered while the hub is being set up
//!   (`&mut self`). After that the set of channels is fixed.
//! - **Type-safe access**: Channels are addressed by [`ChannelId<E>`], which
//!   carries the payload type. A name registered with another payload type is
//!   reported as [`HubError::ChannelTypeMismatch`].
//! - **Synchronous fan-out**: [`publish()`](EventHub::publish) runs every
//!   listener before returning. Listener failures follow the hub's
//!   [`FailurePolicy`].
//!
//! # Type Erasure
//!
//! Internally, the hub stores channels as `Box<dyn ErasedChannel>` keyed by
//! channel name. Typed accessors downcast to the concrete `Channel<E>`.
//!
//! # Example
//!
//! ```rust
//! use rusty_hub::{ChannelId, EventHub};
//!
//! const ON_LINE: ChannelId<String> = ChannelId::new("on_line");
//!
//! let mut hub = EventHub::new();
//! hub.register(ON_LINE);
//!
//! let handle = hub.subscribe(ON_LINE, |line: &String| println!("{line}")).unwrap();
//! hub.publish(ON_LINE, &"Hello".to_string()).unwrap();
//!
//! assert!(hub.unsubscribe(handle));
//! ```

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};

use log::{debug, trace};

use crate::{
    config::{FailurePolicy, HubConfig},
    error::{HubError, ListenerError},
    event::{
        ChannelId, Event, ListenerId, SubscriptionHandle,
        channel::{Channel, ErasedChannel},
    },
};

/// Listener ids are drawn from one counter shared by every hub in the process,
/// so a handle never matches a listener of another hub.
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Owner of a fixed set of named, typed broadcast channels.
///
/// `EventHub` is `Send + Sync`. Subscribing, unsubscribing and publishing all
/// take `&self`, so a hub shared through an `Arc` can be used from within its
/// own listeners.
///
/// # Registration
///
/// ```rust,ignore
/// let mut hub = EventHub::new();
/// hub.register(ON_GAME_TEXT);
/// hub.register(ON_GAME_STRING);
/// let hub = Arc::new(hub);
/// ```
pub struct EventHub {
    /// Type-erased channels, keyed by channel name.
    channels: HashMap<&'static str, Box<dyn ErasedChannel>>,

    config: HubConfig,
}

impl EventHub {
    /// Creates a hub with no channels and the default configuration.
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Creates a hub with no channels.
    pub fn with_config(config: HubConfig) -> Self {
        Self {
            channels: HashMap::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Registers a channel.
    ///
    /// # Panics
    ///
    /// Panics if a channel with the same name is already registered.
    pub fn register<E: Event>(&mut self, id: ChannelId<E>) {
        assert!(
            !self.channels.contains_key(id.name()),
            "Channel already registered: {}",
            id.name()
        );
        debug!(
            "registered channel `{}` ({})",
            id.name(),
            std::any::type_name::<E>()
        );
        self.channels
            .insert(id.name(), Box::new(Channel::<E>::new(id.name())));
    }

    /// Returns `true` if a channel with this name is registered.
    #[inline]
    pub fn is_registered(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Names of all registered channels, sorted.
    pub fn channel_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.channels.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Subscribes an infallible listener.
    ///
    /// The listener runs after every listener already on the channel.
    pub fn subscribe<E, F>(&self, id: ChannelId<E>, listener: F) -> Result<SubscriptionHandle, HubError>
    where
        E: Event,
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.subscribe_fallible(id, move |event: &E| {
            listener(event);
            Ok(())
        })
    }

    /// Subscribes a listener that may fail.
    ///
    /// A failure is handled according to the hub's [`FailurePolicy`] when the
    /// channel is published.
    pub fn subscribe_fallible<E, F>(
        &self,
        id: ChannelId<E>,
        listener: F,
    ) -> Result<SubscriptionHandle, HubError>
    where
        E: Event,
        F: Fn(&E) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        let channel = self.channel(id)?;
        let listener_id = ListenerId::new(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
        channel.add(listener_id, Box::new(listener));
        debug!("listener {} subscribed to `{}`", listener_id, id.name());
        Ok(SubscriptionHandle::new(id.name(), listener_id))
    }

    /// Removes a listener.
    ///
    /// Returns `false` if the listener was already removed; that is not an
    /// error. Safe to call from within a listener, including one running on
    /// the same channel.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let removed = self
            .channels
            .get(handle.channel())
            .is_some_and(|channel| channel.remove(handle.listener()));
        if removed {
            debug!(
                "listener {} unsubscribed from `{}`",
                handle.listener(),
                handle.channel()
            );
        }
        removed
    }

    /// Publishes a value to every listener on the channel, in subscription order.
    ///
    /// Returns once all listeners have run. Under [`FailurePolicy::FailFast`]
    /// the first failing listener stops the call and its error is returned.
    pub fn publish<E: Event>(&self, id: ChannelId<E>, value: &E) -> Result<(), HubError> {
        let channel = self.channel(id)?;
        let invoked = channel.dispatch(value, self.config.failure_policy)?;
        trace!("published to `{}` ({} listeners)", id.name(), invoked);
        Ok(())
    }

    /// Returns the number of listeners on the channel.
    pub fn listener_count<E: Event>(&self, id: ChannelId<E>) -> Result<usize, HubError> {
        Ok(self.channel(id)?.len())
    }

    /// Returns the typed channel for `id`.
    pub fn channel<E: Event>(&self, id: ChannelId<E>) -> Result<&Channel<E>, HubError> {
        let erased = self
            .channels
            .get(id.name())
            .ok_or(HubError::UnknownChannel(id.name()))?;
        erased
            .as_any()
            .downcast_ref::<Channel<E>>()
            .ok_or_else(|| HubError::ChannelTypeMismatch {
                channel: id.name(),
                expected: erased.payload_type(),
                requested: std::any::type_name::<E>(),
            })
    }

    /// Total number of listeners across all channels.
    pub fn total_listeners(&self) -> usize {
        self.channels.values().map(|channel| channel.len()).sum()
    }

    /// The failure policy applied by [`publish()`](Self::publish).
    #[inline]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.failure_policy
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
