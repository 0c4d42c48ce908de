pub mod channel;
pub mod hub;

use std::{fmt, marker::PhantomData};

pub use channel::Channel;
pub use hub::EventHub;

/// Marker trait for event payload types.
///
/// Payloads must be:
/// - `'static`: No borrowed data
/// - `Send + Sync`: The hub may be shared across threads
pub trait Event: 'static + Send + Sync {}

impl Event for String {}

/// Typed key naming a channel on an [`EventHub`].
///
/// The name identifies the channel, the type parameter fixes the payload type
/// its listeners receive. Ids are `const` so the set of channels a host
/// exposes can be declared as constants.
pub struct ChannelId<E: Event> {
    name: &'static str,
    _payload: PhantomData<fn() -> E>,
}

impl<E: Event> ChannelId<E> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _payload: PhantomData,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Event> Clone for ChannelId<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Event> Copy for ChannelId<E> {}

impl<E: Event> fmt::Debug for ChannelId<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelId")
            .field("name", &self.name)
            .field("payload", &std::any::type_name::<E>())
            .finish()
    }
}

/// A listener identifier, unique across every hub in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ListenerId(id)
    }

    #[inline]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Returned by `subscribe`; pass it to [`EventHub::unsubscribe`] to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    channel: &'static str,
    listener: ListenerId,
}

impl SubscriptionHandle {
    pub(crate) const fn new(channel: &'static str, listener: ListenerId) -> Self {
        Self { channel, listener }
    }

    #[inline]
    pub const fn channel(&self) -> &'static str {
        self.channel
    }

    #[inline]
    pub const fn listener(&self) -> ListenerId {
        self.listener
    }
}
