//! Ordered listener storage for a single channel.
//!
//! This module provides [`Channel`], the storage type behind every named
//! channel of an [`EventHub`](super::EventHub). A channel keeps its listeners
//! in subscription order and invokes them synchronously on dispatch.
//!
//! # Snapshot Dispatch
//!
//! The listener list is guarded by a mutex that is held only to append,
//! remove, or clone the list. [`dispatch()`](Channel::dispatch) clones the list
//! first and then runs the listeners with the lock released, so a listener may
//! subscribe, unsubscribe, or publish again without deadlocking:
//!
//! - Listeners added during a dispatch are not invoked by that dispatch.
//! - Every registration carries an `active` flag that removal clears. A
//!   snapshotted listener whose flag is clear is skipped, so a listener removed
//!   mid-dispatch is never invoked afterwards by the same dispatch.
//!
//! # Example
//!
//! ```rust,ignore
//! let channel = Channel::<String>::new("on_game_string");
//!
//! channel.add(ListenerId::new(1), Box::new(|line: &String| {
//!     println!("chat: {line}");
//!     Ok(())
//! }));
//!
//! let invoked = channel.dispatch(&"Hello".to_string(), FailurePolicy::FailFast)?;
//! assert_eq!(invoked, 1);
//! ```

use std::{
    any::Any,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use log::warn;

use crate::{
    config::FailurePolicy,
    error::{HubError, ListenerError},
    event::{Event, ListenerId},
};

/// Boxed listener callback for payload type `E`.
pub type Callback<E> = dyn Fn(&E) -> Result<(), ListenerError> + Send + Sync;

struct Registration<E: Event> {
    id: ListenerId,
    /// Cleared on removal; checked before each invocation.
    active: AtomicBool,
    callback: Box<Callback<E>>,
}

/// Ordered set of listeners for a single payload type.
///
/// `Channel<E>` is owned by the hub and lives as long as it does. Listeners
/// come and go; the channel itself is never removed.
///
/// Listeners are only added and removed through the hub, which hands out the
/// listener ids:
///
/// ```compile_fail
/// use rusty_hub::{ChannelId, EventHub, ListenerId};
///
/// const ON_LINE: ChannelId<String> = ChannelId::new("on_line");
///
/// let mut hub = EventHub::new();
/// hub.register(ON_LINE);
/// let channel = hub.channel(ON_LINE).unwrap();
/// channel.add(ListenerId::new(1), Box::new(|_: &String| Ok(())));
/// ```
pub struct Channel<E: Event> {
    name: &'static str,
    listeners: Mutex<Vec<Arc<Registration<E>>>>,
}

impl<E: Event> Channel<E> {
    /// Creates an empty channel.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Mutex::new(Vec::new()),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Appends a listener. It runs after every listener already present.
    pub(crate) fn add(&self, id: ListenerId, callback: Box<Callback<E>>) {
        self.lock().push(Arc::new(Registration {
            id,
            active: AtomicBool::new(true),
            callback,
        }));
    }

    /// Removes the listener with the given id.
    ///
    /// Returns `false` if no such listener is present (already removed or
    /// never added).
    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock();
        let Some(position) = listeners.iter().position(|r| r.id == id) else {
            return false;
        };
        let registration = listeners.remove(position);
        registration.active.store(false, Ordering::Release);
        true
    }

    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Listener ids in invocation order.
    pub fn listener_ids(&self) -> Vec<ListenerId> {
        self.lock().iter().map(|r| r.id).collect()
    }

    /// Invokes every listener present at the start of the call, in order.
    ///
    /// Returns the number of listeners that were invoked. With
    /// [`FailurePolicy::FailFast`] the first failing listener ends the
    /// dispatch and its error is returned; with [`FailurePolicy::Isolate`]
    /// the failure is logged and the remaining listeners still run.
    pub(crate) fn dispatch(&self, event: &E, policy: FailurePolicy) -> Result<usize, HubError> {
        let snapshot: Vec<Arc<Registration<E>>> = self.lock().clone();
        let mut invoked = 0;

        for registration in snapshot {
            if !registration.active.load(Ordering::Acquire) {
                continue;
            }
            invoked += 1;
            if let Err(source) = (registration.callback)(event) {
                match policy {
                    FailurePolicy::FailFast => {
                        return Err(HubError::ListenerFailure {
                            channel: self.name,
                            listener: registration.id,
                            source,
                        });
                    }
                    FailurePolicy::Isolate => {
                        warn!(
                            "listener {} on channel `{}` failed: {}",
                            registration.id, self.name, source
                        );
                    }
                }
            }
        }

        Ok(invoked)
    }

    // Listener code never runs under this lock, so a poisoned lock still
    // guards a consistent list.
    fn lock(&self) -> MutexGuard<'_, Vec<Arc<Registration<E>>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Type-erased view of a [`Channel`] so the hub can store channels of
/// different payload types side by side.
pub(crate) trait ErasedChannel: Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn remove(&self, id: ListenerId) -> bool;

    fn len(&self) -> usize;

    /// Type name of the payload, used in mismatch errors.
    fn payload_type(&self) -> &'static str;
}

impl<E: Event> ErasedChannel for Channel<E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn remove(&self, id: ListenerId) -> bool {
        Channel::remove(self, id)
    }

    fn len(&self) -> usize {
        Channel::len(self)
    }

    fn payload_type(&self) -> &'static str {
        std::any::type_name::<E>()
    }
}
