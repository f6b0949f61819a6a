// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use super::config::EmitterConfig;
use super::error::{EmitError, EmitResult};
use super::listener::{Listener, ListenerKey};

/// A listener together with the way it was registered.
struct Registration<A> {
    /// Unique per registration, so a re-registered listener is told apart
    /// from the stale copy held by an ongoing dispatch.
    id: u64,
    listener: Listener<A>,
    once: bool,
}

impl<A> Clone for Registration<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: self.listener.clone(),
            once: self.once,
        }
    }
}

/// Registrations of one event, in registration order, keyed by listener identity.
type Registrations<A> = IndexMap<ListenerKey, Registration<A>>;

/// Dispatches named events to registered listeners, synchronously.
///
/// Each event name maps to an ordered set of [`Listener`]s. A listener is
/// registered at most once per event; registering it again is a no-op.
/// [`emit`](Emitter::emit) calls every listener in registration order on the
/// caller's thread and returns once they have all run, or as soon as one of
/// them fails.
///
/// Every method takes `&self`. The internal lock is never held while a
/// listener runs, so listeners may register, remove or emit on the same
/// emitter.
///
/// # Example
///
/// ```rust
/// use hearken_core::{Emitter, Listener};
/// use std::sync::{Arc, Mutex};
///
/// let emitter = Emitter::<&str>::new();
/// let received = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&received);
/// let listener = Listener::new(move |args: &[&'static str]| {
///     sink.lock().unwrap().extend_from_slice(args);
///     Ok(())
/// });
///
/// emitter.on("greet", listener.clone());
/// emitter.emit("greet", &["hello", "world"]).unwrap();
/// emitter.remove_listener("greet", &listener);
/// emitter.emit("greet", &["ignored"]).unwrap();
///
/// assert_eq!(*received.lock().unwrap(), vec!["hello", "world"]);
/// ```
pub struct Emitter<A> {
    config: EmitterConfig,
    events: RwLock<IndexMap<String, Registrations<A>>>,
    next_registration: AtomicU64,
}

impl<A> Emitter<A> {
    /// Creates an emitter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        log::debug!("[{}] Emitter initialized.", config.label);
        Self {
            config,
            events: RwLock::new(IndexMap::new()),
            next_registration: AtomicU64::new(0),
        }
    }

    /// Returns the configuration this emitter was created with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Registers `listener` for `event`.
    ///
    /// ## Returns
    /// `true` if the listener was added, `false` if it was already registered
    /// for this event (in which case nothing changes).
    pub fn on(&self, event: &str, listener: Listener<A>) -> bool {
        self.register(event, listener, false)
    }

    /// Registers `listener` for a single invocation of `event`.
    ///
    /// The registration is removed right before the listener is called, so it
    /// fires at most once no matter how many times `event` is emitted.
    ///
    /// ## Returns
    /// `true` if the listener was added, `false` if it was already registered
    /// for this event.
    pub fn once(&self, event: &str, listener: Listener<A>) -> bool {
        self.register(event, listener, true)
    }

    /// Calls every listener registered for `event` with `args`.
    ///
    /// Listeners run in registration order. The set of listeners is captured
    /// when the call starts: listeners added meanwhile wait for the next
    /// emit, while a one-shot listener that was removed (or removed and
    /// registered again) before its turn is skipped.
    ///
    /// ## Returns
    /// The number of listeners invoked.
    ///
    /// ## Errors
    /// [`EmitError::ListenerFailed`] as soon as a listener returns an error;
    /// the listeners after it are not called.
    pub fn emit(&self, event: &str, args: &[A]) -> EmitResult<usize> {
        let snapshot: Vec<Registration<A>> = match self.read().get(event) {
            Some(registrations) => registrations.values().cloned().collect(),
            None => Vec::new(),
        };

        log::trace!(
            "[{}] Emitting '{event}' to {} listener(s).",
            self.config.label,
            snapshot.len()
        );

        let mut invoked = 0;
        for (position, registration) in snapshot.into_iter().enumerate() {
            if registration.once && !self.consume_once(event, &registration) {
                continue;
            }

            registration
                .listener
                .call(args)
                .map_err(|source| EmitError::ListenerFailed {
                    event: event.to_owned(),
                    position,
                    source,
                })?;
            invoked += 1;
        }

        Ok(invoked)
    }

    /// Removes `listener` from `event`, whether it was registered with
    /// [`on`](Emitter::on) or [`once`](Emitter::once).
    ///
    /// ## Returns
    /// `true` if the listener was registered and has been removed.
    pub fn remove_listener(&self, event: &str, listener: &Listener<A>) -> bool {
        let removed = self
            .write()
            .get_mut(event)
            .and_then(|registrations| registrations.shift_remove(&listener.key()))
            .is_some();

        if removed {
            log::trace!("[{}] Removed a listener from '{event}'.", self.config.label);
        }
        removed
    }

    /// Removes every listener of `event`.
    ///
    /// The event itself stays known to the emitter (see
    /// [`event_names`](Emitter::event_names)), even if it had no entry before.
    ///
    /// ## Returns
    /// The number of registrations removed.
    pub fn remove_all_listeners(&self, event: &str) -> usize {
        let mut events = self.write();
        let registrations = events.entry(event.to_owned()).or_default();
        let removed = registrations.len();
        registrations.clear();

        log::trace!(
            "[{}] Removed all {removed} listener(s) from '{event}'.",
            self.config.label
        );
        removed
    }

    /// Returns the number of listeners registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.read()
            .get(event)
            .map_or(0, |registrations| registrations.len())
    }

    /// Returns `true` if `listener` is registered for `event`.
    pub fn has_listener(&self, event: &str, listener: &Listener<A>) -> bool {
        self.read()
            .get(event)
            .is_some_and(|registrations| registrations.contains_key(&listener.key()))
    }

    /// Returns every event name known to this emitter, including events whose
    /// listeners have all been removed, in the order they were first seen.
    pub fn event_names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    fn register(&self, event: &str, listener: Listener<A>, once: bool) -> bool {
        let mut events = self.write();
        let registrations = events.entry(event.to_owned()).or_default();

        let key = listener.key();
        if registrations.contains_key(&key) {
            log::trace!(
                "[{}] Listener already registered for '{event}'.",
                self.config.label
            );
            return false;
        }

        let id = self.next_registration.fetch_add(1, Ordering::Relaxed);
        registrations.insert(key, Registration { id, listener, once });
        let count = registrations.len();
        log::trace!(
            "[{}] Registered {} listener for '{event}' ({count} total).",
            self.config.label,
            if once { "a one-shot" } else { "a" }
        );

        if self.config.exceeds_max_listeners(count) {
            log::warn!(
                "[{}] {count} listeners registered for '{event}' (max {}). Possible listener leak.",
                self.config.label,
                self.config.max_listeners
            );
        }
        true
    }

    /// Removes a one-shot registration right before it fires.
    ///
    /// Returns `false` when it is already gone, or was replaced by a newer
    /// registration of the same listener, in which case it must not fire.
    fn consume_once(&self, event: &str, registration: &Registration<A>) -> bool {
        let mut events = self.write();
        let Some(registrations) = events.get_mut(event) else {
            return false;
        };

        let key = registration.listener.key();
        let consumed = registrations
            .get(&key)
            .is_some_and(|current| current.id == registration.id)
            && registrations.shift_remove(&key).is_some();
        drop(events);

        if consumed {
            log::debug!(
                "[{}] One-shot listener for '{event}' consumed.",
                self.config.label
            );
        }
        consumed
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Registrations<A>>> {
        self.events.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Registrations<A>>> {
        self.events.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}
