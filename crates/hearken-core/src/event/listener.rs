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

use std::fmt;
use std::sync::Arc;

/// The callback signature shared by every listener of an `Emitter<A>`.
pub type ListenerFn<A> = dyn Fn(&[A]) -> anyhow::Result<()> + Send + Sync;

/// Identity of a listener: the address of its shared callback.
pub(crate) type ListenerKey = usize;

/// A handler that can be registered against named events.
///
/// A `Listener` is compared by identity, not by behavior. Cloning it yields a
/// handle to the same handler, which is how callers later remove it:
///
/// ```rust
/// use hearken_core::Listener;
///
/// let a = Listener::<u32>::new(|_| Ok(()));
/// let b = a.clone();
/// let c = Listener::<u32>::new(|_| Ok(()));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
pub struct Listener<A> {
    callback: Arc<ListenerFn<A>>,
}

impl<A> Listener<A> {
    /// Wraps a closure into a new listener with its own identity.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&[A]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invokes the handler with the given arguments.
    pub fn call(&self, args: &[A]) -> anyhow::Result<()> {
        (self.callback)(args)
    }

    pub(crate) fn key(&self) -> ListenerKey {
        Arc::as_ptr(&self.callback) as *const () as usize
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:#x})", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_call_forwards_arguments() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        let listener = Listener::new(move |args: &[usize]| {
            seen_clone.store(args.iter().sum(), Ordering::SeqCst);
            Ok(())
        });

        listener.call(&[1, 2, 3]).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_clone_shares_identity() {
        let listener = Listener::<()>::new(|_| Ok(()));
        let clone = listener.clone();

        assert_eq!(listener, clone);
        assert_eq!(listener.key(), clone.key());
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let first = Listener::<()>::new(|_| Ok(()));
        let second = Listener::<()>::new(|_| Ok(()));

        assert_ne!(first, second);
    }

    #[test]
    fn test_call_propagates_error() {
        let listener = Listener::<()>::new(|_| anyhow::bail!("handler exploded"));

        let err = listener.call(&[]).unwrap_err();
        assert_eq!(err.to_string(), "handler exploded");
    }

    #[test]
    fn test_debug_shows_identity() {
        let listener = Listener::<()>::new(|_| Ok(()));
        let rendered = format!("{listener:?}");

        assert!(rendered.starts_with("Listener(0x"));
    }
}
