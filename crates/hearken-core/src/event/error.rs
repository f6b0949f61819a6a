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

/// A specialized `Result` type for emitter operations.
pub type EmitResult<T> = Result<T, EmitError>;

/// An error that can occur while emitting an event.
#[derive(Debug)]
pub enum EmitError {
    /// A listener returned an error. Listeners after it in the dispatch were
    /// not called.
    ListenerFailed {
        /// The event being emitted.
        event: String,
        /// Position of the failing listener in the dispatch order.
        position: usize,
        /// The error returned by the listener.
        source: anyhow::Error,
    },
}

impl EmitError {
    /// The event whose dispatch failed.
    pub fn event(&self) -> &str {
        match self {
            EmitError::ListenerFailed { event, .. } => event,
        }
    }
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::ListenerFailed {
                event,
                position,
                source,
            } => write!(
                f,
                "Listener #{position} for event '{event}' failed: {source}"
            ),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::ListenerFailed { source, .. } => Some(&**source),
        }
    }
}
