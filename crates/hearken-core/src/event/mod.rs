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

//! Provides the primitives for synchronous, named-event communication.
//!
//! The primary component is the [`Emitter`], a thread-safe registry mapping
//! event names to ordered sets of [`Listener`]s. Emitting an event calls every
//! listener on the caller's thread before returning.
//!
//! The emitter is generic over the argument type `A`, so higher-level crates
//! decide what an event carries without this crate knowing about it.

mod config;
mod emitter;
mod error;
mod listener;

pub use self::config::EmitterConfig;
pub use self::emitter::Emitter;
pub use self::error::{EmitError, EmitResult};
pub use self::listener::{Listener, ListenerFn};
