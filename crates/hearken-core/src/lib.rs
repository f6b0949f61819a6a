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

//! # Hearken Core
//!
//! A small, synchronous event emitter. Parts of a program register
//! [`Listener`]s against named events on an [`Emitter`] and are called back,
//! in registration order, every time the event is emitted.

#![warn(missing_docs)]

pub mod event;

pub use event::{EmitError, EmitResult, Emitter, EmitterConfig, Listener};
