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

use serde::{Deserialize, Serialize};

/// Tunables for an [`Emitter`](super::Emitter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Name prefixed to every log line emitted by this emitter.
    pub label: String,
    /// Listener count per event above which a possible leak is reported.
    /// `0` disables the check.
    pub max_listeners: usize,
}

impl EmitterConfig {
    /// Default threshold for the listener-leak warning.
    pub const DEFAULT_MAX_LISTENERS: usize = 10;

    /// Returns a copy of this configuration with the given label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns a copy of this configuration with the given leak threshold.
    pub fn with_max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = max_listeners;
        self
    }

    /// Whether `count` listeners on one event exceeds the configured threshold.
    pub(crate) fn exceeds_max_listeners(&self, count: usize) -> bool {
        self.max_listeners != 0 && count > self.max_listeners
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            label: "emitter".to_string(),
            max_listeners: Self::DEFAULT_MAX_LISTENERS,
        }
    }
}
