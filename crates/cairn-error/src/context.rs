//! Typed side-channel context carried by an error value.
//!
//! A producer attaches a strongly-typed payload under a [`ContextKey`]
//! without the base error type knowing about the key in advance; a handler
//! later asks "does this error carry context tagged `K`, and if so what is
//! its value". Keys are marker types carrying a stable name, so attached
//! context survives serialization and displays deterministically.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Marker type naming one context slot an error can carry.
///
/// `NAME` must be unique among the keys attached to the same error; it is
/// also the field name the slot serializes under, so it should be a stable
/// snake_case identifier.
pub trait ContextKey {
    /// Stable, unique name of the slot.
    const NAME: &'static str;
    /// Value stored under the slot.
    type Value: Serialize + DeserializeOwned;
}

/// Ordered map backing context attachment.
///
/// Values are stored as JSON so the map stays serializable; `BTreeMap`
/// keeps iteration (and therefore display) order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ContextMap {
    entries: BTreeMap<String, Value>,
}

impl ContextMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no context has been attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attached slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stores `value` under `K`, replacing any earlier value for the key.
    ///
    /// A value that fails to serialize is silently skipped.
    pub fn insert<K: ContextKey>(&mut self, value: K::Value) {
        if let Ok(v) = serde_json::to_value(value) {
            self.entries.insert(K::NAME.to_string(), v);
        }
    }

    /// Typed lookup; `None` when `K` was never attached.
    pub fn get<K: ContextKey>(&self) -> Option<K::Value> {
        let raw = self.entries.get(K::NAME)?;
        serde_json::from_value(raw.clone()).ok()
    }

    /// Raw JSON view of the attached slots.
    pub fn as_json(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }
}

/// OS error code reported by the platform for a failed call.
///
/// Attached by [`check_platform`](crate::check_platform) and the
/// [`check_platform!`](crate::check_platform!) macro.
pub struct PlatformCode;

impl ContextKey for PlatformCode {
    const NAME: &'static str = "platform_code";
    type Value = i32;
}
