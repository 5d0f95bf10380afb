//! Persistent key-value store contract
//!
//! Options live in an asynchronous key-value store owned by the browser. The
//! engine only ever issues one batched read at load time and one single-key
//! write per edit, so the contract is exactly those two operations.
//!
//! [`MemoryStore`] is a process-local implementation with the same observable
//! behavior, used by the test suite and handy for headless embedding. Its
//! raw entries are untyped JSON values, the shape a real extension store
//! holds.

use crate::error::{Error, Result};
use crate::schema::{OptionKey, OptionValue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Asynchronous key-value store for option values
///
/// Missing keys are simply absent from `get`'s result; absence means
/// "unset", never an error. `set` writes exactly the given pair and leaves
/// every other key untouched.
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    /// Fetch the current values for the given keys in one batched call
    async fn get(&self, keys: &[OptionKey]) -> Result<HashMap<OptionKey, OptionValue>>;

    /// Write a single key/value pair
    async fn set(&self, key: OptionKey, value: OptionValue) -> Result<()>;
}

/// In-memory [`SettingsStore`] implementation
///
/// Entries are kept as raw JSON values and converted to [`OptionValue`] on
/// read, mirroring how a browser store hands back untyped data. An entry
/// whose shape fits neither a flag nor a whitelist is reported as unset.
///
/// Cloning is cheap and clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw entry, bypassing the typed API
    ///
    /// Useful for seeding test scenarios, including entries with shapes the
    /// typed API would never produce.
    pub fn seed(&self, key: &str, value: serde_json::Value) {
        self.lock_entries().insert(key.to_string(), value);
    }

    /// A copy of all raw entries currently held
    pub fn snapshot(&self) -> HashMap<String, serde_json::Value> {
        self.lock_entries().clone()
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, serde_json::Value>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SettingsStore for MemoryStore {
    async fn get(&self, keys: &[OptionKey]) -> Result<HashMap<OptionKey, OptionValue>> {
        let entries = self.lock_entries();
        let mut values = HashMap::new();

        for &key in keys {
            let Some(raw) = entries.get(key.as_str()) else {
                continue;
            };

            match serde_json::from_value::<OptionValue>(raw.clone()) {
                Ok(value) => {
                    values.insert(key, value);
                }
                Err(_) => {
                    tracing::warn!(key = key.as_str(), "stored entry has an unusable shape");
                }
            }
        }

        Ok(values)
    }

    async fn set(&self, key: OptionKey, value: OptionValue) -> Result<()> {
        let raw = serde_json::to_value(&value)
            .map_err(|e| Error::Storage(format!("could not serialize '{key}': {e}")))?;
        self.lock_entries().insert(key.as_str().to_string(), raw);
        Ok(())
    }
}
