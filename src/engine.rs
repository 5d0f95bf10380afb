//! Option synchronization engine
//!
//! Owns the load/bind/persist lifecycle for every declared option. A
//! [`Session`] is created once per page: [`Session::load`] resolves every
//! form element, fetches all stored values in one batched read, binds them
//! into the form, and registers change listeners. Each subsequent edit
//! re-enters the engine through [`Session::handle_change`], which derives
//! the new value from the element by its schema-declared kind, applies the
//! network-prediction side effect where applicable, and writes exactly the
//! changed key back to the store.
//!
//! # Example
//!
//! ```rust
//! use optsync::{FormHost, InMemoryForm, MemoryStore, OptionKey, PrivacyControl, Result, Session};
//!
//! struct NoPrivacy;
//!
//! impl PrivacyControl for NoPrivacy {
//!     async fn set(&self, _value: bool) -> Result<()> { Ok(()) }
//!     async fn clear(&self) -> Result<()> { Ok(()) }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let store = MemoryStore::new();
//! let mut form = InMemoryForm::options_page();
//!
//! let session = Session::load(store.clone(), NoPrivacy, &mut form).await?;
//!
//! // The user checks "block missing"; the host reports the change.
//! let element = form.element_for("blockMissing").unwrap();
//! form.set_checked(&element, true);
//! session.handle_change(&form, OptionKey::BlockMissing).await?;
//!
//! assert_eq!(store.snapshot()["blockMissing"], serde_json::json!(true));
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::form::{ChangeTrigger, FormHost};
use crate::privacy::{PredictionOverride, PrivacyControl};
use crate::schema::{OptionKey, OptionKind, OptionValue};
use crate::store::SettingsStore;
use crate::whitelist::{encode_whitelist, parse_whitelist, DomainWhitelist};
use std::collections::HashMap;

/// One page's worth of option bindings
///
/// Created once by [`Session::load`] and threaded through every later edit;
/// there is no teardown, the session simply drops with the page. Loading
/// twice against the same host would register duplicate listeners, so a
/// session is loaded at most once per page lifetime.
pub struct Session<S, P, H: FormHost> {
    store: S,
    privacy: P,
    bindings: HashMap<OptionKey, H::Element>,
}

impl<S, P, H> Session<S, P, H>
where
    S: SettingsStore,
    P: PrivacyControl,
    H: FormHost,
{
    /// Resolve, load, and bind every declared option
    ///
    /// Element resolution is all-or-nothing: if any declared key has no
    /// matching element, initialization fails with
    /// [`Error::BindingNotFound`] before anything is read, bound, or
    /// observed. Stored values are fetched in one batched call; a key with
    /// no stored entry is unset, leaving a flag element at its markup
    /// default and rendering the whitelist field as the empty string.
    pub async fn load(store: S, privacy: P, host: &mut H) -> Result<Self> {
        let mut bindings = HashMap::new();
        for key in OptionKey::ALL {
            let element =
                host.element_for(key.as_str())
                    .ok_or_else(|| Error::BindingNotFound {
                        key: key.as_str().to_string(),
                    })?;
            bindings.insert(key, element);
        }

        let values = store.get(&OptionKey::ALL).await?;
        tracing::debug!(stored = values.len(), "loaded option values");

        for (key, element) in &bindings {
            bind_value(host, *key, element, values.get(key));
        }

        for (key, element) in &bindings {
            let trigger = match key.kind() {
                OptionKind::Flag => ChangeTrigger::Commit,
                OptionKind::DomainList => ChangeTrigger::Keystroke,
            };
            host.observe(element, trigger);
        }

        Ok(Session {
            store,
            privacy,
            bindings,
        })
    }

    /// Persist one changed option
    ///
    /// Reads the element's current state by the key's schema-declared kind:
    /// a flag takes its checked state, the whitelist re-parses the field
    /// text into a fresh mapping (a full replace of the previous one). If
    /// the changed key is the prefetch-disable flag, the network-prediction
    /// override is driven first. Exactly one store write is issued, for
    /// exactly the changed key.
    pub async fn handle_change(&self, host: &H, key: OptionKey) -> Result<()> {
        let element = self
            .bindings
            .get(&key)
            .ok_or_else(|| Error::BindingNotFound {
                key: key.as_str().to_string(),
            })?;

        let value = match key.kind() {
            OptionKind::Flag => {
                let checked = host.checked(element);
                if key == OptionKey::DisablePrefetch {
                    PredictionOverride::for_prefetch_disabled(checked)
                        .apply(&self.privacy)
                        .await?;
                }
                OptionValue::Flag(checked)
            }
            OptionKind::DomainList => OptionValue::Domains(parse_whitelist(&host.text(element))),
        };

        tracing::debug!(key = key.as_str(), "persisting option change");
        self.store.set(key, value).await
    }
}

/// Push one stored value into its form element
fn bind_value<H: FormHost>(
    host: &mut H,
    key: OptionKey,
    element: &H::Element,
    value: Option<&OptionValue>,
) {
    match key.kind() {
        OptionKind::Flag => match value {
            Some(value) => match value.as_flag() {
                Some(checked) => host.set_checked(element, checked),
                None => {
                    tracing::warn!(key = key.as_str(), "stored value is not a flag; left unset");
                }
            },
            // Never set: the element keeps its markup default.
            None => {}
        },
        OptionKind::DomainList => {
            let domains = match value {
                Some(value) => match value.as_domains() {
                    Some(domains) => domains.clone(),
                    None => {
                        tracing::warn!(
                            key = key.as_str(),
                            "stored value is not a whitelist; rendering empty"
                        );
                        DomainWhitelist::new()
                    }
                },
                None => DomainWhitelist::new(),
            };
            host.set_text(element, &encode_whitelist(&domains));
        }
    }
}
