//! # optsync - Options Synchronization Engine
//!
//! This library is the settings-synchronization layer of a content-blocking
//! browser extension. It reconciles a small, fixed set of user options
//! between an asynchronous key-value store and an interactive form, encodes
//! the domain whitelist as an editable text field, and drives the browser's
//! network-prediction override off the prefetch-disable option.
//!
//! The store, the privacy API, the localization service, and the document
//! itself are external collaborators, reached through the [`SettingsStore`],
//! [`PrivacyControl`], [`LocaleSource`], and [`OptionsDocument`] traits. The
//! crate ships in-memory implementations of the store and the document
//! ([`MemoryStore`], [`InMemoryForm`]) for tests and headless embedding.
//!
//! ## Features
//!
//! - Fixed five-key option schema with value shapes declared once, per key
//! - Batched load, all-or-nothing element binding, per-edit single-key writes
//! - Whitelist text codec: normalize, split, join, tolerate messy input
//! - One-way network-prediction coupling on the prefetch-disable option
//! - Locale-driven script direction and unsupported-language notice
//!
//! ## Quick Start
//!
//! ### The whitelist codec
//!
//! ```rust
//! use optsync::{encode_whitelist, parse_whitelist};
//!
//! let domains = parse_whitelist("Example.com; www.fonts.net;;");
//! assert!(domains.contains_key("example.com"));
//! assert!(domains.contains_key("fonts.net"));
//!
//! assert_eq!(encode_whitelist(&domains), "example.com;fonts.net");
//! assert_eq!(encode_whitelist(&parse_whitelist("")), "");
//! ```
//!
//! ### The schema
//!
//! ```rust
//! use optsync::{OptionKey, OptionKind};
//!
//! // Value shapes are declared by the schema, never derived from the form.
//! assert_eq!(OptionKey::DisablePrefetch.kind(), OptionKind::Flag);
//! assert_eq!(OptionKey::WhitelistedDomains.kind(), OptionKind::DomainList);
//!
//! let key: OptionKey = "showIconBadge".parse()?;
//! assert_eq!(key, OptionKey::ShowIconBadge);
//! # Ok::<(), optsync::Error>(())
//! ```
//!
//! ### A full page session
//!
//! ```rust
//! use optsync::{
//!     render_options_page, FormHost, InMemoryForm, LocaleSource, MemoryStore, OptionKey,
//!     PrivacyControl, Result, ScriptDirection,
//! };
//!
//! struct NoPrivacy;
//!
//! impl PrivacyControl for NoPrivacy {
//!     async fn set(&self, _value: bool) -> Result<()> { Ok(()) }
//!     async fn clear(&self) -> Result<()> { Ok(()) }
//! }
//!
//! struct EnglishOnly;
//!
//! impl LocaleSource for EnglishOnly {
//!     fn language_is_fully_supported(&self, language: &str) -> bool {
//!         language.starts_with("en")
//!     }
//!     fn script_direction(&self, _language: &str) -> ScriptDirection {
//!         ScriptDirection::LeftToRight
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let store = MemoryStore::new();
//! store.seed("showIconBadge", serde_json::json!(true));
//!
//! let mut form = InMemoryForm::options_page();
//! let session = render_options_page(&mut form, store.clone(), NoPrivacy, &EnglishOnly, "en-US")
//!     .await?;
//!
//! // The stored flag arrived in the form.
//! let badge = form.element_for("showIconBadge").unwrap();
//! assert!(form.checked(&badge));
//!
//! // A user edit flows back to the store.
//! let field = form.element_for("whitelistedDomains").unwrap();
//! form.set_text(&field, "cdn.example.com;");
//! session.handle_change(&form, OptionKey::WhitelistedDomains).await?;
//!
//! assert_eq!(
//!     store.snapshot()["whitelistedDomains"],
//!     serde_json::json!({"cdn.example.com": true})
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible functions return [`Result<T, Error>`]. A declared key with
//! no matching form element is a configuration defect and fails
//! initialization before any binding is established; store failures
//! propagate unrecovered, leaving other keys untouched. Whitelist parsing
//! never fails: malformed field text degrades to the entries it can salvage.
//!
//! ## Concurrency Model
//!
//! Everything runs on the page's event loop. The only asynchronous boundary
//! is the initial batched load; each later edit is synchronous end-to-end
//! apart from its own store write, which callers may await or drop
//! (fire-and-forget, no ordering guarantee between rapid edits to one key).

// Re-export all public types at crate root
pub use engine::Session;
pub use error::{Error, Result};
pub use form::{ChangeTrigger, FormHost, InMemoryForm};
pub use locale::{LocaleFacts, LocaleSource, ScriptDirection};
pub use privacy::{PredictionOverride, PrivacyControl};
pub use render::{render_options_page, OptionsDocument};
pub use schema::{OptionKey, OptionKind, OptionValue};
pub use store::{MemoryStore, SettingsStore};
pub use whitelist::{
    encode_whitelist, normalize_domain, parse_whitelist, DomainWhitelist, VALUE_SEPARATOR,
};

// All modules are private - use re-exports above for public API
mod engine;
mod error;
mod form;
mod locale;
mod privacy;
mod render;
mod schema;
mod store;
mod whitelist;
