//! The fixed option schema
//!
//! A content-blocking extension exposes a small, closed set of user options.
//! This module declares that set: every recognized [`OptionKey`], the marker
//! string each one carries in the form markup, and the shape of its value.
//!
//! The value shape is declared here, once, per key. The synchronization
//! engine dispatches on [`OptionKey::kind`] when an edit arrives instead of
//! inspecting the form element, so a declared shape and an observed element
//! type can never disagree.
//!
//! # Example
//!
//! ```rust
//! use optsync::{OptionKey, OptionKind};
//!
//! assert_eq!(OptionKey::ShowIconBadge.as_str(), "showIconBadge");
//! assert_eq!(OptionKey::WhitelistedDomains.kind(), OptionKind::DomainList);
//! assert_eq!(OptionKey::ALL.len(), 5);
//! ```

use crate::whitelist::DomainWhitelist;
use serde::{Deserialize, Serialize};

/// One of the five recognized option keys
///
/// Serializes to its marker spelling (`showIconBadge`, `blockMissing`,
/// `disablePrefetch`, `stripMetadata`, `whitelistedDomains`), which is also
/// the storage key and the form element's marker attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    /// Show a hit counter on the toolbar icon
    ShowIconBadge,
    /// Block requests for resources with no local counterpart
    BlockMissing,
    /// Disable the browser's network-prediction feature
    DisablePrefetch,
    /// Strip metadata headers from allowed requests
    StripMetadata,
    /// Domains exempted from blocking
    WhitelistedDomains,
}

impl OptionKey {
    /// Every declared key, in form order
    ///
    /// The engine binds exactly this set. No key outside it is ever read
    /// from or written to the store.
    pub const ALL: [OptionKey; 5] = [
        OptionKey::ShowIconBadge,
        OptionKey::BlockMissing,
        OptionKey::DisablePrefetch,
        OptionKey::StripMetadata,
        OptionKey::WhitelistedDomains,
    ];

    /// The key's marker spelling, as used in storage and form markup
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::ShowIconBadge => "showIconBadge",
            OptionKey::BlockMissing => "blockMissing",
            OptionKey::DisablePrefetch => "disablePrefetch",
            OptionKey::StripMetadata => "stripMetadata",
            OptionKey::WhitelistedDomains => "whitelistedDomains",
        }
    }

    /// The declared shape of this key's value
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionKey::WhitelistedDomains => OptionKind::DomainList,
            _ => OptionKind::Flag,
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionKey {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| crate::error::Error::UnknownOptionKey(s.to_string()))
    }
}

/// The shape of an option's value, fixed by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A plain on/off toggle, bound to a checkbox-like element
    Flag,
    /// A domain whitelist, bound to a text-like element via its text encoding
    DomainList,
}

/// A stored option value
///
/// Untagged on the wire: a flag persists as a bare JSON boolean and a
/// whitelist as an object mapping each domain to `true`, matching what the
/// extension's key-value store actually holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean toggle value
    Flag(bool),
    /// Domain whitelist presence-mapping
    Domains(DomainWhitelist),
}

impl OptionValue {
    /// The flag value, if this is a flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            OptionValue::Flag(value) => Some(*value),
            OptionValue::Domains(_) => None,
        }
    }

    /// The whitelist, if this is a domain list
    pub fn as_domains(&self) -> Option<&DomainWhitelist> {
        match self {
            OptionValue::Flag(_) => None,
            OptionValue::Domains(domains) => Some(domains),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_spellings() {
        assert_eq!(OptionKey::ShowIconBadge.as_str(), "showIconBadge");
        assert_eq!(OptionKey::BlockMissing.as_str(), "blockMissing");
        assert_eq!(OptionKey::DisablePrefetch.as_str(), "disablePrefetch");
        assert_eq!(OptionKey::StripMetadata.as_str(), "stripMetadata");
        assert_eq!(OptionKey::WhitelistedDomains.as_str(), "whitelistedDomains");
    }

    #[test]
    fn test_from_str_round_trip() {
        for key in OptionKey::ALL {
            assert_eq!(key.as_str().parse::<OptionKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_key() {
        let result = "blockEverything".parse::<OptionKey>();
        assert!(result.is_err());
    }

    #[test]
    fn test_only_whitelist_is_a_domain_list() {
        for key in OptionKey::ALL {
            let expected = if key == OptionKey::WhitelistedDomains {
                OptionKind::DomainList
            } else {
                OptionKind::Flag
            };
            assert_eq!(key.kind(), expected);
        }
    }

    #[test]
    fn test_flag_serializes_as_bare_boolean() {
        let json = serde_json::to_value(OptionValue::Flag(true)).unwrap();
        assert_eq!(json, serde_json::json!(true));
    }

    #[test]
    fn test_domains_serialize_as_presence_object() {
        let mut domains = DomainWhitelist::new();
        domains.insert("example.com".to_string(), true);
        let json = serde_json::to_value(OptionValue::Domains(domains)).unwrap();
        assert_eq!(json, serde_json::json!({"example.com": true}));
    }

    #[test]
    fn test_untagged_deserialization_picks_the_right_variant() {
        let flag: OptionValue = serde_json::from_value(serde_json::json!(false)).unwrap();
        assert_eq!(flag.as_flag(), Some(false));

        let domains: OptionValue =
            serde_json::from_value(serde_json::json!({"example.com": true})).unwrap();
        assert!(domains.as_domains().unwrap().contains_key("example.com"));
    }

    #[test]
    fn test_key_serializes_to_marker_spelling() {
        let json = serde_json::to_value(OptionKey::DisablePrefetch).unwrap();
        assert_eq!(json, serde_json::json!("disablePrefetch"));
    }
}
