//! Domain whitelist text codec
//!
//! The whitelist is persisted as a presence-mapping from normalized domain to
//! `true`, but edited as a single text field. This module owns the mapping
//! between the two: [`encode_whitelist`] produces the field text fresh from
//! the mapping on every render, and [`parse_whitelist`] rebuilds the mapping
//! fresh from the field text on every edit. The text form is never persisted.
//!
//! Parsing never fails. Empty tokens (consecutive separators, a blank field)
//! are dropped, and every surviving token goes through [`normalize_domain`]
//! best-effort. Two distinct tokens that normalize to the same domain
//! collapse into one entry; a presence-mapping cannot distinguish merged
//! origins, and each edit is a full replace of the previous mapping.
//!
//! # Example
//!
//! ```rust
//! use optsync::{encode_whitelist, parse_whitelist};
//!
//! let domains = parse_whitelist("Example.com; www.fonts.net;;");
//! assert!(domains.contains_key("example.com"));
//! assert!(domains.contains_key("fonts.net"));
//! assert_eq!(encode_whitelist(&domains), "example.com;fonts.net");
//! ```

use std::collections::BTreeMap;

/// Separator between domains in the text encoding
pub const VALUE_SEPARATOR: char = ';';

/// Set of whitelisted domains, represented as a presence-mapping
///
/// Every key is a normalized domain string; the `true` value carries no
/// information beyond presence. Duplicates collapse naturally because this
/// is a mapping, not a list.
pub type DomainWhitelist = BTreeMap<String, bool>;

/// Normalize a single domain token
///
/// Strips surrounding whitespace, lowercases, and drops a leading `www.`
/// label. Best-effort: any remaining text passes through unchanged, so a
/// malformed token degrades to a harmless entry rather than an error.
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().to_lowercase();
    match domain.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => domain,
    }
}

/// Parse field text into a fresh whitelist mapping
///
/// Splits on [`VALUE_SEPARATOR`], normalizes each token, and maps each
/// surviving domain to `true`. Tokens that normalize to the empty string are
/// dropped, so trailing separators and blank fields are tolerated.
pub fn parse_whitelist(text: &str) -> DomainWhitelist {
    text.split(VALUE_SEPARATOR)
        .map(normalize_domain)
        .filter(|domain| !domain.is_empty())
        .map(|domain| (domain, true))
        .collect()
}

/// Encode a whitelist mapping as field text
///
/// Joins the domains with [`VALUE_SEPARATOR`] and trims any leading or
/// trailing separators, so the result never ends in a delimiter. An empty
/// mapping encodes as the empty string.
pub fn encode_whitelist(domains: &DomainWhitelist) -> String {
    let joined = domains
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(&VALUE_SEPARATOR.to_string());

    joined.trim_matches(VALUE_SEPARATOR).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mapping_encodes_as_empty_string() {
        assert_eq!(encode_whitelist(&DomainWhitelist::new()), "");
    }

    #[test]
    fn test_empty_field_parses_as_empty_mapping() {
        assert!(parse_whitelist("").is_empty());
    }

    #[test]
    fn test_trailing_separator_is_tolerated() {
        let domains = parse_whitelist("a.com;b.com;");
        assert_eq!(domains.len(), 2);
        assert!(domains.contains_key("a.com"));
        assert!(domains.contains_key("b.com"));
    }

    #[test]
    fn test_consecutive_separators_produce_no_empty_entry() {
        let domains = parse_whitelist("a.com;;;b.com");
        assert_eq!(domains.len(), 2);
        assert!(!domains.contains_key(""));
    }

    #[test]
    fn test_separator_only_field_parses_as_empty_mapping() {
        assert!(parse_whitelist(";;;").is_empty());
    }

    #[test]
    fn test_encode_joins_with_single_separator_and_no_trailing() {
        let domains = parse_whitelist("a.com;b.com");
        let encoded = encode_whitelist(&domains);
        assert_eq!(encoded, "a.com;b.com");
        assert!(!encoded.ends_with(VALUE_SEPARATOR));
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_domain("  Example.COM  "), "example.com");
    }

    #[test]
    fn test_normalize_strips_leading_www_label() {
        assert_eq!(normalize_domain("www.example.com"), "example.com");
        // Only a leading label is stripped, not an interior one.
        assert_eq!(normalize_domain("cdn.www.example.com"), "cdn.www.example.com");
    }

    #[test]
    fn test_normalization_collisions_collapse_to_one_entry() {
        let domains = parse_whitelist("Example.com;www.example.com; example.com");
        assert_eq!(domains.len(), 1);
        assert!(domains.contains_key("example.com"));
    }

    #[test]
    fn test_round_trip_preserves_normalized_key_set() {
        let original = parse_whitelist("b.net; a.com ;C.ORG");
        let round_tripped = parse_whitelist(&encode_whitelist(&original));
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_whitespace_around_tokens_is_stripped() {
        let domains = parse_whitelist("  a.com ;\tb.com\n");
        assert!(domains.contains_key("a.com"));
        assert!(domains.contains_key("b.com"));
    }
}
