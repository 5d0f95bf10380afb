//! Locale facts
//!
//! Two session-scoped values are derived once from the runtime's reported
//! language: whether the active language is fully translated, and which
//! script direction the document should render in. Translation itself is
//! the localization collaborator's job; this module only carries its
//! verdicts.

/// Script direction to apply to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptDirection {
    /// Left-to-right scripts (the default)
    #[default]
    LeftToRight,
    /// Right-to-left scripts
    RightToLeft,
}

impl ScriptDirection {
    /// The value for the document's direction attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            ScriptDirection::LeftToRight => "ltr",
            ScriptDirection::RightToLeft => "rtl",
        }
    }
}

/// Localization collaborator's verdicts about a language
pub trait LocaleSource {
    /// Whether the language has a complete translation
    fn language_is_fully_supported(&self, language: &str) -> bool;

    /// The script direction the language renders in
    fn script_direction(&self, language: &str) -> ScriptDirection;
}

/// Derived language facts for one page session
///
/// Computed once at load and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFacts {
    /// Whether the active language is fully translated
    pub fully_supported: bool,
    /// Direction to apply to the document
    pub direction: ScriptDirection,
}

impl LocaleFacts {
    /// Derive the facts for the given language
    pub fn determine(source: &impl LocaleSource, language: &str) -> Self {
        LocaleFacts {
            fully_supported: source.language_is_fully_supported(language),
            direction: source.script_direction(language),
        }
    }
}
