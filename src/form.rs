//! Form host contract
//!
//! The options form lives in a document the engine does not own. Each
//! bindable element carries a marker attribute whose value is its option
//! key, and the host lets the engine look elements up by that marker, read
//! and write their state, and register interest in their change events.
//!
//! [`InMemoryForm`] is a headless implementation used by the test suite: a
//! flat map of checkbox and text fields with the same observable surface.

use std::collections::BTreeMap;

/// When a form element's change listener fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTrigger {
    /// On committed value changes (a checkbox toggle)
    Commit,
    /// On every keystroke, before the value is committed
    ///
    /// The whitelist field deliberately persists per keystroke rather than
    /// on blur, trading write frequency for immediate feedback.
    Keystroke,
}

/// Host document providing addressable form elements
///
/// Lookups are read-only queries; `observe` registers a change listener and
/// does not guard against duplicate registration, so callers register each
/// element at most once per page lifetime.
pub trait FormHost {
    /// Opaque handle to one form element
    type Element;

    /// The unique element whose marker attribute equals `marker`, if any
    fn element_for(&self, marker: &str) -> Option<Self::Element>;

    /// Checked state of a checkbox-like element
    fn checked(&self, element: &Self::Element) -> bool;

    /// Text content of a text-like element
    fn text(&self, element: &Self::Element) -> String;

    /// Set the checked state of a checkbox-like element
    fn set_checked(&mut self, element: &Self::Element, checked: bool);

    /// Set the text content of a text-like element
    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Register a change listener on the element
    fn observe(&mut self, element: &Self::Element, trigger: ChangeTrigger);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    Checkbox { checked: bool },
    Text { value: String },
}

/// Headless [`FormHost`] backed by plain maps
///
/// Elements are identified by their marker string. Construct one field per
/// option, then drive it the way a user would: flip checkboxes and type
/// into text fields with the setter methods, and hand the resulting change
/// to the engine.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForm {
    fields: BTreeMap<String, Field>,
    observed: BTreeMap<String, ChangeTrigger>,
    script_direction: Option<crate::locale::ScriptDirection>,
    translations_inserted: bool,
    locale_notice_visible: bool,
}

impl InMemoryForm {
    /// Create a form with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unchecked checkbox carrying the given marker
    pub fn add_checkbox(&mut self, marker: &str) {
        self.fields
            .insert(marker.to_string(), Field::Checkbox { checked: false });
    }

    /// Add an empty text field carrying the given marker
    pub fn add_text_field(&mut self, marker: &str) {
        self.fields
            .insert(marker.to_string(), Field::Text { value: String::new() });
    }

    /// A form with the full options page layout: one checkbox per flag
    /// option and a text field for the whitelist
    pub fn options_page() -> Self {
        let mut form = Self::new();
        for key in crate::schema::OptionKey::ALL {
            match key.kind() {
                crate::schema::OptionKind::Flag => form.add_checkbox(key.as_str()),
                crate::schema::OptionKind::DomainList => form.add_text_field(key.as_str()),
            }
        }
        form
    }

    /// The trigger a listener was registered with, if the element is observed
    pub fn trigger_for(&self, marker: &str) -> Option<ChangeTrigger> {
        self.observed.get(marker).copied()
    }

    /// Script direction applied to the document, if any
    pub fn script_direction(&self) -> Option<crate::locale::ScriptDirection> {
        self.script_direction
    }

    /// Whether translated strings have been inserted
    pub fn translations_inserted(&self) -> bool {
        self.translations_inserted
    }

    /// Whether the locale notice has been revealed
    pub fn locale_notice_visible(&self) -> bool {
        self.locale_notice_visible
    }

    pub(crate) fn apply_script_direction(&mut self, direction: crate::locale::ScriptDirection) {
        self.script_direction = Some(direction);
    }

    pub(crate) fn mark_translations_inserted(&mut self) {
        self.translations_inserted = true;
    }

    pub(crate) fn reveal_notice(&mut self) {
        self.locale_notice_visible = true;
    }
}

impl FormHost for InMemoryForm {
    type Element = String;

    fn element_for(&self, marker: &str) -> Option<String> {
        self.fields.contains_key(marker).then(|| marker.to_string())
    }

    fn checked(&self, element: &String) -> bool {
        matches!(self.fields.get(element), Some(Field::Checkbox { checked: true }))
    }

    fn text(&self, element: &String) -> String {
        match self.fields.get(element) {
            Some(Field::Text { value }) => value.clone(),
            _ => String::new(),
        }
    }

    fn set_checked(&mut self, element: &String, checked: bool) {
        if let Some(Field::Checkbox { checked: state }) = self.fields.get_mut(element) {
            *state = checked;
        }
    }

    fn set_text(&mut self, element: &String, text: &str) {
        if let Some(Field::Text { value }) = self.fields.get_mut(element) {
            *value = text.to_string();
        }
    }

    fn observe(&mut self, element: &String, trigger: ChangeTrigger) {
        self.observed.insert(element.clone(), trigger);
    }
}
