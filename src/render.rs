//! One-time options page setup
//!
//! The render adapter runs once when the document becomes ready: it stamps
//! the script direction onto the document, asks the localization
//! collaborator to insert its translated strings, hands control to the
//! synchronization engine's load/bind sequence, and finally reveals the
//! locale notice when the active language is not fully translated. No other
//! branching happens here.

use crate::engine::Session;
use crate::error::Result;
use crate::form::{FormHost, InMemoryForm};
use crate::locale::{LocaleFacts, LocaleSource, ScriptDirection};
use crate::privacy::PrivacyControl;
use crate::store::SettingsStore;

/// Document hosting the options form
///
/// Extends [`FormHost`] with the three page-level operations the render
/// adapter needs. Revealing the locale notice is idempotent; revealing it
/// twice is harmless.
pub trait OptionsDocument: FormHost {
    /// Set the document's script-direction attribute
    fn set_script_direction(&mut self, direction: ScriptDirection);

    /// Insert translated strings into the document
    fn insert_translations(&mut self);

    /// Make the locale notice visible
    fn reveal_locale_notice(&mut self);
}

impl OptionsDocument for InMemoryForm {
    fn set_script_direction(&mut self, direction: ScriptDirection) {
        self.apply_script_direction(direction);
    }

    fn insert_translations(&mut self) {
        self.mark_translations_inserted();
    }

    fn reveal_locale_notice(&mut self) {
        self.reveal_notice();
    }
}

/// Set up the options page and return its live session
///
/// Locale facts are derived once from the reported language, the document
/// is prepared, and the engine loads and binds every option. Initialization
/// errors from the engine abort the whole page; the notice step only runs
/// after a successful bind, so an unsupported locale never hides a broken
/// form behind a notice.
pub async fn render_options_page<D, S, P>(
    document: &mut D,
    store: S,
    privacy: P,
    locale: &impl LocaleSource,
    language: &str,
) -> Result<Session<S, P, D>>
where
    D: OptionsDocument,
    S: SettingsStore,
    P: PrivacyControl,
{
    let facts = LocaleFacts::determine(locale, language);
    tracing::debug!(
        language,
        fully_supported = facts.fully_supported,
        direction = facts.direction.as_attr(),
        "rendering options page"
    );

    document.set_script_direction(facts.direction);
    document.insert_translations();

    let session = Session::load(store, privacy, document).await?;

    if !facts.fully_supported {
        document.reveal_locale_notice();
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;

    struct SupportedEverywhere;

    impl LocaleSource for SupportedEverywhere {
        fn language_is_fully_supported(&self, _language: &str) -> bool {
            true
        }

        fn script_direction(&self, _language: &str) -> ScriptDirection {
            ScriptDirection::LeftToRight
        }
    }

    struct UnsupportedRtl;

    impl LocaleSource for UnsupportedRtl {
        fn language_is_fully_supported(&self, _language: &str) -> bool {
            false
        }

        fn script_direction(&self, _language: &str) -> ScriptDirection {
            ScriptDirection::RightToLeft
        }
    }

    struct NoPrivacy;

    impl PrivacyControl for NoPrivacy {
        async fn set(&self, _value: bool) -> crate::error::Result<()> {
            Ok(())
        }

        async fn clear(&self) -> crate::error::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_supported_locale_renders_without_notice() {
        let mut form = InMemoryForm::options_page();
        render_options_page(
            &mut form,
            MemoryStore::new(),
            NoPrivacy,
            &SupportedEverywhere,
            "en-US",
        )
        .await
        .unwrap();

        assert_eq!(form.script_direction(), Some(ScriptDirection::LeftToRight));
        assert!(form.translations_inserted());
        assert!(!form.locale_notice_visible());
    }

    #[tokio::test]
    async fn test_unsupported_locale_reveals_the_notice_after_binding() {
        let mut form = InMemoryForm::options_page();
        render_options_page(
            &mut form,
            MemoryStore::new(),
            NoPrivacy,
            &UnsupportedRtl,
            "ar",
        )
        .await
        .unwrap();

        assert_eq!(form.script_direction(), Some(ScriptDirection::RightToLeft));
        assert!(form.locale_notice_visible());
        // Binding happened: listeners are in place.
        assert!(form.trigger_for("whitelistedDomains").is_some());
    }

    #[tokio::test]
    async fn test_engine_failure_aborts_setup_before_the_notice() {
        let mut empty = InMemoryForm::new();
        let result = render_options_page(
            &mut empty,
            MemoryStore::new(),
            NoPrivacy,
            &UnsupportedRtl,
            "ar",
        )
        .await;

        assert!(matches!(result, Err(Error::BindingNotFound { .. })));
        assert!(!empty.locale_notice_visible());
    }
}
