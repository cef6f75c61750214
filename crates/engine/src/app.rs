//! Application state and intent dispatch.
//!
//! [`App`] is the single mutable state object: it owns the store, the
//! catalog, the active view query, and the injected prompter. Front ends
//! feed it [`Intent`]s and render the projection each dispatch returns,
//! so the screen can never drift from the state that produced it.

use dukkan_core::{ProductId, Username};

use crate::catalog::{Catalog, ProductDraft};
use crate::i18n::translate;
use crate::models::Settings;
use crate::prompt::Prompter;
use crate::session::{AccountUpdate, SessionError, SessionService};
use crate::store::{StorageBackend, Store, StoreError};
use crate::view::{ProductView, ViewQuery, project};

/// A user action against the inventory screen.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Create a product from entry-form input.
    Add(ProductDraft),
    /// Delete one product, after confirmation.
    Delete(ProductId),
    /// Delete every product, after confirmation.
    DeleteAll,
    /// Replace the search text.
    Search(String),
    /// Replace the category filter; empty means no filter.
    FilterCategory(Option<String>),
    /// Toggle row selection.
    Select(ProductId),
}

/// The application state object.
pub struct App<B, P> {
    store: Store<B>,
    catalog: Catalog,
    query: ViewQuery,
    prompter: P,
}

impl<B: StorageBackend, P: Prompter> App<B, P> {
    /// Build the application over a backend and a prompter.
    ///
    /// Runs the legacy product-id migration before the first load, so the
    /// catalog only ever sees fully-identified rows.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the migration rewrite cannot be persisted.
    pub fn new(backend: B, prompter: P) -> Result<Self, StoreError> {
        let mut store = Store::new(backend);
        let migrated = store.migrate_product_ids()?;
        if migrated > 0 {
            tracing::info!(migrated, "assigned ids to legacy product rows");
        }
        let catalog = Catalog::load(&store);
        Ok(Self {
            store,
            catalog,
            query: ViewQuery::default(),
            prompter,
        })
    }

    /// Dispatch an intent and return the fresh projection.
    ///
    /// Destructive intents go through the prompter first; a declined
    /// confirmation is a no-op. Prompt text is localized with the
    /// persisted language setting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting a mutation fails.
    pub fn apply(&mut self, intent: Intent) -> Result<ProductView, StoreError> {
        let lang = self.store.settings().language;
        match intent {
            Intent::Add(draft) => {
                self.catalog.add(&mut self.store, draft)?;
            }
            Intent::Delete(id) => {
                if self.prompter.confirm(translate(lang, "confirm_delete_product"))
                    && self.catalog.delete_by_id(&mut self.store, &id)?
                {
                    self.prompter.notify(translate(lang, "product_deleted"));
                }
            }
            Intent::DeleteAll => {
                if self.prompter.confirm(translate(lang, "delete_all_confirm")) {
                    self.catalog.delete_all(&mut self.store)?;
                }
            }
            Intent::Search(search) => {
                self.query.search = search;
            }
            Intent::FilterCategory(category) => {
                self.query.category = category.filter(|c| !c.is_empty());
            }
            Intent::Select(id) => {
                self.catalog.toggle_select(&id);
            }
        }
        Ok(self.view())
    }

    /// Project the current state without mutating anything.
    #[must_use]
    pub fn view(&self) -> ProductView {
        project(self.catalog.list(), &self.query, self.catalog.selected())
    }

    /// Session and account operations, borrowing the store.
    pub fn session(&mut self) -> SessionService<'_, B> {
        SessionService::new(&mut self.store)
    }

    /// Persist display settings, optionally applying an account update.
    ///
    /// Notifies with the account-saved message when account fields actually
    /// changed, and the plain settings-saved message otherwise. The
    /// notification speaks the language just saved.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if persisting either record fails.
    pub async fn save_settings(
        &mut self,
        settings: Settings,
        account: Option<(Username, AccountUpdate)>,
    ) -> Result<(), SessionError> {
        self.store.set_settings(&settings)?;

        let mut account_changed = false;
        if let Some((username, update)) = account {
            account_changed = SessionService::new(&mut self.store)
                .update_account(&username, update)
                .await?;
        }

        let key = if account_changed {
            "account_saved"
        } else {
            "settings_saved"
        };
        self.prompter.notify(translate(settings.language, key));
        Ok(())
    }

    /// The persisted display settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.store.settings()
    }

    /// Direct access to the underlying store.
    pub fn store_mut(&mut self) -> &mut Store<B> {
        &mut self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::prompt::testing::RecordingPrompter;
    use crate::session::SignupRequest;
    use crate::store::MemoryBackend;

    fn app(prompter: RecordingPrompter) -> App<MemoryBackend, RecordingPrompter> {
        App::new(MemoryBackend::new(), prompter).unwrap()
    }

    fn draft(name: &str, category: &str, quantity: &str, price: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            category: category.to_owned(),
            quantity: quantity.to_owned(),
            price: price.to_owned(),
        }
    }

    #[test]
    fn test_add_then_view_kalem_scenario() {
        let mut app = app(RecordingPrompter::default());
        let view = app
            .apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.stats.total_stock, 3);
        assert_eq!(view.stats.total_value_display(), "₺4.50");
        assert!(view.rows.first().unwrap().critical);
    }

    #[test]
    fn test_search_and_filter_narrow_rows() {
        let mut app = app(RecordingPrompter::default());
        app.apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();
        app.apply(Intent::Add(draft("Süt", "Gıda", "10", "20")))
            .unwrap();

        let view = app.apply(Intent::Search("kalem".to_owned())).unwrap();
        assert_eq!(view.rows.len(), 1);

        let view = app.apply(Intent::Search(String::new())).unwrap();
        assert_eq!(view.rows.len(), 2);

        let view = app
            .apply(Intent::FilterCategory(Some("Gıda".to_owned())))
            .unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows.first().unwrap().name, "Süt");

        // An empty category string clears the filter.
        let view = app
            .apply(Intent::FilterCategory(Some(String::new())))
            .unwrap();
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_delete_confirmed_removes_and_notifies() {
        let mut app = app(RecordingPrompter::default());
        let view = app
            .apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();
        let id = view.rows.first().unwrap().id.clone();

        let view = app.apply(Intent::Delete(id)).unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(
            app.prompter.confirmations,
            vec!["Bu ürünü silmek istiyor musunuz?"]
        );
        assert_eq!(app.prompter.notices, vec!["Ürün silindi"]);
    }

    #[test]
    fn test_delete_declined_is_noop() {
        let mut app = app(RecordingPrompter::answering(vec![false]));
        let view = app
            .apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();
        let id = view.rows.first().unwrap().id.clone();

        let view = app.apply(Intent::Delete(id)).unwrap();
        assert_eq!(view.rows.len(), 1);
        assert!(app.prompter.notices.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_confirms_but_stays_silent() {
        let mut app = app(RecordingPrompter::default());
        app.apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();

        let view = app.apply(Intent::Delete(ProductId::new("nope"))).unwrap();
        assert_eq!(view.rows.len(), 1);
        assert!(app.prompter.notices.is_empty());
    }

    #[test]
    fn test_delete_all_confirmed_and_declined() {
        let mut app = app(RecordingPrompter::answering(vec![false, true]));
        app.apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();

        let view = app.apply(Intent::DeleteAll).unwrap();
        assert_eq!(view.rows.len(), 1);

        let view = app.apply(Intent::DeleteAll).unwrap();
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_prompts_speak_the_saved_language() {
        let mut app = app(RecordingPrompter::default());
        app.store_mut()
            .set_settings(&Settings {
                language: Language::En,
                ..Settings::default()
            })
            .unwrap();
        let view = app
            .apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();
        let id = view.rows.first().unwrap().id.clone();

        app.apply(Intent::Delete(id)).unwrap();
        assert_eq!(
            app.prompter.confirmations,
            vec!["Are you sure you want to delete this product?"]
        );
        assert_eq!(app.prompter.notices, vec!["Product deleted"]);
    }

    #[test]
    fn test_select_toggles_row_flag() {
        let mut app = app(RecordingPrompter::default());
        let view = app
            .apply(Intent::Add(draft("Kalem", "Kırtasiye", "3", "1.5")))
            .unwrap();
        let id = view.rows.first().unwrap().id.clone();

        let view = app.apply(Intent::Select(id.clone())).unwrap();
        assert!(view.rows.first().unwrap().selected);

        let view = app.apply(Intent::Select(id)).unwrap();
        assert!(!view.rows.first().unwrap().selected);
    }

    #[test]
    fn test_new_migrates_legacy_rows() {
        let mut backend = MemoryBackend::new();
        use crate::store::StorageBackend as _;
        backend
            .set(
                crate::store::keys::PRODUCTS,
                r#"[{"name":"Kalem","category":"Kırtasiye","quantity":3,"price":"1.5"}]"#,
            )
            .unwrap();

        let app = App::new(backend, RecordingPrompter::default()).unwrap();
        let view = app.view();
        assert_eq!(view.rows.len(), 1);
        assert!(!view.rows.first().unwrap().id.as_str().is_empty());
    }

    #[tokio::test]
    async fn test_save_settings_without_account_notifies_settings_saved() {
        let mut app = app(RecordingPrompter::default());
        app.save_settings(
            Settings {
                language: Language::En,
                ..Settings::default()
            },
            None,
        )
        .await
        .unwrap();

        assert_eq!(app.settings().language, Language::En);
        assert_eq!(app.prompter.notices, vec!["Settings saved"]);
    }

    #[tokio::test]
    async fn test_save_settings_with_account_change_notifies_account_saved() {
        let mut app = app(RecordingPrompter::default());
        app.session()
            .signup(SignupRequest {
                username: "ali".to_owned(),
                password: "pw123".to_owned(),
                ..SignupRequest::default()
            })
            .await
            .unwrap();

        let ali = Username::parse("ali").unwrap();
        app.save_settings(
            Settings::default(),
            Some((
                ali,
                AccountUpdate {
                    display: Some("Ali Usta".to_owned()),
                    ..AccountUpdate::default()
                },
            )),
        )
        .await
        .unwrap();

        assert_eq!(app.prompter.notices, vec!["Hesap ayarları kaydedildi"]);
    }

    #[tokio::test]
    async fn test_save_settings_unchanged_account_falls_back_to_settings_saved() {
        let mut app = app(RecordingPrompter::default());
        app.session()
            .signup(SignupRequest {
                username: "ali".to_owned(),
                password: "pw123".to_owned(),
                ..SignupRequest::default()
            })
            .await
            .unwrap();

        let ali = Username::parse("ali").unwrap();
        app.save_settings(Settings::default(), Some((ali, AccountUpdate::default())))
            .await
            .unwrap();

        assert_eq!(app.prompter.notices, vec!["Ayarlar kaydedildi"]);
    }
}
