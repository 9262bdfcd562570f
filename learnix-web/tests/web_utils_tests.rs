use learnix_core::{MemoryStore, PreferenceStore, Theme, ThemeController};
use learnix_web::storage::LocalStore;

#[test]
fn local_store_without_storage_reads_nothing_and_drops_writes() {
    let mut store = LocalStore::default();
    assert_eq!(store.load("theme"), None);
    store.save("theme", "light");
    assert_eq!(store.load("theme"), None);
}

#[test]
fn theme_controller_over_unavailable_storage_still_toggles() {
    let mut theme = ThemeController::new(LocalStore::default(), "theme", None, Theme::Dark);
    assert_eq!(theme.current(), Theme::Dark);
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(theme.stored(), None);

    let mut remembered = ThemeController::new(MemoryStore::new(), "theme", None, Theme::Dark);
    remembered.toggle();
    assert_eq!(remembered.store().get("theme"), Some("light"));
}

#[test]
fn config_element_id_matches_markup_contract() {
    assert_eq!(learnix_web::config::CONFIG_ELEMENT_ID, "site-config");
}
