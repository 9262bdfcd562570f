use learnix_core::PreferenceStore;
use web_sys::Storage;

use crate::dom;

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// Private browsing modes can deny storage entirely; in that case reads
/// return nothing and writes are dropped with a warning.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        match dom::local_storage() {
            Ok(storage) => Self {
                storage: Some(storage),
            },
            Err(err) => {
                log::warn!(
                    "theme preference will not persist: {}",
                    dom::js_error_message(&err)
                );
                Self { storage: None }
            }
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to persist `{key}`: {}", dom::js_error_message(&err));
        }
    }
}
