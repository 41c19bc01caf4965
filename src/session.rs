//! Durable storage for the logged-in user.
//!
//! A single `User` record serialized as JSON under a fixed key: browser
//! `localStorage` on wasm, a JSON file in the working directory on native
//! builds. Storage is best-effort; a corrupt or missing record just means
//! "not logged in".

use crate::models::User;

/// Fixed name of the stored record: the `localStorage` key on wasm, part of
/// the file name on native.
const STORAGE_KEY: &str = "user";

pub fn load() -> Option<User> {
    let raw = backend::read()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding unreadable stored session: {e}");
            None
        }
    }
}

pub fn store(user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => backend::write(&json),
        Err(e) => log::error!("could not serialize session: {e}"),
    }
}

pub fn clear() {
    backend::remove();
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::STORAGE_KEY;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn read() -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok()?
    }

    pub fn write(value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::error!("could not persist session to localStorage");
            }
        }
    }

    pub fn remove() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::STORAGE_KEY;
    use std::path::{Path, PathBuf};

    fn storage_path() -> PathBuf {
        PathBuf::from(format!("peerpay-{STORAGE_KEY}.json"))
    }

    pub fn read() -> Option<String> {
        read_from(&storage_path())
    }

    pub fn write(value: &str) {
        write_to(&storage_path(), value);
    }

    pub fn remove() {
        remove_at(&storage_path());
    }

    pub(super) fn read_from(path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }

    pub(super) fn write_to(path: &Path, value: &str) {
        if let Err(e) = std::fs::write(path, value) {
            log::error!("could not persist session to {}: {e}", path.display());
        }
    }

    pub(super) fn remove_at(path: &Path) {
        let _ = std::fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("peerpay-session-test-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn stored_user_round_trips() {
        let path = temp_session_path("round-trip");
        let user = User {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };

        backend::write_to(&path, &serde_json::to_string(&user).unwrap());
        let raw = backend::read_from(&path).unwrap();
        let loaded: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded, user);

        backend::remove_at(&path);
        assert!(backend::read_from(&path).is_none());
    }

    #[test]
    fn corrupt_record_reads_as_logged_out() {
        let path = temp_session_path("corrupt");
        backend::write_to(&path, "{not json");

        let raw = backend::read_from(&path).unwrap();
        assert!(serde_json::from_str::<User>(&raw).is_err());

        backend::remove_at(&path);
    }
}
