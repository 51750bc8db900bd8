//! Session Persistence
//!
//! Keeps the signed-in session in `localStorage` across page loads.

use crate::models::Session;

const STORAGE_KEY: &str = "taskflow.session";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load() -> Option<Session> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    decode(&raw)
}

pub fn save(session: &Session) {
    let Some(storage) = storage() else { return };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                log::warn!("could not persist session");
            }
        }
        Err(e) => log::error!("session encode failed: {}", e),
    }
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Stale or hand-edited entries are ignored rather than trusted
fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str::<Session>(raw).ok().filter(|s| !s.token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_session() {
        let raw = r#"{"token":"abc","user":{"id":"u1","name":"Ana","email":"ana@example.com"}}"#;
        let session = decode(raw).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.name, "Ana");
    }

    #[test]
    fn test_decode_rejects_garbage_and_empty_token() {
        assert!(decode("not json").is_none());
        assert!(decode(r#"{"token":"","user":{"id":"u1","name":"Ana"}}"#).is_none());
    }
}
