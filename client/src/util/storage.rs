//! Browser `localStorage` session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `controller::SessionStore` over the `user` key so the session
//! survives reloads. Native builds have no storage: reads are empty and
//! writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use controller::session::{Session, SessionStore};

/// Zero-sized handle; the browser owns the actual storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            use controller::consts::SESSION_KEY;
            let raw = match local_storage()?.get_item(SESSION_KEY) {
                Ok(raw) => raw?,
                Err(e) => {
                    log::warn!("reading {SESSION_KEY} failed: {e:?}");
                    return None;
                }
            };
            controller::session::decode(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&mut self, session: &Session) {
        #[cfg(feature = "csr")]
        {
            use controller::consts::SESSION_KEY;
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(SESSION_KEY, &controller::session::encode(session)) {
                log::warn!("writing {SESSION_KEY} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no browser; session for {} not stored", session.email);
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "csr")]
        {
            use controller::consts::SESSION_KEY;
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.remove_item(SESSION_KEY) {
                log::warn!("removing {SESSION_KEY} failed: {e:?}");
            }
        }
    }
}
