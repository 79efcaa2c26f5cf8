use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Vendor API credentials. Opaque to the core; only used to build the auth
/// header for fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Host-provided credential storage.
///
/// Absence of stored credentials is a normal, handled condition (prompting the
/// re-authentication flow upstream), never an error in itself.
pub trait CredentialStore {
    fn get(&self) -> Result<Option<Credentials>>;
    fn set(&self, creds: Credentials) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for &T {
    fn get(&self) -> Result<Option<Credentials>> {
        (**self).get()
    }

    fn set(&self, creds: Credentials) -> Result<()> {
        (**self).set(creds)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(creds: &Credentials) -> String {
    let token = STANDARD.encode(format!("{}:{}", creds.username, creds.password));
    format!("Basic {token}")
}

/// In-process credential store, for tests and single-user hosts.
#[derive(Default)]
pub struct MemoryCredentialStore {
    creds: RwLock<Option<Credentials>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<Credentials>> {
        Ok(self.creds.read().unwrap().clone())
    }

    fn set(&self, creds: Credentials) -> Result<()> {
        *self.creds.write().unwrap() = Some(creds);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.creds.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_username_and_password() {
        let creds = Credentials {
            username: "user".into(),
            password: "pass".into(),
        };
        // base64("user:pass")
        assert_eq!(basic_auth_header(&creds), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemoryCredentialStore::default();
        assert_eq!(store.get().unwrap(), None);

        let creds = Credentials {
            username: "u".into(),
            password: "p".into(),
        };
        store.set(creds.clone()).unwrap();
        assert_eq!(store.get().unwrap(), Some(creds));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
