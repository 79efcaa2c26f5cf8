//! Stateless entry points the reporting host calls into. Each is a thin
//! function over the injected collaborators; none of them hold state between
//! calls.

use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::auth::{basic_auth_header, CredentialStore, Credentials};
use crate::fetch::HttpTransport;

/// Authentication scheme the host should collect credentials for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    UserPass,
}

pub fn auth_type() -> AuthType {
    AuthType::UserPass
}

/// One user-editable field in the host's connector configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigField {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// Configuration surface the host renders for this connector.
pub fn config_fields() -> Vec<ConfigField> {
    vec![
        ConfigField {
            id: "vendor_id",
            label: "Vendor account ID",
            required: true,
        },
        ConfigField {
            id: "dataset_path",
            label: "Dataset path",
            required: true,
        },
    ]
}

/// Probe the vendor API with the stored credentials.
///
/// Missing credentials and transport-level failure both read as "not valid"
/// rather than erroring; the host responds by restarting the auth flow.
pub fn is_auth_valid(
    transport: &dyn HttpTransport,
    store: &dyn CredentialStore,
    probe_url: &Url,
) -> bool {
    let creds = match store.get() {
        Ok(Some(c)) => c,
        Ok(None) => return false,
        Err(e) => {
            warn!(error = %e, "credential store unavailable during auth check");
            return false;
        }
    };
    probe(transport, probe_url, &creds)
}

/// Validate candidate credentials against the vendor API and store them on
/// success. Invalid credentials are not stored. Returns whether they were
/// accepted.
pub fn set_credentials(
    transport: &dyn HttpTransport,
    store: &dyn CredentialStore,
    probe_url: &Url,
    creds: Credentials,
) -> bool {
    if !probe(transport, probe_url, &creds) {
        return false;
    }
    if let Err(e) = store.set(creds) {
        warn!(error = %e, "failed to store credentials");
        return false;
    }
    true
}

/// Drop stored credentials.
pub fn reset_auth(store: &dyn CredentialStore) {
    if let Err(e) = store.clear() {
        warn!(error = %e, "failed to clear credentials");
    }
}

fn probe(transport: &dyn HttpTransport, probe_url: &Url, creds: &Credentials) -> bool {
    match transport.fetch(probe_url, &basic_auth_header(creds)) {
        Ok(resp) => resp.status == 200,
        Err(e) => {
            warn!(error = %e, "auth probe failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryCredentialStore;
    use crate::fetch::HttpResponse;

    struct FixedStatus(u16);

    impl HttpTransport for FixedStatus {
        fn fetch(&self, _url: &Url, _auth_header: &str) -> anyhow::Result<HttpResponse> {
            Ok(HttpResponse {
                status: self.0,
                body: String::new(),
            })
        }
    }

    fn probe_url() -> Url {
        Url::parse("https://api.vendor.example/v2/ping").unwrap()
    }

    fn creds() -> Credentials {
        Credentials {
            username: "u".into(),
            password: "p".into(),
        }
    }

    #[test]
    fn auth_is_valid_only_on_200() {
        let store = MemoryCredentialStore::default();
        store.set(creds()).unwrap();
        assert!(is_auth_valid(&FixedStatus(200), &store, &probe_url()));
        assert!(!is_auth_valid(&FixedStatus(401), &store, &probe_url()));
    }

    #[test]
    fn missing_credentials_read_as_not_valid() {
        let store = MemoryCredentialStore::default();
        assert!(!is_auth_valid(&FixedStatus(200), &store, &probe_url()));
    }

    #[test]
    fn rejected_credentials_are_not_stored() {
        let store = MemoryCredentialStore::default();
        assert!(!set_credentials(&FixedStatus(401), &store, &probe_url(), creds()));
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn accepted_credentials_are_stored() {
        let store = MemoryCredentialStore::default();
        assert!(set_credentials(&FixedStatus(200), &store, &probe_url(), creds()));
        assert_eq!(store.get().unwrap(), Some(creds()));
    }

    #[test]
    fn reset_auth_clears_the_store() {
        let store = MemoryCredentialStore::default();
        store.set(creds()).unwrap();
        reset_auth(&store);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn config_surface_names_both_fields() {
        let ids: Vec<_> = config_fields().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["vendor_id", "dataset_path"]);
        assert_eq!(auth_type(), AuthType::UserPass);
    }
}
