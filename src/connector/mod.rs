pub mod host;

use tracing::{debug, warn};
use url::Url;

use crate::auth::{basic_auth_header, CredentialStore};
use crate::cache::CacheBackend;
use crate::config::DatasetConfig;
use crate::error::ConnectorError;
use crate::fetch::{dataset_url, HttpTransport};
use crate::schema::{self, cache as schema_cache, ColumnSchema};
use crate::table::{parse_table, project, Table};

/// Schema plus projected rows, as handed to the reporting host. Each row's
/// width always equals `schema.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataResult {
    pub schema: Vec<ColumnSchema>,
    pub rows: Vec<Vec<String>>,
}

/// Dataset access facade: cache → fetch → infer → project.
///
/// All collaborators are injected so the facade can be driven deterministically
/// in tests without a live host environment.
pub struct Connector<T, C, S> {
    base_url: Url,
    transport: T,
    cache: C,
    credentials: S,
}

impl<T, C, S> Connector<T, C, S>
where
    T: HttpTransport,
    C: CacheBackend,
    S: CredentialStore,
{
    pub fn new(base_url: Url, transport: T, cache: C, credentials: S) -> Self {
        Self {
            base_url,
            transport,
            cache,
            credentials,
        }
    }

    /// Return the dataset's schema, from cache when possible.
    ///
    /// On a miss the export is fetched, the schema inferred and written back
    /// to the cache best-effort. Fetch failures propagate; cache failures do
    /// not.
    pub fn get_schema(
        &self,
        config: &DatasetConfig,
    ) -> Result<Vec<ColumnSchema>, ConnectorError> {
        self.resolve_schema(config, None)
    }

    /// Fetch the dataset and return the requested columns.
    ///
    /// Row data is never cached (it is per-request and time-varying); only the
    /// schema is. The schema is resolved against the already-fetched table so
    /// a cache miss costs no second round trip. `requested_fields` are matched
    /// by synthetic name, in the order given; names the schema does not know
    /// are dropped.
    pub fn get_data(
        &self,
        config: &DatasetConfig,
        requested_fields: &[String],
    ) -> Result<DataResult, ConnectorError> {
        let table = self.fetch_table(config)?;
        let full = self.resolve_schema(config, Some(&table))?;

        let mut requested = Vec::with_capacity(requested_fields.len());
        for field in requested_fields {
            match full.iter().find(|c| &c.name == field) {
                Some(col) => requested.push(col.clone()),
                None => debug!(field = %field, "requested field not in schema; dropping"),
            }
        }

        let rows = project(&table, &requested)?;
        Ok(DataResult {
            schema: requested,
            rows,
        })
    }

    /// Cache-or-infer. `prefetched` shares a table the caller already fetched
    /// so a schema miss does not trigger a second fetch.
    fn resolve_schema(
        &self,
        config: &DatasetConfig,
        prefetched: Option<&Table>,
    ) -> Result<Vec<ColumnSchema>, ConnectorError> {
        let key = schema_cache::cache_key(&config.dataset_path);
        if let Some(cached) = schema_cache::load(&self.cache, &key) {
            return Ok(cached);
        }

        let inferred = match prefetched {
            Some(table) => schema::infer_schema(table),
            None => {
                let table = self.fetch_table(config)?;
                schema::infer_schema(&table)
            }
        }
        .map_err(|e| {
            warn!(dataset = %config.dataset_path, error = %e, "schema inference failed");
            ConnectorError::SchemaUnavailable(config.dataset_path.clone())
        })?;

        schema_cache::store(&self.cache, &key, &inferred);
        Ok(inferred)
    }

    /// Fetch the raw export for `config` and parse it into a table.
    fn fetch_table(&self, config: &DatasetConfig) -> Result<Table, ConnectorError> {
        let creds = match self.credentials.get() {
            Ok(Some(c)) => c,
            Ok(None) => return Err(ConnectorError::MissingCredentials),
            Err(e) => {
                warn!(error = %e, "credential store unavailable");
                return Err(ConnectorError::MissingCredentials);
            }
        };

        let url = dataset_url(&self.base_url, &config.dataset_path)
            .map_err(|e| ConnectorError::Transport(e.to_string()))?;
        let resp = self
            .transport
            .fetch(&url, &basic_auth_header(&creds))
            .map_err(|e| ConnectorError::Transport(e.to_string()))?;
        if resp.status != 200 {
            return Err(ConnectorError::Transport(format!(
                "GET {} returned status {}",
                url, resp.status
            )));
        }

        parse_table(&resp.body)
    }
}
