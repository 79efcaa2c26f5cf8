use thiserror::Error;

/// Terminal, user-facing failures. Every unrecoverable condition in the
/// connector funnels into one of these; the hosting platform renders the
/// message to the user and aborts the current operation.
///
/// Cache-backend trouble is deliberately absent: an unavailable cache degrades
/// to a miss and is only logged.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("no stored credentials for the vendor API; please sign in again")]
    MissingCredentials,

    #[error("vendor API request failed: {0}")]
    Transport(String),

    #[error("could not parse the vendor export: {0}")]
    Parse(String),

    #[error("no schema could be derived for dataset `{0}`")]
    SchemaUnavailable(String),

    #[error("requested column `{0}` is not present in the dataset header")]
    SchemaMismatch(String),
}
