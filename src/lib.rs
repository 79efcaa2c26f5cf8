pub mod auth;
pub mod cache;
pub mod config;
pub mod connector;
pub mod error;
pub mod fetch;
pub mod schema;
pub mod table;

pub use config::DatasetConfig;
pub use connector::{Connector, DataResult};
pub use error::ConnectorError;
