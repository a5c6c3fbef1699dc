//!
//! Types and traits describing where stack data comes from.
//!
//! The graph builder only ever talks to a [`DataSource`]. The only source shipped
//! here is [`Snapshot`], an in-memory copy of the orchestration service's stacks
//! and resources that can be loaded from a json dump.

/// `Stack` and `Resource`
mod types;
pub use types::{Resource, Stack};

/// the `DataSource` trait and stack lookup
mod source;
pub use source::{find_stack, DataSource};

/// json-backed data source
mod snapshot;
pub use snapshot::Snapshot;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found: '{1}'")]
    NotFound(&'static str, String),
    #[error("Unable to find stack named '{0}'")]
    NoSuchStack(String),
    #[error("Snapshot defines stack id '{0}' more than once")]
    DuplicateStack(String),
    #[error("Unable to read snapshot file")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse snapshot")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// True if this is the service's "not found" condition,
    /// which callers are expected to recover from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(..))
    }
}
