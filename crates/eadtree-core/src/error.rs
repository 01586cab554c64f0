use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failure while writing a scope-content block back out as XML.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("invalid element name: {0:?}")]
    InvalidName(String),

    #[error("invalid attribute name {attribute:?} on <{element}>")]
    InvalidAttribute { element: String, attribute: String },

    #[error("failed to write markup: {0}")]
    Write(String),
}

/// A conversion run aborted. No partial tree is returned.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Scope content of one component could not be serialized.
    ///
    /// `path` holds the parent chain of the failing component, root first.
    #[error("failed to serialize scope content of <{tag}> at order {order} (parents: {path:?}): {source}")]
    Markup {
        tag: String,
        order: u64,
        path: Vec<String>,
        #[source]
        source: MarkupError,
    },
}
