use std::io;

/// Failures raised by the object store and its codec. All of these are
/// terminal to the operation that raised them; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed object envelope: {0}")]
    MalformedEnvelope(String),

    #[error("corrupt object {digest}: {source}")]
    CorruptObject {
        digest: String,
        #[source]
        source: io::Error,
    },

    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("invalid object kind {0:?}: must not contain space or NUL")]
    InvalidKind(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
