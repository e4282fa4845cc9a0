/// Errors from the document store.
///
/// A missing or unreadable blob is not an error (the store loads as
/// empty); these cover the write path, where failure means the mutation
/// was lost and the caller must tell the user.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
