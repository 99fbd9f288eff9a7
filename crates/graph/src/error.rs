use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Source read error: {0}")]
    Source(#[from] context_indexer::IndexerError),
}
