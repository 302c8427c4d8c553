use thiserror::Error;
use urodyn_core::error::CoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("unknown clinical case: {0}")]
    UnknownCase(u32),

    #[error("template '{id}' produced an invalid record: {source}")]
    InvalidTemplate {
        id: String,
        #[source]
        source: CoreError,
    },
}
