pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SqlxError(#[from] sqlx::Error),

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("{0}")]
    CatalogError(String),
}
