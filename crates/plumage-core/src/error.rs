pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{table} table row {row} is missing required column `{column}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("Invalid tap payload: {message}")]
    InvalidTapPayload { message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
