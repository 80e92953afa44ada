use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("missing required parameters")]
    Builder,

    #[error("profile needs at least one interval")]
    Samples,

    #[error("no elevation data available")]
    NoData,

    #[error("elevation source returned {got} values, expected {expected}")]
    ProfileLen { expected: usize, got: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
