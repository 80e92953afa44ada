use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropahError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("frequency must be positive, got {0} MHz")]
    InvalidFrequency(f64),

    #[error("link endpoints are at the same location")]
    DegenerateLink,
}
