/// Errors returned when parsing interpolation or mapping selectors strictly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The interpolation tag is not one of `nearest`, `linear`, `cubic` or `lanczos`.
    #[error("unknown interpolation mode: {0}")]
    UnknownInterpolation(String),

    /// The mapping tag is not one of `g2u` or `u2g`.
    #[error("unknown uv mapping: {0}")]
    UnknownMapping(String),
}
