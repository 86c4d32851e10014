use thiserror::Error;

/// Failures while wiring an effect to the page. Each effect reports its own
/// error and the others keep running.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has an unexpected type")]
    WrongElementType(&'static str),
    #[error("js error: {0}")]
    Js(String),
}

pub type FxResult<T> = Result<T, FxError>;
