//! Error types shared across the crate.

use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edge references a vertex that is absent from the position map.
    #[error("edge endpoint {endpoint} is missing from the position map")]
    MissingEndpoint { endpoint: String },

    /// The strategy cannot honor a non-empty fixed set.
    #[error("fixed vertices are not supported by the {strategy} layout")]
    FixedUnsupported { strategy: &'static str },

    /// The external layout program could not be found on the search path.
    #[error("layout program `{program}` is not installed")]
    BackendNotInstalled { program: String },

    /// The external layout program started but did not complete cleanly.
    #[error("layout program `{program}` failed: {detail}")]
    BackendFailed { program: String, detail: String },

    /// The external layout program completed but its output could not be
    /// mapped back onto the input vertices.
    #[error("could not read positions from `{program}` output: {detail}")]
    BackendOutput { program: String, detail: String },
}

impl Error {
    pub(crate) fn missing_endpoint(endpoint: &impl fmt::Debug) -> Self {
        Error::MissingEndpoint {
            endpoint: format!("{endpoint:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
