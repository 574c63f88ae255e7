use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file.")]
    ConfigParseError,

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// A content-template file could not be read from the template root.
    #[error("Unable to read template file '{path}'. Original error: {source}")]
    TemplateReadError { path: String, source: std::io::Error },

    /// A content file failed to parse while being grafted onto the master.
    #[error("Unable to parse template set \"{key}\". Original error: {source}")]
    TemplateSetParseError { key: String, source: minijinja::Error },

    /// No master layout could be loaded, so the set cannot be compiled. This
    /// is where an earlier swallowed master-load failure resurfaces.
    #[error("Master template is not available for template set \"{key}\".")]
    MasterUnavailableError { key: String },
}

/// Convenience type alias for Results with this crate's Error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;
