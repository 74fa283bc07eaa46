use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    /// Neither manager answered the availability probe. This is the only
    /// failure callers are expected to handle; it is never retried.
    #[error("No supported package manager found")]
    NoManagerFound,

    /// The chosen manager could not be spawned at all.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
