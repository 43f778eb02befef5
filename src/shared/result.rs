/// Result alias used by application code; typed failures (`GraphMergeError`,
/// `DocumentLoadError`) convert into `anyhow::Error` with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
