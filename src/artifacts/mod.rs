pub mod contact_code;
pub mod map_page;

use std::path::PathBuf;

use thiserror::Error;

pub use contact_code::write_contact_code;
pub use map_page::write_map_page;

/// Artifact generation failures. Reported to the user, but they never
/// invalidate the already-produced report or the other artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to encode artifact: {0}")]
    Encode(String),
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}
