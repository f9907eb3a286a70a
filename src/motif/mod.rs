mod alphabet;
mod matcher;

pub use alphabet::{BaseSet, MotifRule};
pub use matcher::{find_all, find_intervals};

use crate::utils::MarkError;

/// Compiles every motif up front; the first invalid motif aborts the whole set.
pub fn compile_all(motifs: &[String]) -> Result<Vec<MotifRule>, MarkError> {
    motifs.iter().map(|motif| MotifRule::compile(motif)).collect()
}
