use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MarkError {
    #[error("Invalid character {character:?} at position {position} of motif {motif:?}")]
    InvalidMotifCharacter {
        motif: String,
        character: char,
        position: usize,
    },

    #[error("Motifs must contain at least one base")]
    EmptyMotif,

    #[error("Cannot scale {records} sequence(s) when the longest has length 0")]
    DegenerateScale { records: usize },
}
