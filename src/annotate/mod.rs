mod assemble;
mod intervals;
mod record;

pub use assemble::{assemble, assemble_all, Annotation, MotifHits};
pub use intervals::{extract_runs, CaseClass, Interval};
pub use record::SequenceRecord;
