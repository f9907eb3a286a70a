mod error;
mod fasta;
mod readers;
mod region;

pub use error::MarkError;
pub use fasta::{parse_records, write_oneline};
pub use readers::{is_gzipped, open_reader, read_fasta, read_motifs};
pub use region::GenomicRegion;

pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
