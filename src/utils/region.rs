use crate::utils::Result;
use std::fmt;

/// Genomic origin of a sequence, as given in its FASTA header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicRegion {
    pub contig: String,
    pub start: u32,
    pub end: u32,
}

impl GenomicRegion {
    pub fn new(contig: impl Into<String>, start: u32, end: u32) -> Result<Self> {
        if start >= end {
            return Err(format!("Invalid region: start {} >= end {}", start, end));
        }

        Ok(Self {
            contig: contig.into(),
            start,
            end,
        })
    }

    /// Parses `contig:start-end`. The contig is everything before the last ':'.
    pub fn from_string(encoding: &str) -> Result<Self> {
        let error_msg = || format!("Invalid region encoding: {}", encoding);
        let (contig, span) = encoding.rsplit_once(':').ok_or_else(error_msg)?;
        let (start, end) = span.split_once('-').ok_or_else(error_msg)?;
        if contig.is_empty() {
            return Err(error_msg());
        }

        let start: u32 = start.parse().map_err(|_| error_msg())?;
        let end: u32 = end.parse().map_err(|_| error_msg())?;

        Self::new(contig, start, end)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for GenomicRegion {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}:{}-{}", self.contig, self.start, self.end)
    }
}
