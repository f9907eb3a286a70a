use crate::utils::GenomicRegion;

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub id: String,
    pub region: GenomicRegion,
    pub description: Option<String>,
    pub seq: String, // Uppercase marks exons, lowercase marks introns
}

impl SequenceRecord {
    /// FASTA header line, without the leading '>'.
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {} {}", self.id, self.region, description),
            None => format!("{} {}", self.id, self.region),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.id, self.region)
    }
}
