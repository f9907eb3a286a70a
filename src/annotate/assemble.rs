use super::intervals::{extract_runs, CaseClass, Interval};
use super::record::SequenceRecord;
use crate::motif::{find_intervals, MotifRule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifHits {
    pub motif: String,
    pub matches: Vec<Interval>,
}

/// Introns, exons and motif occurrences of one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub label: String,
    pub seq_len: usize,
    pub introns: Vec<Interval>,
    pub exons: Vec<Interval>,
    pub hits: Vec<MotifHits>, // In the order the motifs were given
}

impl Annotation {
    pub fn hits_for(&self, motif: &str) -> Option<&[Interval]> {
        self.hits
            .iter()
            .find(|hits| hits.motif == motif)
            .map(|hits| hits.matches.as_slice())
    }

    pub fn match_count(&self) -> usize {
        self.hits.iter().map(|hits| hits.matches.len()).sum()
    }
}

pub fn assemble(record: &SequenceRecord, rules: &[MotifRule]) -> Annotation {
    let hits = rules
        .iter()
        .map(|rule| MotifHits {
            motif: rule.motif().to_string(),
            matches: find_intervals(&record.seq, rule),
        })
        .collect();

    Annotation {
        label: record.label(),
        seq_len: record.seq.len(),
        introns: extract_runs(&record.seq, CaseClass::Lower),
        exons: extract_runs(&record.seq, CaseClass::Upper),
        hits,
    }
}

pub fn assemble_all(records: &[SequenceRecord], rules: &[MotifRule]) -> Vec<Annotation> {
    records
        .iter()
        .map(|record| {
            let annotation = assemble(record, rules);
            log::debug!(
                "{}: {} exon(s), {} intron(s), {} motif match(es)",
                record.id,
                annotation.exons.len(),
                annotation.introns.len(),
                annotation.match_count()
            );
            annotation
        })
        .collect()
}
