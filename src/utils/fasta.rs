use crate::annotate::SequenceRecord;
use crate::utils::{GenomicRegion, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// Reads FASTA records, joining multi-line sequences. Headers must look like
/// `>id contig:start-end [description]`.
pub fn parse_records<R: BufRead>(reader: R, source: &str) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("{}: {}", source, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(finish_record(record, source)?);
            }
            current = Some(
                parse_header(header)
                    .map_err(|e| format!("{}: line {}: {}", source, index + 1, e))?,
            );
        } else {
            match current.as_mut() {
                Some(record) => record.seq.push_str(line),
                None => {
                    return Err(format!(
                        "{}: line {}: sequence found before the first header",
                        source,
                        index + 1
                    ))
                }
            }
        }
    }

    if let Some(record) = current {
        records.push(finish_record(record, source)?);
    }
    Ok(records)
}

fn parse_header(header: &str) -> Result<SequenceRecord> {
    let mut fields = header.split_whitespace();
    let id = fields
        .next()
        .ok_or("Empty FASTA header".to_string())?
        .to_string();
    let region = fields
        .next()
        .ok_or(format!("Header of {} lacks a contig:start-end region", id))?;
    let region = GenomicRegion::from_string(region)?;
    let description = fields.join(" ");

    Ok(SequenceRecord {
        id,
        region,
        description: (!description.is_empty()).then_some(description),
        seq: String::new(),
    })
}

fn finish_record(record: SequenceRecord, source: &str) -> Result<SequenceRecord> {
    if record.seq.is_empty() {
        return Err(format!("{}: record {} has no sequence", source, record.id));
    }
    Ok(record)
}

/// Writes records with each sequence on a single line.
pub fn write_oneline(records: &[SequenceRecord], path: &Path) -> Result<()> {
    let to_err = |e: std::io::Error| format!("{}: {}", path.display(), e);
    let file = File::create(path).map_err(to_err)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, ">{}", record.header()).map_err(to_err)?;
        writeln!(writer, "{}", record.seq).map_err(to_err)?;
    }
    writer.flush().map_err(to_err)
}
