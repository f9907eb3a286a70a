use super::fasta::parse_records;
use super::Result;
use crate::annotate::SequenceRecord;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::{Path, PathBuf};

pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

/// Opens a plain or gzip-compressed text file.
pub fn open_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

pub fn read_fasta(path: &Path) -> Result<Vec<SequenceRecord>> {
    let reader = open_reader(path)?;
    parse_records(reader, &path.to_string_lossy())
}

/// Reads one motif per line from each file, in the order given. Blank lines
/// are skipped and surrounding whitespace is dropped.
pub fn read_motifs(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut motifs = Vec::new();
    for path in paths {
        let reader = open_reader(path)?;
        let before = motifs.len();
        for line in reader.lines() {
            let line = line.map_err(|e| format!("{}: {}", path.display(), e))?;
            let motif = line.trim();
            if !motif.is_empty() {
                motifs.push(motif.to_string());
            }
        }
        log::debug!("Read {} motif(s) from {}", motifs.len() - before, path.display());
    }
    Ok(motifs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn gzip_detection_uses_suffix() {
        assert!(is_gzipped(Path::new("genes.fa.gz")));
        assert!(is_gzipped(Path::new("GENES.FASTA.GZIP")));
        assert!(!is_gzipped(Path::new("genes.fa")));
    }

    #[test]
    fn read_motifs_concatenates_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "ygcy\n  GCAUG \n\n").unwrap();
        std::fs::write(&second, "catag\r\nYYYYYYYYYY\n").unwrap();

        let motifs = read_motifs(&[first, second]).unwrap();
        assert_eq!(motifs, vec!["ygcy", "GCAUG", "catag", "YYYYYYYYYY"]);
    }

    #[test]
    fn read_motifs_missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read_motifs(&[missing]).unwrap_err();
        assert!(err.contains("missing.txt"));
    }

    #[test]
    fn read_gzipped_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.fa.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b">a chr1:10-20\nacgtAC\nGTac\n").unwrap();
        encoder.finish().unwrap();

        let records = read_fasta(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, "acgtACGTac");
    }

    #[test]
    fn read_plain_file_named_gz_err() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.fa.gz");
        std::fs::write(&path, ">a chr1:10-20\nACGT\n").unwrap();
        assert!(read_fasta(&path).is_err());
    }
}
