use motifmark::cli::{ImageFormat, MarkArgs};
use motifmark::commands::mark::motifmark;
use std::path::{Path, PathBuf};

const FASTA: &str = "\
>INSR chr19:7150261-7150808 (reverse complement)
atgtccacatgtagtcacgtttgacatcccagggccacctcagcaggccgtctctggggaga
attttctctgatttcttccccttcccttgctggacccagcacgg
>CLASP1 chr2:121444593-121445363 (reverse complement)
gcatgtctacCATGCTTGCATGCAGTcatcgacgatttcttgta
";

const MOTIFS: &str = "ygcy\nGCAUG\ncatag\n";

fn args(dir: &Path, fasta: &str, motifs: &str, format: ImageFormat) -> MarkArgs {
    let fasta_path = dir.join("Figure_1.fasta");
    let motif_path = dir.join("Fig_1_motifs.txt");
    std::fs::write(&fasta_path, fasta).unwrap();
    std::fs::write(&motif_path, motifs).unwrap();
    MarkArgs {
        fasta_paths: vec![fasta_path],
        motif_paths: vec![motif_path],
        output_dir: Some(dir.to_path_buf()),
        format,
        write_oneline: true,
        lane_width: 750.0,
        lane_height: 60.0,
        padding: 12.0,
    }
}

fn output(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

#[test]
fn mark_writes_svg_and_oneline_fasta() {
    let dir = tempfile::tempdir().unwrap();
    motifmark(args(dir.path(), FASTA, MOTIFS, ImageFormat::Svg)).unwrap();

    let svg = std::fs::read_to_string(output(dir.path(), "Figure_1.svg")).unwrap();
    assert!(svg.contains(">INSR chr19:7150261-7150808</text>"));
    assert!(svg.contains(">CLASP1 chr2:121444593-121445363</text>"));
    for legend in ["intron", "exon", "ygcy", "GCAUG", "catag"] {
        assert!(svg.contains(&format!(">{legend}</text>")), "{legend}");
    }
    assert!(svg.contains("<line "));

    let oneline = std::fs::read_to_string(output(dir.path(), "oneline_Figure_1.fasta")).unwrap();
    let lines: Vec<&str> = oneline.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].len(), 106);
}

#[test]
fn mark_draws_one_stroke_per_feature() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = ">a chr1:1-9\naaTTCCgg\n";
    motifmark(args(dir.path(), fasta, "TTY\n", ImageFormat::Svg)).unwrap();

    let svg = std::fs::read_to_string(output(dir.path(), "Figure_1.svg")).unwrap();
    // Two introns, one exon, one motif match
    assert_eq!(svg.lines().filter(|l| l.starts_with("<line ")).count(), 4);
}

#[test]
fn mark_renders_png() {
    let dir = tempfile::tempdir().unwrap();
    motifmark(args(dir.path(), FASTA, MOTIFS, ImageFormat::Png)).unwrap();

    let png = std::fs::read(output(dir.path(), "Figure_1.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn mark_invalid_motif_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let err = motifmark(args(dir.path(), FASTA, "ygcy\nGCXUG\n", ImageFormat::Svg)).unwrap_err();
    assert!(err.contains("GCXUG"), "{err}");
    assert!(!output(dir.path(), "Figure_1.svg").exists());
}

#[test]
fn mark_without_motifs_draws_nothing() {
    let dir = tempfile::tempdir().unwrap();
    motifmark(args(dir.path(), FASTA, "\n\n", ImageFormat::Svg)).unwrap();
    assert!(!output(dir.path(), "Figure_1.svg").exists());
}

#[test]
fn mark_is_reproducible() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    motifmark(args(first.path(), FASTA, MOTIFS, ImageFormat::Svg)).unwrap();
    motifmark(args(second.path(), FASTA, MOTIFS, ImageFormat::Svg)).unwrap();
    assert_eq!(
        std::fs::read_to_string(output(first.path(), "Figure_1.svg")).unwrap(),
        std::fs::read_to_string(output(second.path(), "Figure_1.svg")).unwrap()
    );
}

#[test]
fn mark_rejects_inputs_drawn_to_same_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut mark_args = args(dir.path(), FASTA, MOTIFS, ImageFormat::Svg);
    let twin = dir.path().join("Figure_1.fa");
    std::fs::write(&twin, FASTA).unwrap();
    mark_args.fasta_paths.push(twin);

    let err = motifmark(mark_args).unwrap_err();
    assert!(err.contains("Figure_1.svg"), "{err}");
    assert!(!output(dir.path(), "Figure_1.svg").exists());
}

#[test]
fn mark_rejects_lanes_shorter_than_strokes() {
    let dir = tempfile::tempdir().unwrap();
    let mut mark_args = args(dir.path(), FASTA, MOTIFS, ImageFormat::Svg);
    mark_args.lane_height = 10.0;
    let err = motifmark(mark_args).unwrap_err();
    assert!(err.contains("Lane height"), "{err}");
}

#[test]
fn mark_skips_oneline_fasta_unless_asked() {
    let dir = tempfile::tempdir().unwrap();
    let mut mark_args = args(dir.path(), FASTA, MOTIFS, ImageFormat::Svg);
    mark_args.write_oneline = false;
    motifmark(mark_args).unwrap();
    assert!(output(dir.path(), "Figure_1.svg").exists());
    assert!(!output(dir.path(), "oneline_Figure_1.fasta").exists());
}
