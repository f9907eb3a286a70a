use crate::annotate::assemble_all;
use crate::cli::{ImageFormat, MarkArgs};
use crate::layout::{plan, CanvasConfig};
use crate::motif::{compile_all, MotifRule};
use crate::render::to_lane_plot;
use crate::utils::{is_gzipped, read_fasta, read_motifs, write_oneline, Result};
use laneplot::generate_image;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub fn motifmark(args: MarkArgs) -> Result<()> {
    let motifs = read_motifs(&args.motif_paths)?;
    let rules = compile_all(&motifs).map_err(|e| e.to_string())?;
    log::info!(
        "Loaded {} motif(s) from {} file(s)",
        rules.len(),
        args.motif_paths.len()
    );
    if rules.is_empty() {
        log::warn!("No motifs were supplied; no images will be drawn");
    }

    let canvas = args.canvas();
    canvas.check()?;
    check_distinct_images(&args)?;
    for fasta_path in &args.fasta_paths {
        let out_dir = output_dir(fasta_path, args.output_dir.as_deref());
        mark_fasta(fasta_path, &out_dir, &motifs, &rules, &canvas, &args)?;
    }
    Ok(())
}

// Inputs such as genes.fa and genes.fasta would otherwise draw into the same file
fn check_distinct_images(args: &MarkArgs) -> Result<()> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    for fasta_path in &args.fasta_paths {
        let out_dir = output_dir(fasta_path, args.output_dir.as_deref());
        let image = image_path(fasta_path, &out_dir, args.format);
        if let Some(first) = seen.insert(image.clone(), fasta_path.as_path()) {
            return Err(format!(
                "{} and {} would both be drawn to {}",
                first.display(),
                fasta_path.display(),
                image.display()
            ));
        }
    }
    Ok(())
}

fn mark_fasta(
    fasta_path: &Path,
    out_dir: &Path,
    motifs: &[String],
    rules: &[MotifRule],
    canvas: &CanvasConfig,
    args: &MarkArgs,
) -> Result<()> {
    let records = read_fasta(fasta_path)?;
    log::info!("Read {} record(s) from {}", records.len(), fasta_path.display());

    if args.write_oneline {
        let oneline_path = out_dir.join(format!("oneline_{}", file_name(fasta_path)));
        write_oneline(&records, &oneline_path)?;
        log::info!("Wrote {}", oneline_path.display());
    }

    let annotations = assemble_all(&records, rules);
    let drawing = plan(&annotations, motifs, canvas).map_err(|e| e.to_string())?;
    if drawing.is_empty() {
        log::warn!("Nothing to draw for {}", fasta_path.display());
        return Ok(());
    }

    let image_path = image_path(fasta_path, out_dir, args.format);
    generate_image(&to_lane_plot(&drawing, canvas), &image_path)?;
    log::info!(
        "Wrote {} ({} shape(s) on {} lane(s))",
        image_path.display(),
        drawing.shapes.len(),
        drawing.lanes.len()
    );
    Ok(())
}

fn output_dir(fasta_path: &Path, requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(dir) => dir.to_path_buf(),
        None => fasta_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    }
}

// File name without any compression suffix
fn file_name(fasta_path: &Path) -> String {
    let name = fasta_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if is_gzipped(fasta_path) {
        if let Some((stem, _)) = name.rsplit_once('.') {
            return stem.to_string();
        }
    }
    name
}

/// `<dir>/<name up to the first ".fa">.<format>`, so that `gene.fasta` and
/// `gene.fa.gz` both become `gene.<format>`.
pub fn image_path(fasta_path: &Path, out_dir: &Path, format: ImageFormat) -> PathBuf {
    let name = file_name(fasta_path);
    let stem = match name.find(".fa") {
        Some(index) if index > 0 => &name[..index],
        _ => name.as_str(),
    };
    out_dir.join(format!("{}.{}", stem, format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_strips_fasta_extensions() {
        let out = Path::new("/out");
        assert_eq!(
            image_path(Path::new("data/Figure_1.fasta"), out, ImageFormat::Png),
            PathBuf::from("/out/Figure_1.png")
        );
        assert_eq!(
            image_path(Path::new("genes.fa.gz"), out, ImageFormat::Svg),
            PathBuf::from("/out/genes.svg")
        );
        assert_eq!(
            image_path(Path::new("genes.txt"), out, ImageFormat::Pdf),
            PathBuf::from("/out/genes.txt.pdf")
        );
    }

    fn args_for(fasta_paths: &[&str], output_dir: Option<&str>) -> MarkArgs {
        MarkArgs {
            fasta_paths: fasta_paths.iter().map(PathBuf::from).collect(),
            motif_paths: Vec::new(),
            output_dir: output_dir.map(PathBuf::from),
            format: ImageFormat::Png,
            write_oneline: false,
            lane_width: 750.0,
            lane_height: 60.0,
            padding: 12.0,
        }
    }

    #[test]
    fn colliding_image_names_err() {
        let args = args_for(&["data/genes.fa", "data/genes.fasta"], Some("/out"));
        assert_eq!(
            check_distinct_images(&args),
            Err("data/genes.fa and data/genes.fasta would both be drawn to /out/genes.png".to_string())
        );
    }

    #[test]
    fn same_stem_in_different_dirs_ok() {
        let args = args_for(&["a/genes.fa", "b/genes.fa"], None);
        assert_eq!(check_distinct_images(&args), Ok(()));
    }

    #[test]
    fn oneline_name_drops_gzip_suffix() {
        assert_eq!(file_name(Path::new("a/genes.fa.gz")), "genes.fa");
        assert_eq!(file_name(Path::new("genes.fa")), "genes.fa");
    }

    #[test]
    fn output_dir_defaults_to_fasta_parent() {
        assert_eq!(
            output_dir(Path::new("data/genes.fa"), None),
            PathBuf::from("data")
        );
        assert_eq!(output_dir(Path::new("genes.fa"), None), PathBuf::new());
        assert_eq!(
            output_dir(Path::new("data/genes.fa"), Some(Path::new("/tmp"))),
            PathBuf::from("/tmp")
        );
    }
}
