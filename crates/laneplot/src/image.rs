use crate::{pdf, png, svg, LanePlot};
use std::path::Path;
use usvg::Tree;

/// Renders the plot in the format implied by the extension of `path`.
pub fn generate(plot: &LanePlot, path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(format!("Failed to get extension from path: {path:?}"))?;
    let file_type = FileType::from_extension(extension)
        .ok_or(format!("Unsupported file extension: {extension:?}"))?;
    let svg_content = svg::generate_string(plot);
    match file_type {
        FileType::Svg => svg::render_from_string(&svg_content, path),
        FileType::Png => png::render_from_string(&svg_content, path),
        FileType::Pdf => pdf::render_from_string(&svg_content, path),
    }
}

pub(crate) fn prepare_svg_tree(svg_data: &[u8]) -> Result<Tree, String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    usvg::Tree::from_data(svg_data, &options).map_err(|e| e.to_string())
}

#[derive(Debug, PartialEq)]
enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }
}
