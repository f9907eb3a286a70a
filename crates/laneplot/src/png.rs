use crate::image::prepare_svg_tree;
use std::path::Path;

// Pixels per point
const ZOOM: f32 = 2.0;

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    let size = tree
        .size()
        .to_int_size()
        .scale_by(ZOOM)
        .ok_or(format!("Plot is too large to rasterize: {:?}", tree.size()))?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or(format!("Unable to allocate {}x{} image", size.width(), size.height()))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(ZOOM, ZOOM),
        &mut pixmap.as_mut(),
    );
    pixmap.save_png(path).map_err(|e| e.to_string())
}
