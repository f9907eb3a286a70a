use crate::laneplot::{Color, Label, Lane, LanePlot, Legend, Stroke};
use std::path::Path;

const FONT_SIZE: f64 = 12.0;
const LEGEND_GAP: f64 = 4.0;

pub fn generate_string(plot: &LanePlot) -> String {
    let mut generator = Generator::new();
    generator.generate(plot);
    generator.svg
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| format!("{}: {}", path.display(), e))
}

struct Generator {
    svg: String,
}

impl Generator {
    fn new() -> Self {
        Self { svg: String::new() }
    }

    fn generate(&mut self, plot: &LanePlot) {
        self.start_svg(plot.width, plot.height);
        self.add_background();

        for lane in &plot.lanes {
            self.plot_lane(lane);
        }

        self.plot_legend(&plot.legend);
        self.end_svg();
    }

    fn plot_lane(&mut self, lane: &Lane) {
        if let Some(label) = &lane.label {
            self.add_text(label);
        }
        for stroke in &lane.strokes {
            self.add_hline(stroke);
        }
    }

    // One entry per row, top to bottom
    fn plot_legend(&mut self, legend: &Legend) {
        let x = legend.xpos;
        let mut y = legend.ypos;
        for (label, color) in &legend.labels {
            self.add_rect((x, y), (legend.swatch, legend.swatch), color);
            self.add_text(&Label {
                xpos: x + legend.swatch + LEGEND_GAP,
                ypos: y + legend.swatch,
                text: label.clone(),
            });
            y += legend.row_height;
        }
    }

    fn add_hline(&mut self, stroke: &Stroke) {
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", stroke.x1, stroke.y);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", stroke.x2, stroke.y);
        let style = format!(
            "stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"",
            stroke.color, stroke.width, stroke.opacity
        );
        self.push(format!("<line {} {} {} />", x1y1, x2y2, style));
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), color: &Color) {
        let pos = format!("x=\"{}\" y=\"{}\"", pos.0, pos.1);
        let dim = format!("width=\"{}\" height=\"{}\"", dims.0, dims.1);
        let style = format!("fill=\"{}\" stroke-width=\"0\"", color);
        self.push(format!("<rect {} {} {} />", pos, dim, style));
    }

    fn add_text(&mut self, label: &Label) {
        let point = format!("x=\"{}\" y=\"{}\"", label.xpos, label.ypos);
        let style = r#"font-family="monospace" font-weight="bold""#;
        let size = format!("font-size=\"{}px\"", FONT_SIZE);
        self.push(format!(
            "<text {} {} {}>{}</text>",
            point,
            style,
            size,
            escape(&label.text)
        ));
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        self.push(r#"<?xml version="1.0"?>"#.to_string());
        self.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            width, height
        ));
    }

    fn end_svg(&mut self) {
        self.push("</svg>".to_string());
    }

    fn add_background(&mut self) {
        self.push(r#"<rect width="100%" height="100%" fill="white"/>"#.to_string());
    }

    fn push(&mut self, line: String) {
        self.svg.push_str(&line);
        self.svg.push('\n');
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
