pub type Color = String;

/// A horizontal line from `x1` to `x2` at height `y`, all in points.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub width: f64,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub xpos: f64,
    pub ypos: f64, // Text baseline
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub label: Option<Label>,
    pub strokes: Vec<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub xpos: f64,
    pub ypos: f64,
    pub swatch: f64, // Side of the square color swatch
    pub row_height: f64,
    pub labels: Vec<(String, Color)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanePlot {
    pub width: f64,
    pub height: f64,
    pub lanes: Vec<Lane>,
    pub legend: Legend,
}

impl LanePlot {
    pub fn stroke_count(&self) -> usize {
        self.lanes.iter().map(|lane| lane.strokes.len()).sum()
    }
}
