mod canvas;
mod color;
mod plan;

pub use canvas::CanvasConfig;
pub use color::{motif_palette, Color, ColorKey, ColorRef, ColorTable, Rgb};
pub use plan::{plan, DrawingPlan, LaneFrame, Shape, ShapeKind};
