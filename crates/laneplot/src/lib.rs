/*!
This crate draws "lane plots": stacked horizontal lanes, each holding a set of
horizontal strokes placed at absolute coordinates. Strokes within a lane may
overlap; later strokes are painted over earlier ones. Lanes can carry a text
label and the plot carries a legend of colored swatches. The crate supports
rendering of lane plots as SVG, PNG, and PDF images.

Lane plots are useful for showing features (exons, introns, sequence motifs)
along a set of sequences that share a horizontal scale.
*/

mod image;
mod laneplot;
mod pdf;
mod png;
mod svg;

pub use image::generate as generate_image;
pub use laneplot::{Color, Label, Lane, LanePlot, Legend, Stroke};
