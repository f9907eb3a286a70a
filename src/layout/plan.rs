use super::canvas::CanvasConfig;
use super::color::{ColorRef, ColorTable};
use crate::annotate::{Annotation, Interval};
use crate::utils::MarkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Intron,
    Exon,
    Motif,
}

/// A horizontal line within a lane. `x_start` and `x_end` are relative to
/// the lane origin; `y_center` is absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: ColorRef,
    pub x_start: f64,
    pub x_end: f64,
    pub y_center: f64,
    pub lane: usize,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaneFrame {
    pub label: String,
    pub x_origin: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingPlan {
    pub scale: f64, // Points per base
    pub width: f64,
    pub height: f64,
    pub colors: ColorTable,
    pub lanes: Vec<LaneFrame>,
    pub shapes: Vec<Shape>, // Paint order
    pub legend: Vec<ColorRef>,
    pub legend_origin: (f64, f64),
}

impl DrawingPlan {
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn lane_shapes(&self, lane: usize) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |shape| shape.lane == lane)
    }
}

/// Lays out one lane per annotation, stacked in input order, with every
/// sequence drawn on the scale of the longest one.
pub fn plan(
    annotations: &[Annotation],
    motif_order: &[String],
    canvas: &CanvasConfig,
) -> Result<DrawingPlan, MarkError> {
    if annotations.is_empty() || motif_order.is_empty() {
        return Ok(DrawingPlan::default());
    }

    let longest = annotations.iter().map(|a| a.seq_len).max().unwrap_or(0);
    if longest == 0 {
        return Err(MarkError::DegenerateScale {
            records: annotations.len(),
        });
    }
    let scale = canvas.lane_width / longest as f64;
    let colors = ColorTable::new(motif_order);

    let mut lanes = Vec::with_capacity(annotations.len());
    let mut shapes = Vec::new();
    for (lane, annotation) in annotations.iter().enumerate() {
        let y_top = canvas.padding + lane as f64 * canvas.lane_height;
        let y_center = canvas.lane_center(y_top);
        let mut place = |kind, color, stroke_width, interval: &Interval| {
            shapes.push(Shape {
                kind,
                color,
                x_start: to_x(interval.start, scale, canvas),
                x_end: to_x(interval.stop, scale, canvas),
                y_center,
                lane,
                stroke_width,
            })
        };

        for intron in &annotation.introns {
            place(ShapeKind::Intron, ColorTable::INTRON, canvas.intron_stroke, intron);
        }
        for exon in &annotation.exons {
            place(ShapeKind::Exon, ColorTable::EXON, canvas.exon_stroke, exon);
        }
        for (motif_index, motif) in motif_order.iter().enumerate() {
            let color = ColorTable::motif_ref(motif_index);
            for hit in annotation.hits_for(motif).unwrap_or_default() {
                place(ShapeKind::Motif, color, canvas.motif_stroke, hit);
            }
        }

        lanes.push(LaneFrame {
            label: annotation.label.clone(),
            x_origin: canvas.padding,
            y_top,
            width: to_x(annotation.seq_len, scale, canvas),
            height: canvas.lane_height,
        });
    }

    let legend_top = canvas.padding + annotations.len() as f64 * canvas.lane_height;
    let legend = (0..colors.len()).collect::<Vec<_>>();
    let legend_height = legend.len() as f64 * canvas.legend_row_height;

    Ok(DrawingPlan {
        scale,
        width: canvas.lane_width + 2.0 * canvas.padding,
        height: legend_top + legend_height + canvas.padding,
        colors,
        lanes,
        shapes,
        legend,
        legend_origin: (canvas.padding, legend_top),
    })
}

// Rounding can push the last base a hair past the lane edge
fn to_x(pos: usize, scale: f64, canvas: &CanvasConfig) -> f64 {
    (pos as f64 * scale).min(canvas.lane_width)
}
