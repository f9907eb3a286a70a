use crate::layout::{CanvasConfig, ColorRef, DrawingPlan, ShapeKind};
use laneplot::{Label, Lane, LanePlot, Legend, Stroke};

const MOTIF_OPACITY: f64 = 0.85;
const LABEL_BASELINE: f64 = 12.0; // Offset from the lane top

/// Converts a drawing plan into absolute lane-plot strokes.
pub fn to_lane_plot(plan: &DrawingPlan, canvas: &CanvasConfig) -> LanePlot {
    let lanes = plan
        .lanes
        .iter()
        .enumerate()
        .map(|(index, frame)| {
            let strokes = plan
                .lane_shapes(index)
                .map(|shape| Stroke {
                    x1: frame.x_origin + shape.x_start,
                    x2: frame.x_origin + shape.x_end,
                    y: shape.y_center,
                    width: shape.stroke_width,
                    color: color_of(plan, shape.color),
                    opacity: match shape.kind {
                        ShapeKind::Motif => MOTIF_OPACITY,
                        ShapeKind::Intron | ShapeKind::Exon => 1.0,
                    },
                })
                .collect();
            Lane {
                label: Some(Label {
                    xpos: frame.x_origin,
                    ypos: frame.y_top + LABEL_BASELINE,
                    text: frame.label.clone(),
                }),
                strokes,
            }
        })
        .collect();

    let labels = plan
        .legend
        .iter()
        .filter_map(|&color| plan.colors.get(color))
        .map(|(key, rgb)| (key.to_string(), rgb.to_string()))
        .collect();

    LanePlot {
        width: plan.width,
        height: plan.height,
        lanes,
        legend: Legend {
            xpos: plan.legend_origin.0,
            ypos: plan.legend_origin.1,
            swatch: canvas.legend_swatch,
            row_height: canvas.legend_row_height,
            labels,
        },
    }
}

fn color_of(plan: &DrawingPlan, color: ColorRef) -> String {
    plan.colors
        .rgb(color)
        .map(|rgb| rgb.to_string())
        .unwrap_or_else(|| "#000000".to_string())
}
