use crate::utils::Result;

/// Geometry of the drawing surface, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub lane_width: f64,
    pub lane_height: f64,
    pub padding: f64,
    pub label_height: f64, // Space reserved for the lane label at the top of each lane
    pub intron_stroke: f64,
    pub exon_stroke: f64,
    pub motif_stroke: f64,
    pub legend_swatch: f64,
    pub legend_row_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            lane_width: 750.0,
            lane_height: 60.0,
            padding: 12.0,
            label_height: 16.0,
            intron_stroke: 1.5,
            exon_stroke: 12.0,
            motif_stroke: 8.0,
            legend_swatch: 10.0,
            legend_row_height: 16.0,
        }
    }
}

impl CanvasConfig {
    pub fn with_lanes(lane_width: f64, lane_height: f64, padding: f64) -> Self {
        Self {
            lane_width,
            lane_height,
            padding,
            ..Self::default()
        }
    }

    /// Shortest lane that fits the label above the widest stroke.
    pub fn min_lane_height(&self) -> f64 {
        self.label_height + self.intron_stroke.max(self.exon_stroke).max(self.motif_stroke)
    }

    pub fn check(&self) -> Result<()> {
        if self.lane_height < self.min_lane_height() {
            return Err(format!(
                "Lane height must be at least {}, got: {}",
                self.min_lane_height(),
                self.lane_height
            ));
        }
        Ok(())
    }

    /// Vertical center of the shapes in a lane whose top edge is at `lane_top`.
    pub fn lane_center(&self, lane_top: f64) -> f64 {
        let label = self.label_height.min(self.lane_height);
        lane_top + label + (self.lane_height - label) / 2.0
    }
}
