use serde::{Deserialize, Serialize};

use super::{LayoutConfig, SCALING};

/// Axis-aligned rectangle in display units, stored as top-left and
/// bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_inches(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(x0 * SCALING, y0 * SCALING, x1 * SCALING, y1 * SCALING)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Top-left, bottom-right, bottom-left, top-right.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x0, self.y0),
            (self.x1, self.y1),
            (self.x0, self.y1),
            (self.x1, self.y0),
        ]
    }

    /// Points on the border are outside.
    pub fn contains_point_strictly(&self, (x, y): (f64, f64)) -> bool {
        x > self.x0 && x < self.x1 && y > self.y0 && y < self.y1
    }

    /// True when any corner of `self` lies strictly inside `other`.
    ///
    /// This is a corner test, not a full intersection test: a rectangle that
    /// encloses `other`, or crosses it without a corner inside, reports false.
    pub fn corner_overlaps(&self, other: &Rect) -> bool {
        self.corners()
            .into_iter()
            .any(|corner| other.contains_point_strictly(corner))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitePreset {
    #[default]
    Open,
    Kitchen,
}

/// Fixed zones of the installation surface.
///
/// Only `visible` decides whether a cell counts; `masked` is what gets
/// blanked out of the rendered mosaic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Site {
    pub visible: Vec<Rect>,
    pub masked: Vec<Rect>,
}

/// Height of the countertop band left uncovered on either side of the window.
const KITCHEN_COUNTER_HEIGHT_IN: f64 = 8.3;
/// The drawn counter mask stops a little short of the band used for counting.
const KITCHEN_MASK_HEIGHT_IN: f64 = 8.0;
const KITCHEN_WINDOW_LEFT_IN: f64 = 58.0;
const KITCHEN_WINDOW_RIGHT_IN: f64 = 88.0;
const KITCHEN_WALL_WIDTH_IN: f64 = 108.5;

impl Site {
    pub fn for_preset(preset: SitePreset, config: &LayoutConfig) -> Self {
        match preset {
            SitePreset::Open => Self::open(config),
            SitePreset::Kitchen => Self::kitchen(config),
        }
    }

    /// The whole tiled area is visible.
    pub fn open(config: &LayoutConfig) -> Self {
        Self {
            visible: vec![Rect::new(0.0, 0.0, config.width(), config.height())],
            masked: vec![],
        }
    }

    /// Backsplash with counters on both sides and a window bay in the middle.
    pub fn kitchen(config: &LayoutConfig) -> Self {
        Self {
            visible: vec![
                Rect::new(
                    0.0,
                    KITCHEN_COUNTER_HEIGHT_IN * SCALING,
                    config.width(),
                    config.height(),
                ),
                Rect::from_inches(
                    KITCHEN_WINDOW_LEFT_IN,
                    0.0,
                    KITCHEN_WINDOW_RIGHT_IN,
                    KITCHEN_COUNTER_HEIGHT_IN,
                ),
            ],
            masked: vec![
                Rect::from_inches(0.0, 0.0, KITCHEN_WINDOW_LEFT_IN, KITCHEN_MASK_HEIGHT_IN),
                Rect::from_inches(
                    KITCHEN_WINDOW_RIGHT_IN,
                    0.0,
                    KITCHEN_WALL_WIDTH_IN,
                    KITCHEN_MASK_HEIGHT_IN,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_strictly_excludes_border() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point_strictly((5.0, 5.0)));
        assert!(!rect.contains_point_strictly((0.0, 5.0)));
        assert!(!rect.contains_point_strictly((5.0, 10.0)));
        assert!(!rect.contains_point_strictly((11.0, 5.0)));
    }

    #[test]
    fn test_corner_overlap() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Rect::new(8.0, 8.0, 20.0, 20.0).corner_overlaps(&region));
        assert!(Rect::new(-5.0, 2.0, 2.0, 4.0).corner_overlaps(&region));
        assert!(!Rect::new(10.0, 0.0, 20.0, 10.0).corner_overlaps(&region));
    }

    #[test]
    fn test_corner_overlap_misses_enclosing_rect() {
        let region = Rect::new(2.0, 2.0, 4.0, 4.0);
        let enclosing = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!enclosing.corner_overlaps(&region));
        assert!(region.corner_overlaps(&enclosing));
    }

    #[test]
    fn test_kitchen_regions() {
        let site = Site::kitchen(&LayoutConfig::default());
        assert_eq!(site.visible.len(), 2);
        assert_eq!(site.masked.len(), 2);
        assert_eq!(site.visible[1], Rect::new(58.0 * 72.0, 0.0, 88.0 * 72.0, 8.3 * 72.0));
        assert_eq!(site.masked[1].x1, 108.5 * 72.0);
        assert_eq!(site.masked[0], Rect::new(0.0, 0.0, 58.0 * 72.0, 8.0 * 72.0));
        assert_eq!(site.masked[1].height(), 8.0 * 72.0);
    }
}
