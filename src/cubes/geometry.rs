//! Escher cube geometry.
//!
//! A cube is drawn as three rhombus faces ("diamonds") of equal edge length.
//! Faces are laid out unrotated and then turned about their own origin by 0,
//! +60 and -60 degrees.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point `distance` away along a heading of `degrees` (clockwise, y down).
    pub fn from(&self, distance: f64, degrees: f64) -> Point {
        let angle = degrees.to_radians();
        Point::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

pub fn diamond_width(length: f64) -> f64 {
    length * (PI / 6.0).cos()
}

pub fn diamond_height(length: f64) -> f64 {
    length + length * (PI / 6.0).sin()
}

/// Horizontal pitch between neighbouring cubes in a row.
pub fn module_width(length: f64, padding: f64) -> f64 {
    diamond_width(length) * 2.0 + padding * 2.0
}

/// One face of a cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Diamond {
    pub origin: Point,
    pub length: f64,
    /// Degrees, applied about `origin`.
    pub rotation: f64,
    pub fill: String,
}

impl Diamond {
    /// Corners before rotation, starting at the origin.
    pub fn points(&self) -> [Point; 4] {
        let start = self.origin;
        let second = start.translated(0.0, self.length);
        let third = second.from(self.length, 30.0);
        let fourth = third.translated(0.0, -self.length);
        [start, second, third, fourth]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub faces: [Diamond; 3],
}

impl Cube {
    pub fn new(origin: Point, length: f64, padding: f64, fills: [String; 3]) -> Self {
        let [left, right, top] = fills;
        let width = diamond_width(length);
        Self {
            faces: [
                Diamond {
                    origin: origin.translated(0.0, padding),
                    length,
                    rotation: 0.0,
                    fill: left,
                },
                Diamond {
                    origin: origin.translated(width * 2.0 + padding, padding),
                    length,
                    rotation: 60.0,
                    fill: right,
                },
                Diamond {
                    origin: origin.translated(padding / 2.0, 0.0),
                    length,
                    rotation: -60.0,
                    fill: top,
                },
            ],
        }
    }
}
