//! Node boundary shapes.
//!
//! Forces in this crate act between shape boundaries, not centers, so the
//! one operation that matters here is [`Shape::intersection`]: where the
//! segment from a box's center toward another point crosses the boundary.
//! [`Shape::dimension`] is the inverse concern, sizing the drawn shape so a
//! label bounding box fits inside it.

use std::f64::consts::SQRT_2;

use crate::model::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Ellipse inscribed in the bounding box. `diameter` is the smallest
    /// drawn diameter per axis.
    Oval { diameter: f64 },
    /// The bounding box itself. `min_size` is the smallest drawn extent
    /// per axis.
    Rectangle { min_size: f64 },
}

impl Shape {
    pub const DEFAULT_OVAL_DIAMETER: f64 = 20.0;
    pub const DEFAULT_RECTANGLE_MIN_SIZE: f64 = 5.0;

    /// An oval with the default minimum diameter.
    pub fn oval() -> Self {
        Shape::Oval {
            diameter: Self::DEFAULT_OVAL_DIAMETER,
        }
    }

    /// A rectangle with the default minimum extent.
    pub fn rectangle() -> Self {
        Shape::Rectangle {
            min_size: Self::DEFAULT_RECTANGLE_MIN_SIZE,
        }
    }

    /// The point where the segment from the center of `bbox` toward `end`
    /// crosses the shape boundary.
    ///
    /// Total and deterministic for every non-degenerate `bbox`: a vertical
    /// segment takes a dedicated branch, and when `end` is the center
    /// itself the tie resolves to the boundary point above the center.
    pub fn intersection(&self, bbox: Rect, end: Point) -> Point {
        let c = bbox.center();
        match *self {
            Shape::Oval { .. } => {
                let a = bbox.half_w();
                let b = bbox.half_h();
                if end.x == c.x {
                    let dy = if end.y > c.y { b } else { -b };
                    Point::new(c.x, c.y + dy)
                } else {
                    // Parametrize the ellipse by the segment slope. `denom`
                    // is strictly positive because `b` is.
                    let m = (end.y - c.y) / (end.x - c.x);
                    let denom = (a * a * m * m + b * b).sqrt();
                    let dx = a * b / denom;
                    let dy = a * b * m / denom;
                    if end.x > c.x {
                        Point::new(c.x + dx, c.y + dy)
                    } else {
                        Point::new(c.x - dx, c.y - dy)
                    }
                }
            }
            Shape::Rectangle { .. } => {
                let hw = bbox.half_w();
                let hh = bbox.half_h();
                let (dx, dy) = if end.x == c.x {
                    (0.0, hh)
                } else {
                    let m = ((end.y - c.y) / (end.x - c.x)).abs();
                    if m == 0.0 {
                        (hw, 0.0)
                    } else {
                        // Clip against whichever side the segment hits first.
                        (hw.min(hh / m), hh.min(hw * m))
                    }
                };
                let x = if end.x > c.x { c.x + dx } else { c.x - dx };
                let y = if end.y > c.y { c.y + dy } else { c.y - dy };
                Point::new(x, y)
            }
        }
    }

    /// The bounding box the drawn shape needs to enclose the label box
    /// `bbox`, same center.
    pub fn dimension(&self, bbox: Rect) -> Rect {
        match *self {
            Shape::Oval { diameter } => {
                // A rectangle inscribes in an ellipse sqrt(2) larger per axis.
                let width = if bbox.width < diameter {
                    diameter
                } else {
                    bbox.width * SQRT_2
                };
                let height = if bbox.height < diameter {
                    diameter
                } else {
                    bbox.height * SQRT_2
                };
                Rect::centered(bbox.center(), width, height)
            }
            Shape::Rectangle { min_size } => Rect::centered(
                bbox.center(),
                bbox.width.max(min_size),
                bbox.height.max(min_size),
            ),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::oval()
    }
}
