//! Geometry primitives shared across the workspace.
//!
//! Points are stored in world coordinates. The `"x1,y1 x2,y2 ..."`
//! point-string form is a boundary format only (drag payloads, persisted
//! layouts); live shape data is structured.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Componentwise translation.
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the bounding box of a point set. Returns `None` for an
    /// empty slice.
    pub fn of_points(points: &[Point]) -> Option<Bounds> {
        if points.is_empty() {
            return None;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Bounds::new(min_x, min_y, max_x, max_y))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True when the box has no usable area. Fit operations must treat a
    /// degenerate box as a no-op rather than divide by zero.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

/// Parses a `"x1,y1 x2,y2 ..."` point string.
///
/// Tokens are separated by whitespace, coordinates by a comma. Leading and
/// trailing whitespace is ignored. Errors identify the offending token so
/// callers can log and drop the entry.
pub fn parse_points(input: &str) -> Result<Vec<Point>, GeometryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GeometryError::Empty);
    }

    let mut points = Vec::new();
    for (index, token) in trimmed.split_whitespace().enumerate() {
        let Some((x_text, y_text)) = token.split_once(',') else {
            return Err(GeometryError::MalformedToken {
                token: token.to_string(),
                index,
            });
        };
        if y_text.contains(',') {
            return Err(GeometryError::MalformedToken {
                token: token.to_string(),
                index,
            });
        }

        let x = parse_coordinate(x_text, index)?;
        let y = parse_coordinate(y_text, index)?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn parse_coordinate(text: &str, index: usize) -> Result<f64, GeometryError> {
    let value: f64 = text
        .parse()
        .map_err(|_| GeometryError::NonNumericCoordinate {
            value: text.to_string(),
            index,
        })?;
    if !value.is_finite() {
        return Err(GeometryError::NonNumericCoordinate {
            value: text.to_string(),
            index,
        });
    }
    Ok(value)
}

/// Serializes points back to the `"x1,y1 x2,y2 ..."` boundary format.
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{},{}", p.x, p.y));
    }
    out
}

/// Mean of a vertex set. Returns `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::default(), |acc, p| {
        Point::new(acc.x + p.x, acc.y + p.y)
    });
    Some(Point::new(sum.x / n, sum.y / n))
}
