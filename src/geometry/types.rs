use serde::Serialize;
use utoipa::ToSchema;

/// Planar point. For geographic input `x` is longitude and `y` latitude, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed polygon boundary: the first vertex is repeated as the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<Point2D>,
}

impl Ring {
    /// Close an open vertex sequence by appending its first vertex.
    pub fn close(mut open: Vec<Point2D>) -> Self {
        if let Some(first) = open.first().copied() {
            open.push(first);
        }
        Self { vertices: open }
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 1 && first == last,
            _ => false,
        }
    }
}

/// GeoJSON-style polygon with a single outer ring and no holes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Polygon {
    #[serde(rename = "type")]
    #[schema(example = "Polygon")]
    pub kind: String,
    /// Rings of `[x, y]` pairs; always exactly one outer ring.
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

impl From<Ring> for Polygon {
    fn from(ring: Ring) -> Self {
        debug_assert!(ring.is_closed());
        let outer = ring.vertices().iter().map(|p| vec![p.x, p.y]).collect();
        Polygon {
            kind: "Polygon".to_string(),
            coordinates: vec![outer],
        }
    }
}
