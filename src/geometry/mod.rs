mod circle;
mod hull;
mod types;

pub use circle::{circle_ring, CircleRequest};
pub use hull::{convex_hull, HullRequest};
pub use types::Polygon;
