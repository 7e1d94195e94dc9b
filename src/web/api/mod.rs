pub mod analytics;
pub mod error;
pub mod estimation;
pub mod generator;
pub mod health;
pub mod polygons;
pub mod twins;
