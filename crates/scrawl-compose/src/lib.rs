#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! the scrawl-compose crate provides scrawl with building blocks for creating, normalizing and hit-testing diagram shapes.

// Modules
/// module for extension traits for foreign types
pub mod ext;
/// point utilities
pub mod point_utils;
/// module for shapes
pub mod shapes;

// Re-exports
pub use shapes::Shape;
pub use shapes::ShapeKind;
pub use shapes::UnsupportedShapeKind;

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;
