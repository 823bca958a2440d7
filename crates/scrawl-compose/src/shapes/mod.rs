// Modules
mod arrow;
mod line;
mod shape;

// Re-exports
pub use arrow::ArrowGeometry;
pub use line::Line;
pub use shape::Shape;
pub use shape::ShapeKind;
pub use shape::UnsupportedShapeKind;
