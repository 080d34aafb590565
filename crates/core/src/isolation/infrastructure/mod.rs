pub mod contours;
pub mod cpu_shape_isolator;
pub mod edges;
mod gaussian;
