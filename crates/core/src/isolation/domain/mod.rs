pub mod isolation;
pub mod isolation_error;
pub mod shape_isolator;
