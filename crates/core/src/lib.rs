pub mod io;
pub mod isolation;
pub mod pipeline;
pub mod shared;
