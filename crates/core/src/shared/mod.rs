pub mod constants;
pub mod frame;
pub mod kernel_size;
pub mod rect;
