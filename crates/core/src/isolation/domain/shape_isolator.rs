use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

use super::isolation::Isolation;
use super::isolation_error::IsolationError;

/// Domain interface for locating the dominant shape inside a region and
/// blurring only its interior.
///
/// Implementations never modify `image`; the result is a new buffer.
/// Finding no shape is not an error: the returned image then equals the input.
pub trait ShapeIsolator: Send + Sync {
    fn isolate(
        &self,
        image: &Frame,
        rect: &Rect,
        kernel_size: usize,
        debug: bool,
    ) -> Result<Isolation, IsolationError>;
}
