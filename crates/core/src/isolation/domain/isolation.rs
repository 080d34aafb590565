use crate::shared::frame::Frame;

/// Intermediate buffers exposed in debug mode.
#[derive(Clone, Debug)]
pub struct DebugArtifacts {
    /// Grayscale conversion of the ROI (single channel).
    pub gray: Frame,
    /// Edge map after morphological closing (single channel, 0 or 255).
    pub edges: Frame,
    /// Unmodified copy of the ROI.
    pub roi: Frame,
    /// Filled interior of the selected contour (single channel, 0 or 255).
    /// All zeros when no shape was found.
    pub mask: Frame,
}

/// Outcome of one isolation call.
#[derive(Clone, Debug)]
pub struct Isolation {
    /// Full-size image with the selected shape's interior blurred.
    pub result: Frame,
    /// Enclosed area of the selected contour, `None` when no shape was found.
    pub largest_area: Option<f64>,
    pub debug: Option<DebugArtifacts>,
}

impl Isolation {
    pub fn shape_found(&self) -> bool {
        self.largest_area.is_some()
    }
}
