/// Extensions eligible for batch processing, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif"];

pub const DEFAULT_BLUR_KERNEL: usize = 15;

/// File-name suffixes for the intermediate artifacts written in debug mode.
pub const GRAY_SUFFIX: &str = "_gray";
pub const EDGES_SUFFIX: &str = "_edges";
pub const ROI_SUFFIX: &str = "_roi";
pub const MASK_SUFFIX: &str = "_mask";

/// True if `ext` (without the leading dot) is in [`IMAGE_EXTENSIONS`].
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}
