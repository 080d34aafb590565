use crate::shared::constants::DEFAULT_BLUR_KERNEL;

/// Window size of the final blur. Always positive and odd so the window
/// has a centre pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlurKernelSize(usize);

impl BlurKernelSize {
    pub fn new(size: i64) -> Option<Self> {
        if size <= 0 || size % 2 == 0 {
            return None;
        }
        usize::try_from(size).ok().map(Self)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_valid(size: usize) -> bool {
        size % 2 == 1
    }
}

impl Default for BlurKernelSize {
    fn default() -> Self {
        Self(DEFAULT_BLUR_KERNEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one(1)]
    #[case::three(3)]
    #[case::default(15)]
    #[case::large(201)]
    fn test_accepts_positive_odd(#[case] size: i64) {
        assert_eq!(BlurKernelSize::new(size).map(|k| k.get() as i64), Some(size));
    }

    #[rstest]
    #[case::even(14)]
    #[case::zero(0)]
    #[case::negative_odd(-3)]
    #[case::negative_even(-2)]
    fn test_rejects_invalid(#[case] size: i64) {
        assert!(BlurKernelSize::new(size).is_none());
    }

    #[test]
    fn test_default_is_fifteen() {
        assert_eq!(BlurKernelSize::default().get(), 15);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(14, false)]
    #[case(15, true)]
    fn test_is_valid(#[case] size: usize, #[case] expected: bool) {
        assert_eq!(BlurKernelSize::is_valid(size), expected);
    }
}
