use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::kernel_size::BlurKernelSize;
use crate::shared::rect::Rect;

/// Fatal configuration problems, all detected before any image is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input directory does not exist: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "rect must be four integers (x, y, width, height) with x, y >= 0 and width, height > 0, got {0:?}"
    )]
    InvalidRect(Vec<i64>),

    #[error("blur kernel size must be a positive odd integer, got {0}")]
    InvalidKernel(i64),
}

/// Validated settings for one batch run.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
    rect: Rect,
    kernel_size: BlurKernelSize,
    debug: bool,
    jobs: usize,
}

impl BatchConfig {
    /// Validates raw settings and prepares the output directory.
    ///
    /// Checks run in order: rectangle, kernel, input directory. The output
    /// directory (and any missing parents) is created only once every other
    /// check has passed.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        rect: &[i64],
        kernel_size: i64,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let input_dir = input_dir.into();
        let output_dir = output_dir.into();

        let rect = match rect {
            &[x, y, w, h] => Rect::from_signed(x, y, w, h),
            _ => None,
        }
        .ok_or_else(|| ConfigError::InvalidRect(rect.to_vec()))?;

        let kernel_size =
            BlurKernelSize::new(kernel_size).ok_or(ConfigError::InvalidKernel(kernel_size))?;

        if !input_dir.exists() {
            return Err(ConfigError::MissingInputDir(input_dir));
        }
        if !input_dir.is_dir() {
            return Err(ConfigError::NotADirectory(input_dir));
        }

        std::fs::create_dir_all(&output_dir).map_err(|source| ConfigError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;

        Ok(Self {
            input_dir,
            output_dir,
            rect,
            kernel_size,
            debug,
            jobs: 1,
        })
    }

    /// Number of files processed concurrently. Zero is treated as one.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn kernel_size(&self) -> BlurKernelSize {
        self.kernel_size
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_config_creates_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("nested").join("out");

        let config = BatchConfig::new(tmp.path(), &output, &[1, 2, 30, 40], 15, true).unwrap();

        assert!(output.is_dir());
        assert_eq!(config.rect(), Rect::new(1, 2, 30, 40));
        assert_eq!(config.kernel_size().get(), 15);
        assert!(config.debug());
        assert_eq!(config.jobs(), 1);
        assert_eq!(config.input_dir(), tmp.path());
    }

    #[test]
    fn test_existing_output_dir_is_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out");
        std::fs::create_dir(&output).unwrap();

        assert!(BatchConfig::new(tmp.path(), &output, &[0, 0, 1, 1], 1, false).is_ok());
    }

    #[test]
    fn test_missing_input_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("does_not_exist");
        let output = tmp.path().join("out");

        let err = BatchConfig::new(&input, &output, &[0, 0, 10, 10], 15, false).unwrap_err();

        assert!(matches!(err, ConfigError::MissingInputDir(ref p) if *p == input));
        assert!(!output.exists());
    }

    #[test]
    fn test_input_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("photo.png");
        std::fs::write(&file, b"x").unwrap();

        let err =
            BatchConfig::new(&file, tmp.path().join("out"), &[0, 0, 10, 10], 15, false).unwrap_err();

        assert!(matches!(err, ConfigError::NotADirectory(_)));
    }

    #[rstest]
    #[case::negative_x(vec![-1, 0, 10, 10])]
    #[case::negative_y(vec![0, -5, 10, 10])]
    #[case::zero_width(vec![0, 0, 0, 10])]
    #[case::negative_height(vec![0, 0, 10, -10])]
    #[case::too_few(vec![0, 0, 10])]
    #[case::too_many(vec![0, 0, 10, 10, 10])]
    fn test_invalid_rect(#[case] rect: Vec<i64>) {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out");

        let err = BatchConfig::new(tmp.path(), &output, &rect, 15, false).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidRect(ref r) if *r == rect));
        assert!(!output.exists());
    }

    #[rstest]
    #[case::even(14)]
    #[case::zero(0)]
    #[case::negative(-3)]
    fn test_invalid_kernel(#[case] kernel: i64) {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out");

        let err = BatchConfig::new(tmp.path(), &output, &[0, 0, 10, 10], kernel, false).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidKernel(k) if k == kernel));
        assert!(!output.exists());
    }

    #[test]
    fn test_rect_checked_before_input_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let err = BatchConfig::new(
            tmp.path().join("missing"),
            tmp.path().join("out"),
            &[-1, 0, 10, 10],
            15,
            false,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidRect(_)));
    }

    #[test]
    fn test_output_dir_blocked_by_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("out");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let err = BatchConfig::new(tmp.path(), blocker.join("inner"), &[0, 0, 10, 10], 15, false)
            .unwrap_err();

        assert!(matches!(err, ConfigError::CreateOutputDir { .. }));
    }

    #[test]
    fn test_with_jobs_clamps_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(tmp.path(), tmp.path().join("out"), &[0, 0, 5, 5], 3, false)
            .unwrap()
            .with_jobs(0);
        assert_eq!(config.jobs(), 1);
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = ConfigError::InvalidKernel(14);
        assert_eq!(
            err.to_string(),
            "blur kernel size must be a positive odd integer, got 14"
        );
        let err = ConfigError::MissingInputDir(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "input directory does not exist: /nope");
    }
}
