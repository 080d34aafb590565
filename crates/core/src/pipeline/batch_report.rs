use std::path::Path;

/// What happened to one input file.
#[derive(Clone, Debug, PartialEq)]
pub enum FileOutcome {
    /// Result written; `shape_found` is false when the region was left unchanged.
    Processed { shape_found: bool },
    /// Result and the four intermediate images written.
    ProcessedWithDebug { shape_found: bool },
    /// Nothing (or only part of the outputs) written; processing moved on.
    Skipped { reason: String },
}

impl FileOutcome {
    pub fn is_processed(&self) -> bool {
        !matches!(self, FileOutcome::Skipped { .. })
    }

    pub fn shape_found(&self) -> bool {
        match self {
            FileOutcome::Processed { shape_found }
            | FileOutcome::ProcessedWithDebug { shape_found } => *shape_found,
            FileOutcome::Skipped { .. } => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
    /// Enclosed area of the blurred shape, when one was found.
    pub contour_area: Option<f64>,
    /// `(stage, milliseconds)` for each stage that ran.
    pub timings: Vec<(&'static str, f64)>,
}

impl FileReport {
    pub fn skipped(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            outcome: FileOutcome::Skipped {
                reason: reason.into(),
            },
            contour_area: None,
            timings: Vec::new(),
        }
    }
}

/// Per-file outcomes of a batch run, ordered by file name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn new(mut files: Vec<FileReport>) -> Self {
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Self { files }
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn processed_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_processed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.total() - self.processed_count()
    }

    pub fn shapes_found(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.shape_found()).count()
    }

    pub fn get(&self, file_name: &str) -> Option<&FileReport> {
        self.files.iter().find(|f| f.file_name == file_name)
    }
}

/// Display name used in reports and log lines: the final path component.
pub fn report_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processed(name: &str, shape_found: bool) -> FileReport {
        FileReport {
            file_name: name.to_string(),
            outcome: FileOutcome::Processed { shape_found },
            contour_area: shape_found.then_some(12.0),
            timings: vec![("decode", 1.0)],
        }
    }

    #[test]
    fn test_report_sorted_by_name() {
        let report = BatchReport::new(vec![
            processed("c.png", true),
            FileReport::skipped("a.jpg", "bad"),
            processed("b.png", false),
        ]);
        let names: Vec<_> = report.files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.png"]);
    }

    #[test]
    fn test_counts() {
        let report = BatchReport::new(vec![
            processed("a.png", true),
            FileReport {
                file_name: "b.png".into(),
                outcome: FileOutcome::ProcessedWithDebug { shape_found: true },
                contour_area: Some(30.0),
                timings: Vec::new(),
            },
            processed("c.png", false),
            FileReport::skipped("d.jpg", "decode failed"),
        ]);
        assert_eq!(report.total(), 4);
        assert_eq!(report.processed_count(), 3);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.shapes_found(), 2);
    }

    #[test]
    fn test_get_by_name() {
        let report = BatchReport::new(vec![FileReport::skipped("x.bmp", "boom")]);
        assert_eq!(
            report.get("x.bmp").map(|f| &f.outcome),
            Some(&FileOutcome::Skipped {
                reason: "boom".into()
            })
        );
        assert!(report.get("y.bmp").is_none());
    }

    #[test]
    fn test_report_name_uses_file_name() {
        assert_eq!(report_name(Path::new("/in/photos/cat.JPG")), "cat.JPG");
    }

    #[test]
    fn test_skipped_has_no_shape() {
        assert!(!FileOutcome::Skipped { reason: String::new() }.shape_found());
    }
}
