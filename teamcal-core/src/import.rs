//! Import preview. Files are read and summarized; nothing is applied to the
//! calendar.

use std::path::Path;

use crate::error::TeamCalResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPreview {
    pub line_count: usize,
    pub byte_count: usize,
    pub head: Vec<String>,
}

pub fn preview_import(path: &Path, max_lines: usize) -> TeamCalResult<ImportPreview> {
    let content = std::fs::read_to_string(path)?;
    let preview = ImportPreview {
        line_count: content.lines().count(),
        byte_count: content.len(),
        head: content.lines().take(max_lines).map(str::to_string).collect(),
    };
    tracing::info!(
        path = %path.display(),
        lines = preview.line_count,
        "previewed import file"
    );
    Ok(preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_takes_head() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let preview = preview_import(&path, 2).unwrap();
        assert_eq!(preview.line_count, 3);
        assert_eq!(preview.byte_count, 14);
        assert_eq!(preview.head, vec!["one", "two"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(preview_import(&dir.path().join("nope.txt"), 5).is_err());
    }
}
