//! File selection
//!
//! Walks the source directory recursively and keeps regular files whose base
//! name matches an include pattern and no exclude pattern. The result is
//! sorted by base name so merge output does not depend on directory order.

mod patterns;

pub use patterns::NamePatterns;

use crate::error::{Error, Result};
use crate::types::ReportFile;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Include pattern used when none is given
pub const DEFAULT_INCLUDE: &str = "*.xml";

/// Exclude pattern used when none is given (the conventional output name)
pub const DEFAULT_EXCLUDE: &str = "result.xml";

/// Candidate files in merge order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    files: Vec<ReportFile>,
}

impl Selection {
    /// Number of candidate files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate in merge order
    pub fn iter(&self) -> std::slice::Iter<'_, ReportFile> {
        self.files.iter()
    }

}

impl From<Vec<ReportFile>> for Selection {
    fn from(mut files: Vec<ReportFile>) -> Self {
        sort_by_name(&mut files);
        Self { files }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ReportFile;
    type IntoIter = std::slice::Iter<'a, ReportFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Find candidate report files under `directory`.
///
/// An empty `include` list falls back to [`DEFAULT_INCLUDE`]. An empty
/// `exclude` list excludes nothing.
pub fn select_files(
    directory: &Path,
    include: &NamePatterns,
    exclude: &NamePatterns,
) -> Result<Selection> {
    if !directory.is_dir() || fs::read_dir(directory).is_err() {
        return Err(Error::DirectoryNotFound(directory.to_path_buf()));
    }

    let default_include;
    let include = if include.is_empty() {
        default_include = NamePatterns::parse_list(DEFAULT_INCLUDE)?;
        &default_include
    } else {
        include
    };

    let mut files = Vec::new();
    // symlinked reports count as files; walkdir reports link loops as errors
    for entry in WalkDir::new(directory).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(directory).to_path_buf();
            Error::Read {
                path,
                source: io::Error::from(e),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !include.matches(&name) || exclude.matches(&name) {
            continue;
        }

        let size = entry
            .metadata()
            .map_err(|e| Error::Read {
                path: entry.path().to_path_buf(),
                source: io::Error::from(e),
            })?
            .len();
        debug!(path = %entry.path().display(), size, "candidate report");
        files.push(ReportFile {
            path: entry.into_path(),
            size,
        });
    }

    Ok(Selection::from(files))
}

/// Order by base name; full path breaks ties between equally named files
/// in different subdirectories.
fn sort_by_name(files: &mut [ReportFile]) {
    files.sort_by(|a, b| {
        a.file_name()
            .cmp(b.file_name())
            .then_with(|| a.path.cmp(&b.path))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.iter().map(ReportFile::file_name).collect()
    }

    fn defaults() -> (NamePatterns, NamePatterns) {
        (
            NamePatterns::parse_list(DEFAULT_INCLUDE).unwrap(),
            NamePatterns::parse_list(DEFAULT_EXCLUDE).unwrap(),
        )
    }

    #[test]
    fn test_select_sorts_by_base_name_across_subdirectories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "z/a.xml", "<x/>");
        touch(temp.path(), "c.xml", "<x/>");
        touch(temp.path(), "a/b.xml", "<x/>");

        let (include, exclude) = defaults();
        let selection = select_files(temp.path(), &include, &exclude).unwrap();
        assert_eq!(names(&selection), vec!["a.xml", "b.xml", "c.xml"]);
    }

    #[test]
    fn test_select_applies_default_ignore() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.xml", "<x/>");
        touch(temp.path(), "result.xml", "<x/>");
        touch(temp.path(), "notes.txt", "hello");

        let (include, exclude) = defaults();
        let selection = select_files(temp.path(), &include, &exclude).unwrap();
        assert_eq!(names(&selection), vec!["a.xml"]);
    }

    #[test]
    fn test_select_exclude_wins_over_include() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "foo_1.xml", "<x/>");
        touch(temp.path(), "foo_skip.xml", "<x/>");
        touch(temp.path(), "bar.xml", "<x/>");

        let include = NamePatterns::parse_list("foo*.xml").unwrap();
        let exclude = NamePatterns::parse_list("foo_skip.xml").unwrap();
        let selection = select_files(temp.path(), &include, &exclude).unwrap();
        assert_eq!(names(&selection), vec!["foo_1.xml"]);
    }

    #[test]
    fn test_select_empty_include_defaults_to_xml() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.xml", "<x/>");
        touch(temp.path(), "a.json", "{}");

        let selection =
            select_files(temp.path(), &NamePatterns::default(), &NamePatterns::default()).unwrap();
        assert_eq!(names(&selection), vec!["a.xml"]);
    }

    #[test]
    fn test_select_records_size() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "empty.xml", "");
        touch(temp.path(), "full.xml", "<x/>");

        let (include, exclude) = defaults();
        let selection = select_files(temp.path(), &include, &exclude).unwrap();
        let sizes: Vec<u64> = selection.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![0, 4]);
    }

    #[cfg(unix)]
    #[test]
    fn test_select_follows_symlinked_reports() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        touch(temp.path(), "a.xml", "<x/>");
        touch(outside.path(), "target.xml", "<testsuites/>");
        std::os::unix::fs::symlink(
            outside.path().join("target.xml"),
            temp.path().join("linked.xml"),
        )
        .unwrap();

        let (include, exclude) = defaults();
        let selection = select_files(temp.path(), &include, &exclude).unwrap();
        assert_eq!(names(&selection), vec!["a.xml", "linked.xml"]);
        // size comes from the link target
        assert_eq!(selection.iter().nth(1).unwrap().size, 13);
    }

    #[test]
    fn test_select_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let (include, exclude) = defaults();
        match select_files(&missing, &include, &exclude) {
            Err(Error::DirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected DirectoryNotFound error, got: {other:?}"),
        }
    }

    #[test]
    fn test_select_file_instead_of_directory() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.xml", "<x/>");

        let (include, exclude) = defaults();
        let result = select_files(&temp.path().join("a.xml"), &include, &exclude);
        assert!(matches!(result, Err(Error::DirectoryNotFound(_))));
    }
}
