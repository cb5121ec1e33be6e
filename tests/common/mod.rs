//! Shared fixtures for junit-merge tests

#![allow(dead_code)]

use junit_merge::xml::{Document, NodeId};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory of report files
pub struct ReportDir {
    temp: TempDir,
}

impl ReportDir {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `content` to `name`, creating subdirectories as needed
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, content).expect("write report");
        path
    }

    pub fn write_empty(&self, name: &str) -> PathBuf {
        self.write(name, "")
    }

    pub fn canonical(&self) -> String {
        fs::canonicalize(self.path())
            .expect("canonicalize")
            .to_string_lossy()
            .into_owned()
    }
}

/// A `<testsuites>` report from `(name, attributes)` pairs
pub fn report(suites: &[(&str, &str)]) -> String {
    let body: String = suites
        .iter()
        .map(|(name, attrs)| format!("  <testsuite name=\"{name}\" {attrs}/>\n"))
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites>\n{body}</testsuites>\n")
}

/// Parsed merged output
pub struct Merged {
    pub doc: Document,
    pub envelope: NodeId,
}

impl Merged {
    pub fn parse(xml: &str) -> Self {
        let doc = Document::parse_str(xml).expect("merged output parses");
        let root = doc.root().expect("root");
        assert_eq!(doc.element(root).unwrap().name, "testsuites");
        let children = doc.children(root);
        assert_eq!(children.len(), 1, "exactly one envelope suite");
        let envelope = children[0];
        Self { doc, envelope }
    }

    pub fn read(path: &Path) -> Self {
        Self::parse(&fs::read_to_string(path).expect("read merged output"))
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.doc.element(self.envelope).unwrap().attribute(key)
    }

    pub fn suite_names(&self) -> Vec<String> {
        self.doc
            .child_elements(self.envelope, "testsuite")
            .map(|id| {
                self.doc
                    .element(id)
                    .unwrap()
                    .attribute("name")
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }
}
