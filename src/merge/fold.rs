//! Folding parsed reports into one envelope suite
//!
//! Reports are processed strictly in selection order: suite ordering and
//! collision suffixes are both defined by that order.

use super::names::SuiteNameRegistry;
use super::{TESTSUITE, TESTSUITES};
use crate::error::{Error, Result};
use crate::report::parse_report;
use crate::select::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, NamePatterns};
use crate::types::{MergeStats, ReportFile, SuiteTotals};
use crate::xml::{Document, NodeId};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do when two suites share a name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateNames {
    /// Rename later suites to `name_2`, `name_3`, ...
    #[default]
    Suffix,
    /// Keep every name verbatim, duplicates included
    Keep,
}

/// Options for a full select → merge → write run
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// File name patterns to include
    pub include: NamePatterns,
    /// File name patterns to leave out, even if included
    pub exclude: NamePatterns,
    /// Collision policy for suite names
    pub duplicate_names: DuplicateNames,
}

impl MergeOptions {
    /// `*.xml`, ignoring `result.xml`, suffixing duplicate names
    pub fn defaults() -> Result<Self> {
        Ok(Self {
            include: NamePatterns::parse_list(DEFAULT_INCLUDE)?,
            exclude: NamePatterns::parse_list(DEFAULT_EXCLUDE)?,
            duplicate_names: DuplicateNames::Suffix,
        })
    }
}

/// Result of a merge run
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// `<testsuites>` holding the single envelope suite
    pub document: Document,
    /// Counts gathered while merging
    pub stats: MergeStats,
}

/// Accumulates suites from many reports into one output document.
///
/// One instance per merge run; the name registry lives and dies with it.
#[derive(Debug)]
pub struct SuiteMerger {
    doc: Document,
    envelope: NodeId,
    registry: Option<SuiteNameRegistry>,
    totals: SuiteTotals,
    suites: usize,
    renamed: usize,
}

impl SuiteMerger {
    /// Start an empty `<testsuites><testsuite/></testsuites>` document
    pub fn new(duplicate_names: DuplicateNames) -> Self {
        let mut doc = Document::new();
        let root = doc.create_element(TESTSUITES);
        doc.set_root(root);
        let envelope = doc.create_element(TESTSUITE);
        doc.append_child(root, envelope);

        let registry = match duplicate_names {
            DuplicateNames::Suffix => Some(SuiteNameRegistry::new()),
            DuplicateNames::Keep => None,
        };

        Self {
            doc,
            envelope,
            registry,
            totals: SuiteTotals::default(),
            suites: 0,
            renamed: 0,
        }
    }

    /// Fold every `<testsuite>` directly under the report's `<testsuites>`
    /// root into the envelope. Returns how many suites were taken.
    ///
    /// Suites nested deeper are copied along with their parent and are not
    /// counted or renamed on their own.
    pub fn merge_document(&mut self, source: &Document) -> usize {
        let Some(root) = source.root() else {
            return 0;
        };
        let root_name = source.element(root).map_or("", |e| e.name.as_str());
        if root_name != TESTSUITES {
            warn!(root = root_name, "report root is not <testsuites>, nothing merged");
            return 0;
        }

        let suites: Vec<NodeId> = source.child_elements(root, TESTSUITE).collect();
        for &suite in &suites {
            self.merge_suite(source, suite);
        }
        suites.len()
    }

    fn merge_suite(&mut self, source: &Document, suite: NodeId) {
        let Some(original) = source.element(suite) else {
            return;
        };
        let original_name = original.attribute("name").unwrap_or_default();
        let resolved = self.registry.as_mut().map(|r| r.claim(original_name));

        // counters come from the source element, never the renamed copy
        self.totals.add_suite(original);

        let copy = self.doc.import(source, suite);
        if let Some(name) = resolved {
            if name != original_name {
                debug!(from = original_name, to = %name, "renamed duplicate suite");
                self.renamed += 1;
            }
            if let Some(element) = self.doc.element_mut(copy) {
                element.set_attribute("name", name);
            }
        }
        self.doc.append_child(self.envelope, copy);
        self.suites += 1;
    }

    /// Suites appended so far
    pub const fn suites(&self) -> usize {
        self.suites
    }

    /// Suites renamed so far
    pub const fn renamed(&self) -> usize {
        self.renamed
    }

    /// Running totals
    pub const fn totals(&self) -> &SuiteTotals {
        &self.totals
    }

    /// Name the envelope, stamp the totals on it and hand back the document
    pub fn finish(mut self, envelope_name: &str) -> (Document, SuiteTotals) {
        let totals = self.totals;
        if let Some(envelope) = self.doc.element_mut(self.envelope) {
            envelope.set_attribute("name", envelope_name);
            totals.apply_to(envelope);
        }
        (self.doc, totals)
    }
}

/// Merge `files` in order into one document.
///
/// The envelope is named after the canonical form of `directory`. Empty
/// files are skipped; the first malformed file aborts the run.
pub fn merge_reports<'a, I>(
    directory: &Path,
    files: I,
    duplicate_names: DuplicateNames,
) -> Result<MergeOutcome>
where
    I: IntoIterator<Item = &'a ReportFile>,
{
    let canonical = fs::canonicalize(directory)
        .map_err(|_| Error::DirectoryNotFound(directory.to_path_buf()))?;

    let mut merger = SuiteMerger::new(duplicate_names);
    let mut stats = MergeStats::default();

    for file in files {
        stats.files_seen += 1;
        let Some(doc) = parse_report(file)? else {
            stats.files_skipped += 1;
            continue;
        };
        let taken = merger.merge_document(&doc);
        debug!(path = %file.path.display(), suites = taken, "merged report");
        stats.files_merged += 1;
    }

    stats.suites = merger.suites();
    stats.renamed = merger.renamed();
    let (document, totals) = merger.finish(&canonical.to_string_lossy());
    stats.totals = totals;

    info!(
        files = stats.files_merged,
        skipped = stats.files_skipped,
        suites = stats.suites,
        tests = totals.tests,
        failures = totals.failures,
        errors = totals.errors,
        "merge complete"
    );

    Ok(MergeOutcome { document, stats })
}
