//! Collision-free suite naming

use std::collections::HashSet;

/// Names already placed in the envelope during one merge run
#[derive(Debug, Clone, Default)]
pub struct SuiteNameRegistry {
    used: HashSet<String>,
}

impl SuiteNameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is already taken
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Claim `name`, or the first free `name_N` with N counting up from 2.
    ///
    /// The returned name is recorded as taken.
    pub fn claim(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut suffix: u64 = 2;
        while self.contains(&candidate) {
            candidate = format!("{name}_{suffix}");
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
