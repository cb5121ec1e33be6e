//! Summing suite counters

use crate::types::SuiteTotals;
use crate::xml::Element;

/// Fractional digits kept when rendering `time`
const TIME_PRECISION: usize = 9;

/// Interpret an integer counter attribute.
///
/// Decimal text such as `"3.0"` contributes its integer part; anything that
/// is not a finite number contributes 0.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_count(value: &str) -> i64 {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return n;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => n.trunc() as i64,
        _ => 0,
    }
}

/// Interpret a `time` attribute; non-numeric text contributes 0.
pub fn parse_time(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Render seconds without float noise: `3.75`, `0`, `0.3`
pub fn format_time(seconds: f64) -> String {
    let text = format!("{seconds:.prec$}", prec = TIME_PRECISION);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

impl SuiteTotals {
    /// Add the counters present on a `<testsuite>`; absent ones add nothing.
    ///
    /// Integer counters saturate at `i64::MAX` / `i64::MIN`.
    pub fn add_suite(&mut self, suite: &Element) {
        let count = |key: &str| suite.attribute(key).map_or(0, parse_count);
        self.tests = self.tests.saturating_add(count("tests"));
        self.assertions = self.assertions.saturating_add(count("assertions"));
        self.failures = self.failures.saturating_add(count("failures"));
        self.errors = self.errors.saturating_add(count("errors"));
        self.time += suite.attribute("time").map_or(0.0, parse_time);
    }

    /// Write the totals onto an element as attributes
    pub fn apply_to(&self, element: &mut Element) {
        element.set_attribute("tests", self.tests.to_string());
        element.set_attribute("assertions", self.assertions.to_string());
        element.set_attribute("failures", self.failures.to_string());
        element.set_attribute("errors", self.errors.to_string());
        element.set_attribute("time", format_time(self.time));
    }
}
