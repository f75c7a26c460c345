//! Diagnostics
//!
//! In-memory log of failures the page does not show to the user.

use chrono::{DateTime, Local};
use std::sync::Arc;

use crate::constants::DIAGNOSTICS_CAPACITY;
use crate::helpers::BoundedDeque;

/// Where a diagnostic came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSource {
    CatalogFetch,
    /// A category of a loaded catalog that could not be parsed
    CatalogCategory,
    Settings,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub at: DateTime<Local>,
    pub source: DiagnosticSource,
    pub message: Arc<str>,
}

#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: BoundedDeque<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            entries: BoundedDeque::new(DIAGNOSTICS_CAPACITY),
        }
    }
}

impl Diagnostics {
    pub fn record(&mut self, source: DiagnosticSource, message: impl Into<Arc<str>>) {
        let entry = Diagnostic {
            at: Local::now(),
            source,
            message: message.into(),
        };
        tracing::debug!(
            at = %entry.at.format("%H:%M:%S%.3f"),
            source = ?entry.source,
            message = %entry.message,
            "Diagnostic recorded"
        );
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Diagnostic> {
        self.entries.last()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter_rev()
    }

    pub fn count(&self, source: DiagnosticSource) -> usize {
        self.entries.iter().filter(|d| d.source == source).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_newest_first() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record(DiagnosticSource::Settings, "first");
        diagnostics.record(DiagnosticSource::CatalogFetch, "second");

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.to_string()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(diagnostics.count(DiagnosticSource::CatalogFetch), 1);
    }

    #[test]
    fn entries_are_timestamped_in_order() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record(DiagnosticSource::Settings, "first");
        diagnostics.record(DiagnosticSource::Settings, "second");

        let stamps: Vec<_> = diagnostics.iter().map(|d| d.at).collect();
        assert!(stamps[0] >= stamps[1]);
    }

    #[test]
    fn capacity_is_bounded() {
        let mut diagnostics = Diagnostics::default();
        for i in 0..(DIAGNOSTICS_CAPACITY + 10) {
            diagnostics.record(DiagnosticSource::CatalogFetch, format!("failure {i}"));
        }
        assert_eq!(diagnostics.len(), DIAGNOSTICS_CAPACITY);
        assert_eq!(
            diagnostics.latest().map(|d| d.message.to_string()),
            Some(format!("failure {}", DIAGNOSTICS_CAPACITY + 9))
        );
    }
}
