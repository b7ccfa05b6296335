//! Per-batch success/failure accounting.

/// Running totals for one batch run.
///
/// Every asset resolves to a single boolean outcome; the batch loop
/// records each one and keeps going. Nothing here aborts a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Assets generated and downloaded successfully.
    pub successful: u32,
    /// Assets that failed at any stage (submit, timeout, empty output, download).
    pub failed: u32,
}

impl BatchSummary {
    /// Record one asset outcome.
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Total number of assets attempted.
    pub fn total(&self) -> u32 {
        self.successful + self.failed
    }

    /// True when every attempted asset succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Fold another summary into this one (used when running several catalogs).
    pub fn merge(&mut self, other: BatchSummary) {
        self.successful += other.successful;
        self.failed += other.failed;
    }
}
