//! File-size pricing tiers
//!
//! Tiers label a charge for reporting. They never change the charged amount.

use std::fmt;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Pricing tier derived from an uploaded file size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingTier {
    /// Below 0.1 MB
    Tier1,
    /// 0.1 MB up to 20 MB
    Tier2,
    /// 20 MB up to 50 MB
    Tier3,
    /// 50 MB up to 100 MB
    Tier4,
    /// 100 MB and above
    Tier5,
}

impl PricingTier {
    /// Classify a size in bytes.
    ///
    /// Ranges are half-open on the upper end and checked in ascending order.
    /// Negative and NaN sizes are treated as zero bytes.
    pub fn classify(file_size_bytes: f64) -> Self {
        let bytes = if file_size_bytes.is_nan() || file_size_bytes < 0.0 {
            0.0
        } else {
            file_size_bytes
        };
        let size_mb = bytes / BYTES_PER_MB;

        if size_mb < 0.1 {
            PricingTier::Tier1
        } else if size_mb < 20.0 {
            PricingTier::Tier2
        } else if size_mb < 50.0 {
            PricingTier::Tier3
        } else if size_mb < 100.0 {
            PricingTier::Tier4
        } else {
            PricingTier::Tier5
        }
    }

    /// Classify an optional size; an absent size is zero bytes
    pub fn from_file_size(file_size_bytes: Option<f64>) -> Self {
        Self::classify(file_size_bytes.unwrap_or(0.0))
    }

    /// Human readable label attached to the charge
    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Tier1 => "Tier 1 (<100KB)",
            PricingTier::Tier2 => "Tier 2 (100KB-20MB)",
            PricingTier::Tier3 => "Tier 3 (20-50MB)",
            PricingTier::Tier4 => "Tier 4 (50-100MB)",
            PricingTier::Tier5 => "Tier 5 (>100MB)",
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
