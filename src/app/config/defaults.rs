// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Feed**: Network request settings
//! - **Gallery**: Card grid layout

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of cards per gallery row.
pub const DEFAULT_COLUMNS: usize = 3;

/// Minimum number of cards per gallery row.
pub const MIN_COLUMNS: usize = 1;

/// Maximum number of cards per gallery row.
pub const MAX_COLUMNS: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_bounds() {
        assert!((MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&DEFAULT_TIMEOUT_SECS));
        assert!((MIN_COLUMNS..=MAX_COLUMNS).contains(&DEFAULT_COLUMNS));
    }
}
