//! # mfinder-rs — Network Motif Census Results
//!
//! A clean Rust reimplementation of the mfinder/pymfinder results model:
//! the per-network accumulator for motif census statistics and its
//! deterministic whitespace-delimited report format.
//!
//! ## Design Principles
//!
//! 1. **Clean DTOs**: `Motif` and `Participation` are plain records — the
//!    enumeration engine writes their fields directly
//! 2. **Ordered by construction**: every mapping is a `BTreeMap`, so report
//!    row and column order falls out of key order
//! 3. **Injected lookup**: the literature-id table is passed into `render`,
//!    never read as ambient global state
//! 4. **Render owns nothing**: serialization is a pure read of the aggregate
//!
//! ## Quick Start
//!
//! ```rust
//! use mfinder_rs::{literature, MotifId, NetworkStats, NetworkType};
//!
//! let mut stats = NetworkStats::new(3, NetworkType::Directed);
//! stats.add_motif(MotifId(12));
//!
//! // The enumeration engine fills the statistics in place.
//! let motif = stats.motif_mut(MotifId(12)).unwrap();
//! motif.real_count = Some(5);
//! motif.random_mean = Some(2.0);
//! motif.random_sd = Some(1.0);
//! motif.real_zscore = Some(3.0);
//! motif.mean_weight = Some(0.0);
//! motif.sd_weight = Some(0.0);
//!
//! let report = stats.render(literature::stouffer_ids())?;
//! assert_eq!(
//!     report,
//!     "motif real rand srand zscore weight-mean weight-sd\n\
//!      12 5 2.000 1.000 3.000 0.000 0.000\n"
//! );
//! # Ok::<(), mfinder_rs::Error>(())
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod literature;
pub mod model;
pub mod report;
pub mod stats;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    EntityKind, LinkId, Motif, MotifId, NetworkType, NodeId, Participation, RoleId,
};

// ============================================================================
// Re-exports: Aggregate + report
// ============================================================================

pub use literature::LiteratureTable;
pub use report::Table;
pub use stats::NetworkStats;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A motif reached `render` with a required statistic still unset.
    /// The census must populate every rendered field before serialization.
    #[error("incomplete statistics for motif {motif}: {field} is unset")]
    IncompleteStatistics {
        motif: MotifId,
        field: &'static str,
    },

    /// A node or link carries a motif/role key set that differs from the
    /// representative record of its kind, so no shared column schema exists.
    #[error("participation schema mismatch: {kind} {key} differs from the representative key set")]
    SchemaMismatch { kind: EntityKind, key: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
