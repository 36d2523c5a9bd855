//! # Census Results Model
//!
//! Plain records that cross every boundary: enumeration engine ↔ aggregate
//! ↔ report serializer.
//!
//! Design rule: pure data — no I/O, no locking, no async. The enumeration
//! engine owns all mutation; these types only hold what it writes.

pub mod motif;
pub mod network;
pub mod participation;

pub use motif::{Motif, MotifId};
pub use network::NetworkType;
pub use participation::{EntityKind, LinkId, NodeId, Participation, RoleId};
