//! Pure projections consumed by presentation.
//!
//! # Responsibility
//! - Order notes for list display.
//! - Partition checklists into active/completed groups.
//! - Derive card previews and readable color pairings.
//!
//! # Invariants
//! - Every projection is side-effect free and never fails; malformed
//!   LIST bodies project as empty checklists.
//! - All orderings are stable.

pub mod card;
pub mod ordering;
