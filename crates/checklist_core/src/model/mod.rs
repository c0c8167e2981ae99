//! Domain model for the checklist.
//!
//! # Responsibility
//! - Define the single persisted entity, [`item::Item`].
//! - Own input-time title validation.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`, never by list position.

pub mod item;
