//! Persistence boundary for checklist items.
//!
//! # Responsibility
//! - Define the `ItemStore` contract the list controller talks to.
//! - Isolate SQLite query details from controller orchestration.
//!
//! # Invariants
//! - Store APIs return semantic errors (`NotFound`, `InvalidData`) in
//!   addition to DB transport errors.

pub mod item_repo;
