//! Screen-level services.
//!
//! # Responsibility
//! - Orchestrate store calls behind user actions.
//! - Keep front ends decoupled from storage details.

pub mod list_controller;
