//! Stagedash - a terminal dashboard for multi-stage project launches
//!
//! This library provides the core functionality for Stagedash, including:
//! - Data models for the board: stages, task items, stakeholders, metrics
//! - The progress engine: per-stage and overall completion percentages and
//!   status derivation
//! - Ring geometry for the circular overall-progress indicator
//! - Team filtering for the stakeholder directory
//! - Collapsible section state and the cosmetic metric jitter simulation
//! - CLI command parsing and rendering
//!
//! # Example
//!
//! ```no_run
//! use stagedash::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod config;
pub mod models;
pub mod progress;
pub mod filter;
pub mod ui;
pub mod cli;
