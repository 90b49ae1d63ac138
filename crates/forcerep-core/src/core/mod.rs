//! # Core Module
//!
//! Domain types shared by every reporter: molar energies with units, force
//! group labels, state snapshots and the traits through which an external
//! simulation engine is queried and advanced.
//!
//! - **Units** ([`units`]) - [`units::Energy`] values tagged with their unit and the
//!   physical constants used when deriving temperature and density
//! - **Labels** ([`labels`]) - display identifiers for tracked force groups
//! - **State** ([`state`]) - per-step snapshots and per-system constants
//! - **Simulation** ([`simulation`]) - the engine capabilities consumed by reporters

pub mod labels;
pub mod simulation;
pub mod state;
pub mod units;
