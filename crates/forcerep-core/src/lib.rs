//! # forcerep
//!
//! Periodic state reporting for molecular dynamics simulations, with one extra
//! potential energy column per tracked force group.
//!
//! The simulation engine itself is not part of this crate. Engines expose the
//! few read-only queries reporting needs through [`crate::core::simulation::Simulation`]
//! (and [`crate::core::simulation::Dynamics`] to be stepped by the run loop); reporters
//! turn those queries into delimited text rows.
//!
//! - [`core`]: units, force labels, state snapshots and the engine traits.
//! - [`report`]: the periodic reporter, the standard state data columns and
//!   the force group extension.
//! - [`workflows`]: the stepping loop that fires reporters at their intervals.

pub mod core;
pub mod report;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_utils;
