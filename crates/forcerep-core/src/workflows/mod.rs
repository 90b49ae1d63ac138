//! # Workflows Module
//!
//! High-level entry points that drive an external simulation and its reporters.
//!
//! - **Run** ([`run`]) - steps a [`crate::core::simulation::Dynamics`] engine and
//!   fires every attached reporter on its own cadence

pub mod run;
