//! # Report Module
//!
//! Periodic, tabular reporting of simulation state.
//!
//! ## Overview
//!
//! A reporter is split into two seams. [`writer::PeriodicReporter`] owns the
//! output sink and the firing cadence, writes the header once and serializes
//! rows. A [`fields::ReportFields`] implementation decides which columns a row
//! holds. The standard columns come from [`state_data::StateDataFields`];
//! [`force_groups::ForceGroupFields`] wraps any column set and appends one
//! potential energy column per tracked force group.
//!
//! - [`state_data`] - step, time, energies, temperature, volume, density, progress
//! - [`force_groups`] - per-force-group potential energy columns
//! - [`writer`] - cadence, header and row output
//! - [`sink`] - files and open handles that rows are written to
//! - [`config`] - TOML configuration of a force group reporter
//! - [`table`] - reading written reports back
//!
//! ## Usage
//!
//! ```ignore
//! use forcerep::report::{ForceGroupReporter, StateDataOptions};
//!
//! let options = StateDataOptions::new().step(true).potential_energy(true);
//! let mut reporter = ForceGroupReporter::new("energies.csv", 100, ["bonds", "angles"], options)?;
//! forcerep::workflows::run::run(&mut simulation, &mut [&mut reporter], 10_000)?;
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod force_groups;
pub mod sink;
pub mod state_data;
pub mod table;
pub mod writer;

pub use error::ReportError;
pub use fields::{ReportFields, ReportValue};
pub use force_groups::{ForceGroupFields, ForceGroupReporter};
pub use sink::OutputSink;
pub use state_data::{StateDataFields, StateDataOptions};
pub use writer::{PeriodicReporter, Reporter, StateDataReporter};
