use super::state::{State, SystemSummary};
use super::units::Energy;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Force group {group} is not registered with the simulation")]
    UnknownForceGroup { group: usize },

    #[error("Simulation context is in an invalid state: {0}")]
    InvalidState(String),

    #[error("Simulation engine failure: {0}")]
    Engine(String),
}

/// Read-only queries a reporter needs from a live simulation context.
///
/// Implemented by the engine driving the simulation. None of these methods may
/// advance simulation time or otherwise mutate the context.
pub trait Simulation {
    /// Number of steps taken so far.
    fn current_step(&self) -> u64;

    /// Captures the state at the current step.
    fn state(&self) -> Result<State, SimulationError>;

    fn system_summary(&self) -> SystemSummary;

    /// Potential energy of the force terms registered under `group` alone.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::UnknownForceGroup`] when no force was
    /// registered under `group`, or an engine specific error if the context
    /// cannot be evaluated.
    fn group_potential_energy(&self, group: usize) -> Result<Energy, SimulationError>;
}

/// A simulation that can be advanced in time.
pub trait Dynamics: Simulation {
    fn step(&mut self, steps: u64) -> Result<(), SimulationError>;
}
