use crate::core::simulation::SimulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid reporter configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write delimited row: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("Energy at step {step} is not finite: {value}")]
    NonFiniteEnergy { step: u64, value: f64 },

    #[error("Box volume requested but the state has no periodic box vectors")]
    MissingBoxVectors,

    #[error("Temperature requested but the system has no degrees of freedom")]
    NoDegreesOfFreedom,

    #[error("Report has no column named '{0}'")]
    UnknownColumn(String),

    #[error("Malformed report table at line {line}: {message}")]
    Table { line: usize, message: String },
}
