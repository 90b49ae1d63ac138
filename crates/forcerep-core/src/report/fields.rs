use super::error::ReportError;
use crate::core::simulation::Simulation;
use crate::core::state::State;
use std::fmt;

/// One scalar field of a report row.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl ReportValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ReportValue::Integer(v) => Some(*v as f64),
            ReportValue::Float(v) => Some(*v),
            ReportValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Integer(v) => write!(f, "{v}"),
            // Debug keeps the decimal point on integral values ("1.0", not "1").
            ReportValue::Float(v) => write!(f, "{v:?}"),
            ReportValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<u64> for ReportValue {
    fn from(value: u64) -> Self {
        ReportValue::Integer(value)
    }
}

impl From<f64> for ReportValue {
    fn from(value: f64) -> Self {
        ReportValue::Float(value)
    }
}

/// The column set of a periodic reporter.
///
/// The reporter decides *when* to fire and *where* rows go; a `ReportFields`
/// implementation decides *what* each row contains. Implementations must keep
/// `headers().len()` equal to the length of every row returned by `values`.
pub trait ReportFields {
    /// Called once, right before the first header or row is produced.
    fn initialize(&mut self, _simulation: &dyn Simulation) -> Result<(), ReportError> {
        Ok(())
    }

    fn headers(&self) -> Vec<String>;

    /// Computes one row for the given state.
    ///
    /// # Errors
    ///
    /// Any failure aborts the whole row; callers never see a partial one.
    fn values(
        &self,
        simulation: &dyn Simulation,
        state: &State,
    ) -> Result<Vec<ReportValue>, ReportError>;
}
