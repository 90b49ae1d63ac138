use super::error::ReportError;
use super::fields::{ReportFields, ReportValue};
use super::sink::OutputSink;
use super::state_data::{StateDataFields, StateDataOptions};
use super::writer::PeriodicReporter;
use crate::core::labels::ForceLabel;
use crate::core::simulation::Simulation;
use crate::core::state::State;
use crate::core::units::EnergyUnit;
use tracing::trace;

/// Extends a base column set with one potential energy column per force group.
///
/// The label at position `i` names the column holding the energy of force
/// group `i`, reported in kJ/mol. Everything else, including the base columns
/// and their order, is delegated to `base` unchanged.
#[derive(Debug, Clone)]
pub struct ForceGroupFields<F = StateDataFields> {
    base: F,
    labels: Vec<ForceLabel>,
}

impl<F: ReportFields> ForceGroupFields<F> {
    pub fn new(base: F, labels: Vec<ForceLabel>) -> Self {
        Self { base, labels }
    }

    pub fn base(&self) -> &F {
        &self.base
    }

    pub fn labels(&self) -> &[ForceLabel] {
        &self.labels
    }
}

impl<F: ReportFields> ReportFields for ForceGroupFields<F> {
    fn initialize(&mut self, simulation: &dyn Simulation) -> Result<(), ReportError> {
        self.base.initialize(simulation)
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = self.base.headers();
        headers.extend(self.labels.iter().map(ToString::to_string));
        headers
    }

    fn values(
        &self,
        simulation: &dyn Simulation,
        state: &State,
    ) -> Result<Vec<ReportValue>, ReportError> {
        let mut values = self.base.values(simulation, state)?;
        values.reserve(self.labels.len());

        for (group, label) in self.labels.iter().enumerate() {
            let energy = simulation
                .group_potential_energy(group)?
                .value_in(EnergyUnit::KilojoulePerMole);
            trace!(group, %label, energy, "Queried force group energy.");
            values.push(ReportValue::Float(energy));
        }

        Ok(values)
    }
}

/// A state data reporter with trailing per-force-group energy columns.
pub type ForceGroupReporter = PeriodicReporter<ForceGroupFields<StateDataFields>>;

impl ForceGroupReporter {
    /// Builds the base state data reporter from `options` and attaches `labels`.
    ///
    /// An empty label list yields output identical to a plain state data
    /// reporter with the same options.
    ///
    /// # Errors
    ///
    /// Fails exactly where the base reporter fails: a zero interval, invalid
    /// options, or a sink that cannot be opened.
    pub fn new<L>(
        sink: impl Into<OutputSink>,
        report_interval: u64,
        labels: impl IntoIterator<Item = L>,
        options: StateDataOptions,
    ) -> Result<Self, ReportError>
    where
        L: Into<ForceLabel>,
    {
        let separator = options.separator_byte();
        let append = options.append;
        let fields = ForceGroupFields::new(
            StateDataFields::new(options)?,
            labels.into_iter().map(Into::into).collect(),
        );
        PeriodicReporter::with_fields(sink.into(), report_interval, fields, separator, append)
    }

    pub fn labels(&self) -> &[ForceLabel] {
        self.fields().labels()
    }
}
