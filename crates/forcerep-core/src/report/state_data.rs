use super::error::ReportError;
use super::fields::{ReportFields, ReportValue};
use crate::core::simulation::Simulation;
use crate::core::state::{State, SystemSummary};
use crate::core::units::{DALTON_PER_NM3_IN_G_PER_ML, MOLAR_GAS_CONSTANT};
use serde::Deserialize;

/// Selects the standard columns of a state data report and how rows are written.
///
/// Every column is off by default. Columns always appear in a fixed order
/// (progress, step, time, energies, temperature, volume, density) whatever
/// order they were enabled in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct StateDataOptions {
    pub step: bool,
    pub time: bool,
    pub potential_energy: bool,
    pub kinetic_energy: bool,
    pub total_energy: bool,
    pub temperature: bool,
    pub volume: bool,
    pub density: bool,
    pub progress: bool,
    pub separator: char,
    /// Overrides the total system mass (daltons) used for density.
    pub system_mass: Option<f64>,
    /// Length of the whole run, required by the progress column.
    pub total_steps: Option<u64>,
    /// Append to an existing output instead of truncating it; no header is written.
    pub append: bool,
}

impl Default for StateDataOptions {
    fn default() -> Self {
        Self {
            step: false,
            time: false,
            potential_energy: false,
            kinetic_energy: false,
            total_energy: false,
            temperature: false,
            volume: false,
            density: false,
            progress: false,
            separator: ',',
            system_mass: None,
            total_steps: None,
            append: false,
        }
    }
}

impl StateDataOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, enabled: bool) -> Self {
        self.step = enabled;
        self
    }
    pub fn time(mut self, enabled: bool) -> Self {
        self.time = enabled;
        self
    }
    pub fn potential_energy(mut self, enabled: bool) -> Self {
        self.potential_energy = enabled;
        self
    }
    pub fn kinetic_energy(mut self, enabled: bool) -> Self {
        self.kinetic_energy = enabled;
        self
    }
    pub fn total_energy(mut self, enabled: bool) -> Self {
        self.total_energy = enabled;
        self
    }
    pub fn temperature(mut self, enabled: bool) -> Self {
        self.temperature = enabled;
        self
    }
    pub fn volume(mut self, enabled: bool) -> Self {
        self.volume = enabled;
        self
    }
    pub fn density(mut self, enabled: bool) -> Self {
        self.density = enabled;
        self
    }
    pub fn progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
    pub fn system_mass(mut self, daltons: f64) -> Self {
        self.system_mass = Some(daltons);
        self
    }
    pub fn total_steps(mut self, steps: u64) -> Self {
        self.total_steps = Some(steps);
        self
    }
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.separator.is_ascii() {
            return Err(ReportError::Config(format!(
                "separator {:?} is not a single ASCII character",
                self.separator
            )));
        }
        if self.progress && self.total_steps.is_none() {
            return Err(ReportError::Config(
                "reporting progress requires total_steps".to_string(),
            ));
        }
        if let Some(mass) = self.system_mass {
            if !(mass.is_finite() && mass > 0.0) {
                return Err(ReportError::Config(format!(
                    "system mass must be positive, got {mass}"
                )));
            }
        }
        Ok(())
    }

    /// The separator as a single byte. Only meaningful after [`Self::validate`].
    pub(crate) fn separator_byte(&self) -> u8 {
        self.separator as u8
    }
}

/// The standard column set: step counters, energies and thermodynamic observables.
#[derive(Debug, Clone)]
pub struct StateDataFields {
    options: StateDataOptions,
    summary: Option<SystemSummary>,
}

impl StateDataFields {
    pub fn new(options: StateDataOptions) -> Result<Self, ReportError> {
        options.validate()?;
        Ok(Self {
            options,
            summary: None,
        })
    }

    pub fn options(&self) -> &StateDataOptions {
        &self.options
    }

    fn resolve_summary(&self, simulation: &dyn Simulation) -> SystemSummary {
        let summary = simulation.system_summary();
        match self.options.system_mass {
            Some(mass) => summary.with_total_mass(mass),
            None => summary,
        }
    }

    fn temperature(summary: &SystemSummary, state: &State) -> Result<f64, ReportError> {
        if summary.degrees_of_freedom == 0 {
            return Err(ReportError::NoDegreesOfFreedom);
        }
        let kinetic = state.kinetic_energy.in_kilojoules_per_mole();
        Ok(2.0 * kinetic / (summary.degrees_of_freedom as f64 * MOLAR_GAS_CONSTANT))
    }
}

impl ReportFields for StateDataFields {
    fn initialize(&mut self, simulation: &dyn Simulation) -> Result<(), ReportError> {
        self.summary = Some(self.resolve_summary(simulation));
        Ok(())
    }

    fn headers(&self) -> Vec<String> {
        let o = &self.options;
        [
            (o.progress, "Progress (%)"),
            (o.step, "Step"),
            (o.time, "Time (ps)"),
            (o.potential_energy, "Potential Energy (kJ/mole)"),
            (o.kinetic_energy, "Kinetic Energy (kJ/mole)"),
            (o.total_energy, "Total Energy (kJ/mole)"),
            (o.temperature, "Temperature (K)"),
            (o.volume, "Box Volume (nm^3)"),
            (o.density, "Density (g/mL)"),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, header)| header.to_string())
        .collect()
    }

    fn values(
        &self,
        simulation: &dyn Simulation,
        state: &State,
    ) -> Result<Vec<ReportValue>, ReportError> {
        let o = &self.options;
        let summary = self
            .summary
            .unwrap_or_else(|| self.resolve_summary(simulation));
        let mut values: Vec<ReportValue> = Vec::new();

        if o.progress {
            // validate() guarantees total_steps is present whenever progress is on.
            let total = o.total_steps.unwrap_or(0).max(1);
            let percent = 100.0 * state.step as f64 / total as f64;
            values.push(ReportValue::Text(format!("{percent:.1}%")));
        }
        if o.step {
            values.push(ReportValue::Integer(state.step));
        }
        if o.time {
            values.push(ReportValue::Float(state.time));
        }
        if o.potential_energy {
            values.push(state.potential_energy.in_kilojoules_per_mole().into());
        }
        if o.kinetic_energy {
            values.push(state.kinetic_energy.in_kilojoules_per_mole().into());
        }
        if o.total_energy {
            values.push(state.total_energy().into());
        }
        if o.temperature {
            values.push(Self::temperature(&summary, state)?.into());
        }
        if o.volume || o.density {
            let volume = state.box_volume().ok_or(ReportError::MissingBoxVectors)?;
            if o.volume {
                values.push(volume.into());
            }
            if o.density {
                values.push((summary.total_mass / volume * DALTON_PER_NM3_IN_G_PER_ML).into());
            }
        }

        Ok(values)
    }
}
