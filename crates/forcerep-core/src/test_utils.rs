use crate::core::simulation::{Dynamics, Simulation, SimulationError};
use crate::core::state::{BoxVectors, State, SystemSummary};
use crate::core::units::Energy;
use nalgebra::Vector3;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A scripted engine with fixed per-group energies.
#[derive(Debug, Clone)]
pub struct FakeSimulation {
    pub step: u64,
    pub step_size_ps: f64,
    pub group_energies: Vec<Energy>,
    pub kinetic_energy: Energy,
    pub summary: SystemSummary,
    pub box_vectors: Option<BoxVectors>,
    pub step_calls: Vec<u64>,
}

impl FakeSimulation {
    pub fn new(group_energies: Vec<Energy>) -> Self {
        Self {
            step: 0,
            step_size_ps: 0.002,
            group_energies,
            kinetic_energy: Energy::kilojoules_per_mole(0.0),
            summary: SystemSummary {
                degrees_of_freedom: 0,
                total_mass: 0.0,
            },
            box_vectors: None,
            step_calls: Vec::new(),
        }
    }

    pub fn with_kinetic_energy(mut self, energy: Energy) -> Self {
        self.kinetic_energy = energy;
        self
    }

    pub fn with_summary(mut self, summary: SystemSummary) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_cubic_box(mut self, edge_nm: f64) -> Self {
        self.box_vectors = Some([
            Vector3::new(edge_nm, 0.0, 0.0),
            Vector3::new(0.0, edge_nm, 0.0),
            Vector3::new(0.0, 0.0, edge_nm),
        ]);
        self
    }

    pub fn at_step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    fn total_potential(&self) -> Energy {
        Energy::kilojoules_per_mole(
            self.group_energies
                .iter()
                .map(Energy::in_kilojoules_per_mole)
                .sum(),
        )
    }
}

impl Simulation for FakeSimulation {
    fn current_step(&self) -> u64 {
        self.step
    }

    fn state(&self) -> Result<State, SimulationError> {
        let mut state = State::new(
            self.step,
            self.step as f64 * self.step_size_ps,
            self.total_potential(),
            self.kinetic_energy,
        );
        state.box_vectors = self.box_vectors;
        Ok(state)
    }

    fn system_summary(&self) -> SystemSummary {
        self.summary
    }

    fn group_potential_energy(&self, group: usize) -> Result<Energy, SimulationError> {
        self.group_energies
            .get(group)
            .copied()
            .ok_or(SimulationError::UnknownForceGroup { group })
    }
}

impl Dynamics for FakeSimulation {
    fn step(&mut self, steps: u64) -> Result<(), SimulationError> {
        self.step_calls.push(steps);
        self.step += steps;
        Ok(())
    }
}

/// An in-memory sink whose contents stay readable after the reporter owning it is done.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
