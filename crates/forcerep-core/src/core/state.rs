use super::units::Energy;
use nalgebra::Vector3;

/// Periodic box vectors, in nanometres.
pub type BoxVectors = [Vector3<f64>; 3];

/// A snapshot of the simulation at one step, as handed to reporters when they fire.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub step: u64,
    /// Simulated time in picoseconds.
    pub time: f64,
    pub potential_energy: Energy,
    pub kinetic_energy: Energy,
    pub box_vectors: Option<BoxVectors>,
}

impl State {
    pub fn new(step: u64, time: f64, potential_energy: Energy, kinetic_energy: Energy) -> Self {
        Self {
            step,
            time,
            potential_energy,
            kinetic_energy,
            box_vectors: None,
        }
    }

    pub fn with_box_vectors(mut self, box_vectors: BoxVectors) -> Self {
        self.box_vectors = Some(box_vectors);
        self
    }

    /// Potential plus kinetic energy, in kJ/mol.
    pub fn total_energy(&self) -> f64 {
        self.potential_energy.in_kilojoules_per_mole()
            + self.kinetic_energy.in_kilojoules_per_mole()
    }

    /// Volume of the periodic box in nm³, if the state carries box vectors.
    pub fn box_volume(&self) -> Option<f64> {
        self.box_vectors
            .as_ref()
            .map(|[a, b, c]| a.dot(&b.cross(c)).abs())
    }
}

/// Per-system constants a reporter needs once, before its first row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSummary {
    pub degrees_of_freedom: usize,
    /// Total mass in daltons.
    pub total_mass: f64,
}

/// A distance constraint between two particles, by particle index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint(pub usize, pub usize);

impl SystemSummary {
    /// Derives the summary from raw particle data.
    ///
    /// Massless (virtual) particles contribute no degrees of freedom. A
    /// constraint removes one degree of freedom unless both of its particles are
    /// massless, and removing centre-of-mass motion removes three more.
    pub fn from_particles(
        masses: &[f64],
        constraints: &[Constraint],
        removes_com_motion: bool,
    ) -> Self {
        let is_massive = |index: usize| masses.get(index).is_some_and(|&m| m > 0.0);

        let particle_dof = 3 * masses.iter().filter(|&&m| m > 0.0).count();
        let constrained = constraints
            .iter()
            .filter(|Constraint(a, b)| is_massive(*a) || is_massive(*b))
            .count();
        let com_dof = if removes_com_motion { 3 } else { 0 };

        Self {
            degrees_of_freedom: particle_dof.saturating_sub(constrained + com_dof),
            total_mass: masses.iter().sum(),
        }
    }

    pub fn with_total_mass(mut self, total_mass: f64) -> Self {
        self.total_mass = total_mass;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resting_state() -> State {
        let zero = Energy::kilojoules_per_mole(0.0);
        State::new(0, 0.0, zero, zero)
    }

    #[test]
    fn total_energy_sums_potential_and_kinetic_in_kilojoules() {
        let state = State::new(
            10,
            0.02,
            Energy::kilojoules_per_mole(-100.0),
            Energy::kilocalories_per_mole(10.0),
        );
        assert!((state.total_energy() - (-100.0 + 41.84)).abs() < 1e-12);
    }

    #[test]
    fn box_volume_of_rectangular_box_is_product_of_edges() {
        let state = resting_state().with_box_vectors([
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
            Vector3::new(0.0, 0.0, 4.0),
        ]);
        assert_eq!(state.box_volume(), Some(24.0));
    }

    #[test]
    fn box_volume_of_triclinic_box_uses_triple_product() {
        let state = resting_state().with_box_vectors([
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(0.5, 0.5, 2.0),
        ]);
        assert!((state.box_volume().unwrap() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn box_volume_is_none_without_box_vectors() {
        let state = resting_state();
        assert_eq!(state.box_volume(), None);
    }

    #[test]
    fn from_particles_counts_three_dof_per_massive_particle() {
        let summary = SystemSummary::from_particles(&[12.0, 1.0, 1.0], &[], false);
        assert_eq!(summary.degrees_of_freedom, 9);
        assert_eq!(summary.total_mass, 14.0);
    }

    #[test]
    fn from_particles_skips_virtual_sites_and_removes_constraints_and_com() {
        let masses = [16.0, 1.0, 1.0, 0.0];
        let constraints = [Constraint(0, 1), Constraint(0, 2), Constraint(3, 3)];
        let summary = SystemSummary::from_particles(&masses, &constraints, true);
        assert_eq!(summary.degrees_of_freedom, 9 - 2 - 3);
    }

    #[test]
    fn from_particles_never_underflows() {
        let summary = SystemSummary::from_particles(&[1.0], &[Constraint(0, 0)], true);
        assert_eq!(summary.degrees_of_freedom, 0);
    }
}
