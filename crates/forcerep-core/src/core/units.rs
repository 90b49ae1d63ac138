use std::fmt;

/// Molar gas constant in kJ/(mol·K).
pub const MOLAR_GAS_CONSTANT: f64 = 0.008_314_462_618;

/// Mass density of one dalton per cubic nanometre, expressed in g/mL.
pub const DALTON_PER_NM3_IN_G_PER_ML: f64 = 1.660_539_066_60;

const KCAL_PER_MOL_IN_KJ_PER_MOL: f64 = 4.184;
const ELECTRON_VOLT_IN_KJ_PER_MOL: f64 = 96.485_332_12;
const HARTREE_IN_KJ_PER_MOL: f64 = 2_625.499_639_479_4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    KilojoulePerMole,
    KilocaloriePerMole,
    ElectronVolt,
    Hartree,
    /// Energy expressed as a temperature, `E = R·T`.
    Kelvin,
}

impl EnergyUnit {
    /// Size of one unit of `self`, in kJ/mol.
    #[inline]
    pub fn in_kilojoules_per_mole(self) -> f64 {
        match self {
            EnergyUnit::KilojoulePerMole => 1.0,
            EnergyUnit::KilocaloriePerMole => KCAL_PER_MOL_IN_KJ_PER_MOL,
            EnergyUnit::ElectronVolt => ELECTRON_VOLT_IN_KJ_PER_MOL,
            EnergyUnit::Hartree => HARTREE_IN_KJ_PER_MOL,
            EnergyUnit::Kelvin => MOLAR_GAS_CONSTANT,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::KilojoulePerMole => "kJ/mole",
            EnergyUnit::KilocaloriePerMole => "kcal/mole",
            EnergyUnit::ElectronVolt => "eV",
            EnergyUnit::Hartree => "Eh",
            EnergyUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A molar energy tagged with the unit it was produced in.
///
/// Simulation engines are free to report energies in whatever unit they work
/// in internally; consumers call [`Energy::value_in`] to obtain a plain scalar
/// in the unit they need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    value: f64,
    unit: EnergyUnit,
}

impl Energy {
    pub fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    pub fn kilojoules_per_mole(value: f64) -> Self {
        Self::new(value, EnergyUnit::KilojoulePerMole)
    }

    pub fn kilocalories_per_mole(value: f64) -> Self {
        Self::new(value, EnergyUnit::KilocaloriePerMole)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> EnergyUnit {
        self.unit
    }

    #[inline]
    pub fn value_in(&self, unit: EnergyUnit) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        self.value * self.unit.in_kilojoules_per_mole() / unit.in_kilojoules_per_mole()
    }

    #[inline]
    pub fn in_kilojoules_per_mole(&self) -> f64 {
        self.value_in(EnergyUnit::KilojoulePerMole)
    }

    pub fn to_unit(&self, unit: EnergyUnit) -> Self {
        Self::new(self.value_in(unit), unit)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
