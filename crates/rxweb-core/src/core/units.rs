use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The energy units reaction tables are commonly reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    Hartree,
    KjPerMol,
    KcalPerMol,
    ElectronVolt,
    Wavenumber,
}

static UNIT_SYMBOLS: Map<&'static str, EnergyUnit> = phf_map! {
    "hartree" => EnergyUnit::Hartree,
    "kJ/mol" => EnergyUnit::KjPerMol,
    "kcal/mol" => EnergyUnit::KcalPerMol,
    "eV" => EnergyUnit::ElectronVolt,
    "1/cm" => EnergyUnit::Wavenumber,
};

// NIST values. Row: from, column: to, both in `EnergyUnit::ALL` order.
#[rustfmt::skip]
const FACTORS: [[f64; 5]; 5] = [
    //  hartree             kJ/mol      kcal/mol   eV           1/cm
    [1.0,                 2625.49962, 627.509,   27.21138602, 2.194746313702e5],
    [3.8088e-4,           1.0,        0.23901,   1.0364e-2,   83.593],
    [1.5936e-3,           4.1840,     1.0,       4.3363e-2,   349.75],
    [3.6749e-2,           96.485,     23.061,    1.0,         8065.5],
    [4.556335252767e-6,   1.1963e-2,  2.8591e-3, 1.2398e-4,   1.0],
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown energy unit '{0}' (expected one of: hartree, kJ/mol, kcal/mol, eV, 1/cm)")]
    Unknown(String),
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 5] = [
        EnergyUnit::Hartree,
        EnergyUnit::KjPerMol,
        EnergyUnit::KcalPerMol,
        EnergyUnit::ElectronVolt,
        EnergyUnit::Wavenumber,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Hartree => "hartree",
            EnergyUnit::KjPerMol => "kJ/mol",
            EnergyUnit::KcalPerMol => "kcal/mol",
            EnergyUnit::ElectronVolt => "eV",
            EnergyUnit::Wavenumber => "1/cm",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Factor that converts an energy in `self` into `to`.
    pub fn factor_to(self, to: EnergyUnit) -> f64 {
        FACTORS[self.index()][to.index()]
    }
}

impl FromStr for EnergyUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNIT_SYMBOLS
            .get(s)
            .copied()
            .ok_or_else(|| UnitError::Unknown(s.to_string()))
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Multiplicative factor converting energies from the unit named `from` to the
/// unit named `to`. Unit names are case sensitive (`kJ/mol`, `eV`, ...).
pub fn energy_conversion(from: &str, to: &str) -> Result<f64, UnitError> {
    let from: EnergyUnit = from.parse()?;
    let to: EnergyUnit = to.parse()?;
    Ok(from.factor_to(to))
}
