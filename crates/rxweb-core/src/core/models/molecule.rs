use std::fmt;
use std::hash::{Hash, Hasher};

/// A molecule, atom, or group of these with a defined energy.
///
/// Molecules are opaque labels plus a scalar energy; no chemistry is validated
/// and the energy unit is whatever the caller chose. A `Molecule` is an
/// immutable value: equality and hashing compare the name and the exact bit
/// pattern of the energy.
#[derive(Clone)]
pub struct Molecule {
    name: String,
    energy: f64,
}

impl Molecule {
    pub fn new(name: impl Into<String>, energy: f64) -> Self {
        Self {
            name: name.into(),
            energy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Returns this molecule with its energy multiplied by `factor`.
    ///
    /// Used when energies are read in one unit and analysed in another.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.energy *= factor;
        self
    }
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.energy.to_bits() == other.energy.to_bits()
    }
}

impl Eq for Molecule {}

impl Hash for Molecule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.energy.to_bits().hash(state);
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Mol {} {:7.4}>", self.name, self.energy)
    }
}

impl fmt::Debug for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_molecule_exposes_name_and_energy() {
        let water = Molecule::new("H2O", -76.4);
        assert_eq!(water.name(), "H2O");
        assert_eq!(water.energy(), -76.4);
    }

    #[test]
    fn display_uses_fixed_width_four_decimals() {
        let a = Molecule::new("a", -1.0);
        assert_eq!(a.to_string(), "<Mol a -1.0000>");
        assert_eq!(format!("{:?}", a), "<Mol a -1.0000>");
        assert_eq!(Molecule::new("H₂O", -1.0).to_string(), "<Mol H₂O -1.0000>");
        assert_eq!(Molecule::new("a", 1.5).to_string(), "<Mol a  1.5000>");
        assert_eq!(Molecule::new("b", -123.456789).to_string(), "<Mol b -123.4568>");
    }

    #[test]
    fn equality_and_hashing_are_by_value() {
        let a1 = Molecule::new("a", 1.0);
        let a2 = Molecule::new("a", 1.0);
        let b = Molecule::new("b", 1.0);
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_ne!(a1, Molecule::new("a", 1.0000001));

        let set: HashSet<_> = [a1, a2, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn scaled_multiplies_energy_and_keeps_name() {
        let m = Molecule::new("CO2", -2.0).scaled(627.509);
        assert_eq!(m.name(), "CO2");
        assert_eq!(m.energy(), -1255.018);
    }
}
