use super::error::{LookupError, ModelError};
use super::reaction::Reaction;
use nalgebra::DVector;
use std::fmt;
use std::ops::Index;

/// An ordered series of reactions forming one mechanism or trajectory.
///
/// Besides the reactions, a path carries a name (often a chemical formula or a
/// tuple of R-group labels) and a per-reaction step offset used to lay the path
/// out on the x-axis of an energy diagram.
#[derive(Clone, PartialEq)]
pub struct Path {
    reactions: Vec<Reaction>,
    name: String,
    /// `step_size - 1` per reaction: a unit step contributes no extra spacing,
    /// a negative step size draws that reaction backward.
    steps: DVector<f64>,
}

impl Path {
    /// Creates a path with unit step sizes.
    pub fn new(reactions: impl Into<Vec<Reaction>>, name: impl Into<String>) -> Self {
        let reactions = reactions.into();
        let steps = DVector::zeros(reactions.len());
        Self {
            reactions,
            name: name.into(),
            steps,
        }
    }

    /// Creates a path with explicit step sizes, one per reaction.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::StepSizeMismatch`] if the number of step sizes
    /// differs from the number of reactions.
    pub fn with_step_sizes(
        reactions: impl Into<Vec<Reaction>>,
        name: impl Into<String>,
        step_sizes: impl IntoIterator<Item = f64>,
    ) -> Result<Self, ModelError> {
        let reactions = reactions.into();
        let step_sizes: Vec<f64> = step_sizes.into_iter().collect();
        if step_sizes.len() != reactions.len() {
            return Err(ModelError::StepSizeMismatch {
                expected: reactions.len(),
                found: step_sizes.len(),
            });
        }
        let steps = DVector::from_iterator(step_sizes.len(), step_sizes.iter().map(|s| s - 1.0));
        Ok(Self {
            reactions,
            name: name.into(),
            steps,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Step offsets (`step_size - 1`) consumed by diagram layout.
    pub fn steps(&self) -> &DVector<f64> {
        &self.steps
    }

    /// Count of reactions in the path.
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reaction> {
        self.reactions.iter()
    }

    /// Returns the reaction at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Reaction, LookupError> {
        self.reactions.get(index).ok_or(LookupError::IndexOutOfRange {
            index,
            len: self.reactions.len(),
        })
    }

    /// Energy of each reaction, in order.
    pub fn energies(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.reactions.iter().map(Reaction::energy))
    }

    /// Cumulative energy along the path, starting from 0 before the first
    /// reaction. Holds `len() + 1` values.
    pub fn relative_energies(&self) -> DVector<f64> {
        let cumulative = std::iter::once(0.0).chain(self.reactions.iter().scan(0.0, |acc, r| {
            *acc += r.energy();
            Some(*acc)
        }));
        DVector::from_iterator(self.len() + 1, cumulative)
    }

    /// Index into [`relative_energies`](Self::relative_energies) and value of the
    /// lowest point along the path. The first occurrence wins ties.
    pub fn min(&self) -> (usize, f64) {
        self.extremum(|candidate, best| candidate < best)
    }

    /// Index into [`relative_energies`](Self::relative_energies) and value of the
    /// highest point along the path. The first occurrence wins ties.
    pub fn max(&self) -> (usize, f64) {
        self.extremum(|candidate, best| candidate > best)
    }

    fn extremum(&self, better: impl Fn(f64, f64) -> bool) -> (usize, f64) {
        // relative_energies always starts with 0.0, so the scan has a seed.
        self.relative_energies()
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0.0), |best, (i, value)| {
                if better(value, best.1) {
                    (i, value)
                } else {
                    best
                }
            })
    }
}

impl Index<usize> for Path {
    type Output = Reaction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.reactions[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Reaction;
    type IntoIter = std::slice::Iter<'a, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reaction) in self.reactions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", reaction)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Path {}>", self.name)
    }
}
