use super::error::ModelError;
use super::molecule::Molecule;
use std::fmt;
use std::sync::Arc;

/// Distinguishes ordinary reactions from electrochemical ones.
///
/// An electrochemical step transfers `ne` electrons against a reference
/// potential `ref_pot`; its energy is corrected by `ne * ref_pot`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReactionKind {
    #[default]
    Chemical,
    Electrochemical { ne: i32, ref_pot: f64 },
}

impl ReactionKind {
    /// The energy subtracted from the raw product-minus-reactant difference.
    pub fn correction(&self) -> f64 {
        match *self {
            ReactionKind::Chemical => 0.0,
            ReactionKind::Electrochemical { ne, ref_pot } => f64::from(ne) * ref_pot,
        }
    }
}

/// A transformation of one non-empty list of molecules into another.
///
/// The molecule lists are reference counted, so cloning a reaction (for example
/// to reuse it in several paths) shares the molecules instead of copying them.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    reactants: Arc<[Molecule]>,
    products: Arc<[Molecule]>,
    kind: ReactionKind,
}

impl Reaction {
    /// Creates an ordinary reaction.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyReactants`] or [`ModelError::EmptyProducts`] if
    /// either side has no molecules.
    pub fn new(
        reactants: impl Into<Arc<[Molecule]>>,
        products: impl Into<Arc<[Molecule]>>,
    ) -> Result<Self, ModelError> {
        Self::with_kind(reactants, products, ReactionKind::Chemical)
    }

    /// Creates an electrochemical reaction transferring `ne` electrons at the
    /// reference potential `ref_pot`.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Reaction::new`].
    pub fn electrochemical(
        reactants: impl Into<Arc<[Molecule]>>,
        products: impl Into<Arc<[Molecule]>>,
        ne: i32,
        ref_pot: f64,
    ) -> Result<Self, ModelError> {
        Self::with_kind(
            reactants,
            products,
            ReactionKind::Electrochemical { ne, ref_pot },
        )
    }

    fn with_kind(
        reactants: impl Into<Arc<[Molecule]>>,
        products: impl Into<Arc<[Molecule]>>,
        kind: ReactionKind,
    ) -> Result<Self, ModelError> {
        let reactants = reactants.into();
        let products = products.into();
        if reactants.is_empty() {
            return Err(ModelError::EmptyReactants);
        }
        if products.is_empty() {
            return Err(ModelError::EmptyProducts);
        }
        Ok(Self {
            reactants,
            products,
            kind,
        })
    }

    pub fn reactants(&self) -> &[Molecule] {
        &self.reactants
    }

    pub fn products(&self) -> &[Molecule] {
        &self.products
    }

    pub fn kind(&self) -> ReactionKind {
        self.kind
    }

    pub fn is_electrochemical(&self) -> bool {
        matches!(self.kind, ReactionKind::Electrochemical { .. })
    }

    /// Energy of the reaction: products minus reactants, less any
    /// electrochemical correction.
    pub fn energy(&self) -> f64 {
        let products: f64 = self.products.iter().map(Molecule::energy).sum();
        let reactants: f64 = self.reactants.iter().map(Molecule::energy).sum();
        (products - reactants) - self.kind.correction()
    }

    /// Splits the reaction into its `(reactants, products)` pair.
    pub fn parts(&self) -> (&[Molecule], &[Molecule]) {
        (&self.reactants, &self.products)
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |side: &[Molecule]| {
            side.iter()
                .map(Molecule::name)
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(f, "{} -> {}", join(&self.reactants), join(&self.products))?;
        if let ReactionKind::Electrochemical { ref_pot, .. } = self.kind {
            // The penalty marker is not a product species.
            write!(f, " + !{:.2}!", ref_pot)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a Reaction> for (&'a [Molecule], &'a [Molecule]) {
    fn from(reaction: &'a Reaction) -> Self {
        reaction.parts()
    }
}
