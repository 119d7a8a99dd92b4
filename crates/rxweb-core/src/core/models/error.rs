use thiserror::Error;

/// Precondition violations raised while constructing a model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A reaction was given no reactants.
    #[error("Invalid reaction: at least one reactant is required")]
    EmptyReactants,

    /// A reaction was given no products.
    #[error("Invalid reaction: at least one product is required")]
    EmptyProducts,

    /// Step sizes and reactions differ in count.
    #[error("Expected one step size per reaction ({expected}), got {found}")]
    StepSizeMismatch { expected: usize, found: usize },

    /// An enumeration was given no axes.
    #[error("An enumeration requires at least one axis")]
    NoAxes,

    /// Two axes share a name.
    #[error("Duplicate axis name '{0}' in enumeration")]
    DuplicateAxis(String),

    /// An explicit shape disagrees with the axis lengths.
    #[error("Expected paths and path names to have the same shape, got {shape:?} != {labels:?}")]
    ShapeMismatch {
        shape: Vec<usize>,
        labels: Vec<usize>,
    },

    /// The path count is not the product of the axis lengths.
    #[error("Enumeration shape requires {expected} paths, got {found}")]
    CellCountMismatch { expected: usize, found: usize },
}

/// Failures of positional or label-based access into a collection.
///
/// The two kinds are kept apart so callers can tell an out-of-range position
/// from a label that does not exist on the axis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// A position past the end of the collection or axis.
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A label the leading axis does not hold.
    #[error("Label '{label}' is not contained in axis '{axis}'")]
    UnknownLabel { axis: String, label: String },

    /// A path was indexed as if it were an enumeration.
    #[error("Cannot index further: all axes have been consumed and a path was reached")]
    NoAxesLeft,
}
