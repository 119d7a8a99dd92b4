pub mod labels;
pub mod ordering;
