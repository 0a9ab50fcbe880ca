mod bracket;
mod resolution;

pub use bracket::IgsBracket;
pub use resolution::{IgsResolution, TaxClass};
