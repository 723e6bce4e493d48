//! Drivers that render batches of random patches and persist them

/// Independently saved patches of random size
pub mod set;
/// Row-major tiling of equally sized patches into one canvas
pub mod sheet;

pub use set::RandomSetComposer;
pub use sheet::SheetComposer;
