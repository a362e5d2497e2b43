pub mod accessors;
pub mod initialize;

pub use accessors::*;
pub use initialize::*;
