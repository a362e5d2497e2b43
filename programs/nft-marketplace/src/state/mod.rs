pub mod marketplace;

pub use marketplace::*;
