//! Off-chain deployment of the `nft_marketplace` program.
//!
//! [`MarketplaceModule`] describes what to instantiate and with which
//! constructor arguments; a [`DeploymentRunner`] carries it out.

pub mod config;
pub mod error;
pub mod module;
pub mod runner;

pub use config::DeployArgs;
pub use error::DeployError;
pub use module::{fetch_marketplace, DeployedMarketplace, MarketplaceModule};
pub use runner::DeploymentRunner;
