//! helm integration
//!
//! - `values` - values file merging
//! - `deployer` - the chart-based [`Deployer`](crate::domain::ports::Deployer)

mod deployer;
pub mod values;

pub use deployer::{HelmDeployer, DEFAULT_HELM};
