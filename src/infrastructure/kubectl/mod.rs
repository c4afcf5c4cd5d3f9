//! kubectl integration
//!
//! - `command` - argument building and invocation
//! - `manifests` - file expansion and multi-document YAML handling
//! - `deployer` - the manifest-based [`Deployer`](crate::domain::ports::Deployer)

mod command;
mod deployer;
pub mod manifests;

pub use command::{KubectlRunner, DEFAULT_KUBECTL};
pub use deployer::KubectlDeployer;
