//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. Everything that spawns a process
//! or touches the file system lives here.
//!
//! ## Structure
//!
//! - `process` - cluster tool subprocesses with streamed output
//! - `kubectl/` - manifest loading and the manifest-based deployer
//! - `helm/` - values merging and the chart-based deployer
//! - `component/` - the templated component deployer
//! - `deployer` - strategy enum and the deployer factory
//! - `generated` - generated state file loading
//! - `events/` - JSON reporter

pub mod component;
pub mod deployer;
pub mod events;
pub mod generated;
pub mod helm;
pub mod kubectl;
pub mod process;

pub use deployer::{KubeDeployerFactory, WorkloadDeployer};
pub use events::JsonReporter;
pub use generated::{load_generated, GENERATED_FILE};
