//! Domain Entities
//!
//! - `WorkloadConfig` - one configured deployment and its strategy spec
//! - `GeneratedState` - image tags produced by the build step

mod generated_state;
mod workload;

pub use generated_state::{GeneratedState, ImageTagView};
pub use workload::{
    ChartSpec, ComponentSpec, ContainerSpec, DeploymentMethod, ManifestSpec, MethodKind,
    ServicePort, ServiceSpec, WorkloadConfig,
};
