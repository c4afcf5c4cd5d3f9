//! Value Objects
//!
//! Immutable types with no identity.

mod cluster_target;
mod path_segment;

pub use cluster_target::{ClusterDefaults, ClusterTarget};
pub use path_segment::PathSegment;
