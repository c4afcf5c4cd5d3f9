//! Domain Services
//!
//! Stateless logic over domain types, no I/O.
//!
//! - `manifest_walker` - generic match/replace traversal over manifest trees
//! - `image_tags` - image tag injection built on the walker
//! - `component_renderer` - renders component specs to Deployment/Service trees

pub mod component_renderer;
pub mod image_tags;
pub mod manifest_walker;

pub use component_renderer::render_component;
pub use image_tags::{replace_image_tags, IMAGE_KEY};
pub use manifest_walker::{node_count, walk};
