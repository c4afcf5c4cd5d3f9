//! Domain Layer
//!
//! Workload model and manifest rewriting, free of process and file I/O.
//!
//! ## Structure
//!
//! - `entities/` - Workload configuration, generated build state
//! - `value_objects/` - Cluster target resolution, tree paths
//! - `services/` - Manifest walker, image tag injection, component rendering
//! - `ports/` - Deployer and Reporter interfaces

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
