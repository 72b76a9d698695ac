//! Card generation under a batch-wide uniqueness guarantee.
//!
//! - [`Config`]: validated generation parameters
//! - [`Sampler`]: one card of k distinct balls out of N
//! - [`Registry`]: signatures seen so far, shared by all workers
//! - [`Generator`]: rejection sampling until every slot holds an unused card
//! - [`Manifest`]: the per-batch summary handed to writers
pub mod config;
pub use config::*;

pub mod generator;
pub use generator::*;

pub mod manifest;
pub use manifest::*;

pub mod registry;
pub use registry::*;

pub mod sampler;
pub use sampler::*;
