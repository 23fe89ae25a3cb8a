//! Normalized names and the per-file pipeline.
//!
//! [`Pipeline`] ties the workspace together: a raw filename is parsed by
//! `shelf-extract`, classified by `shelf-classify`, then named with a
//! [`NameGenerator`] template and made unique against a [`TargetIndex`].

mod collision;
pub mod error;
mod pipeline;
mod template;

pub use crate::collision::{DirectoryIndex, MAX_COLLISION_ATTEMPTS, TargetIndex, resolve_collision};
pub use crate::pipeline::Pipeline;
pub use crate::template::{DEFAULT_TEMPLATE, NameGenerator};
