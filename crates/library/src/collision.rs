use crate::error::{ErrorKind, Result};
use shelf_extract::clean::split_extension;
use std::collections::HashSet;
use std::path::PathBuf;

/// Maximum numbered variants tried before bailing with [`ErrorKind::Collision`].
pub const MAX_COLLISION_ATTEMPTS: usize = 1000;

/// Answers whether a filename is already taken at the target.
pub trait TargetIndex: Send + Sync {
    fn contains(&self, name: &str) -> bool;
}

impl TargetIndex for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

/// The files of one directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    root: PathBuf,
}
impl DirectoryIndex {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}
impl TargetIndex for DirectoryIndex {
    fn contains(&self, name: &str) -> bool {
        // Unknown counts as taken.
        self.root.join(name).try_exists().unwrap_or(true)
    }
}

/// Returns `name`, or the first free `name (n).ext` variant.
pub fn resolve_collision(name: &str, taken: impl Fn(&str) -> bool) -> Result<String> {
    if !taken(name) {
        return Ok(name.to_string());
    }
    let (stem, extension) = split_extension(name);
    for n in 1..=MAX_COLLISION_ATTEMPTS {
        let candidate = format!("{stem} ({n}){extension}");
        if !taken(&candidate) {
            tracing::debug!(%name, %candidate, "resolved name collision");
            return Ok(candidate);
        }
    }
    exn::bail!(ErrorKind::Collision(name.to_string()))
}
