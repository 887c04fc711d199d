//! Construction of autopatchers by identifier

use crate::{NoobdevMultiBoot, NoobdevSystemProp};
use dbp_core::{AutoPatcher, PatcherError, PatcherResult};

/// Every known autopatcher, in the order they are applied by default
const AUTOPATCHER_IDS: &[&str] = &[NoobdevMultiBoot::ID, NoobdevSystemProp::ID];

/// Identifiers of every known autopatcher
pub fn autopatcher_ids() -> &'static [&'static str] {
    AUTOPATCHER_IDS
}

/// Create the autopatcher registered under `id`
pub fn create_autopatcher(id: &str) -> PatcherResult<Box<dyn AutoPatcher>> {
    match id {
        NoobdevMultiBoot::ID => Ok(Box::new(NoobdevMultiBoot::new())),
        NoobdevSystemProp::ID => Ok(Box::new(NoobdevSystemProp::new())),
        _ => Err(PatcherError::UnknownPatcher(id.to_string())),
    }
}

/// Create autopatchers for `ids`, preserving their order
///
/// Fails on the first unknown identifier.
pub fn create_autopatchers<S: AsRef<str>>(ids: &[S]) -> PatcherResult<Vec<Box<dyn AutoPatcher>>> {
    ids.iter().map(|id| create_autopatcher(id.as_ref())).collect()
}
