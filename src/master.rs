use crate::constants::MASTER_TEMPLATE_NAME;
use crate::filters;
use log::{debug, warn};
use minijinja::Environment;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// The shared master layout.
///
/// Holds one process-wide parsed layout environment behind a reader/writer
/// lock. The cache clones a snapshot of it for every compiled template set,
/// so content grafted onto a clone never leaks back into the master or into
/// sibling clones.
pub struct MasterTemplate {
    parsed: RwLock<Option<Arc<Environment<'static>>>>,
}

impl MasterTemplate {
    /// Creates an empty master; the layout is loaded lazily or explicitly.
    pub fn new() -> Self {
        Self { parsed: RwLock::new(None) }
    }

    /// Parses `<root>/<name>` as the master layout, replacing any previous
    /// master wholesale. The source is registered under the fixed logical
    /// name [`MASTER_TEMPLATE_NAME`], so content templates always extend the
    /// same name no matter which file currently backs the layout.
    ///
    /// A read or parse failure is logged and leaves the previous master (or
    /// absence thereof) unchanged. The failure is not raised here; it
    /// resurfaces later as a compile failure when a template set needs a
    /// usable master.
    ///
    /// # Arguments
    /// * `root` - Template root directory
    /// * `name` - File name of the layout, relative to `root`
    pub fn load(&self, root: &Path, name: &str) {
        let path = root.join(name);
        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                warn!("Unable to read master template '{}': {err}", path.display());
                return;
            }
        };

        let mut env = Environment::new();
        filters::apply(&mut env);
        if let Err(err) = env.add_template_owned(MASTER_TEMPLATE_NAME.to_string(), source)
        {
            warn!("Unable to parse master template '{}': {err}", path.display());
            return;
        }

        debug!("Master template loaded from '{}'.", path.display());
        *self.parsed.write().expect("master lock poisoned") = Some(Arc::new(env));
    }

    /// Returns a snapshot of the current parsed master, if any. Taken under
    /// the read lock so replacement and cloning never interleave.
    pub fn snapshot(&self) -> Option<Arc<Environment<'static>>> {
        self.parsed.read().expect("master lock poisoned").clone()
    }
}

impl Default for MasterTemplate {
    fn default() -> Self {
        Self::new()
    }
}
