use crate::config::Config;
use crate::constants::{KEY_SEPARATOR, MASTER_TEMPLATE_NAME};
use crate::error::{Error, Result};
use crate::master::MasterTemplate;
use crate::types::Variables;
use log::debug;
use minijinja::Environment;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// A compiled, render-ready template set: the master layout's environment
/// cloned and extended with the content templates of one cache key.
///
/// Immutable after construction and shared across requests via `Arc`.
#[derive(Debug)]
pub struct CompiledSet {
    env: Environment<'static>,
    entry: String,
}

impl CompiledSet {
    /// Executes the set's entry template against an output stream.
    ///
    /// # Arguments
    /// * `vars` - Variable mapping exposed to the template
    /// * `out` - Output stream the rendered markup is written to
    ///
    /// # Errors
    /// * `Error::MinijinjaError` on execution failure
    /// * `Error::IoError` if writing the rendered markup fails; output may
    ///   already be partially written when this is returned
    pub fn render_to(&self, vars: &Variables, out: &mut dyn Write) -> Result<()> {
        let template = self.env.get_template(&self.entry)?;
        let rendered = template.render(vars)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Compiled-template cache keyed by ordered content-template names.
///
/// Lookup and insert happen under a reader/writer lock; file I/O and parsing
/// never do, so readers are not blocked by a concurrent slow path. Entries
/// are append-only and live for the process lifetime. Concurrent misses on
/// the same key may duplicate the clone+parse work; whichever insert lands
/// last wins.
pub struct TemplateCache {
    root: PathBuf,
    master_name: String,
    master: MasterTemplate,
    compiled: RwLock<HashMap<String, Arc<CompiledSet>>>,
}

impl TemplateCache {
    /// Creates an empty cache resolving templates under the configured root.
    pub fn new(config: Config) -> Self {
        Self {
            root: config.template_dir,
            master_name: config.master_template,
            master: MasterTemplate::new(),
            compiled: RwLock::new(HashMap::new()),
        }
    }

    /// Serializes an ordered list of content names into a cache key. Order
    /// is significant: reordering the same names yields a different key.
    fn cache_key(names: &[&str]) -> String {
        names.join(KEY_SEPARATOR)
    }

    /// Re-points the shared master layout at a new file under the template
    /// root, fully replacing prior state. Failures are logged and swallowed;
    /// see [`MasterTemplate::load`].
    pub fn set_master(&self, name: &str) {
        self.master.load(&self.root, name);
    }

    /// Resolves an ordered set of content names to a compiled template.
    ///
    /// Fast path: a shared-lock lookup returning the cached set on hit, with
    /// no I/O. Slow path: compiles the set (lazily loading the default
    /// master first if none exists), then inserts it under the exclusive
    /// lock. Failed compiles are returned to the caller and never cached, so
    /// a repeated call retries resolution from scratch.
    ///
    /// # Arguments
    /// * `names` - Ordered content-template names, relative to the root
    ///
    /// # Returns
    /// * `Result<Arc<CompiledSet>>` - The compiled, render-ready set
    pub fn get(&self, names: &[&str]) -> Result<Arc<CompiledSet>> {
        let key = Self::cache_key(names);

        if let Some(set) = self.compiled.read().expect("cache lock poisoned").get(&key)
        {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(self.compile(&key, names)?);
        self.compiled
            .write()
            .expect("cache lock poisoned")
            .insert(key, Arc::clone(&set));
        Ok(set)
    }

    /// Number of compiled entries currently cached.
    pub fn len(&self) -> usize {
        self.compiled.read().expect("cache lock poisoned").len()
    }

    /// Whether the cache holds no compiled entries yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clones the master environment and parses the content files into the
    /// clone. No lock is held while this runs.
    fn compile(&self, key: &str, names: &[&str]) -> Result<CompiledSet> {
        let master = match self.master.snapshot() {
            Some(master) => master,
            None => {
                self.master.load(&self.root, &self.master_name);
                self.master.snapshot().ok_or_else(|| Error::MasterUnavailableError {
                    key: key.to_string(),
                })?
            }
        };

        let mut env = (*master).clone();
        for name in names {
            let path = self.root.join(name);
            let source = std::fs::read_to_string(&path).map_err(|source| {
                Error::TemplateReadError { path: path.display().to_string(), source }
            })?;
            env.add_template_owned(name.to_string(), source).map_err(|source| {
                Error::TemplateSetParseError { key: key.to_string(), source }
            })?;
        }

        // An empty set compiles to the bare layout.
        let entry = names.first().map_or(MASTER_TEMPLATE_NAME, |name| *name);

        debug!("Compiled template set \"{key}\".");
        Ok(CompiledSet { env, entry: entry.to_string() })
    }
}
