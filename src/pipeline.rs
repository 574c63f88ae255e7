use crate::cache::TemplateCache;
use crate::config::Config;
use crate::constants::{content_type, error_prefix, status};
use crate::error::Error;
use crate::types::{ResponseContext, VariableHandler, Variables};
use log::warn;

/// Render orchestration service.
///
/// Owns the compiled-template cache and the ordered variable-handler list.
/// Construct one at startup and share it by handle with all request-handling
/// code; handlers must be registered before the pipeline starts serving
/// concurrent traffic, which `register_handler` taking `&mut self` enforces.
pub struct RenderPipeline {
    cache: TemplateCache,
    handlers: Vec<VariableHandler>,
}

impl RenderPipeline {
    /// Creates a pipeline resolving templates per the given configuration.
    pub fn new(config: Config) -> Self {
        Self { cache: TemplateCache::new(config), handlers: Vec::new() }
    }

    /// The underlying compiled-template cache.
    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    /// Re-points the shared master layout at a new file, fully replacing
    /// prior state. Intended to be called before traffic starts.
    pub fn set_master(&self, name: &str) {
        self.cache.set_master(name);
    }

    /// Appends a variable handler. Handlers run on every render, in
    /// registration order; each receives the mapping produced so far and
    /// returns the mapping to use next.
    pub fn register_handler<H>(&mut self, handler: H)
    where
        H: Fn(&mut dyn ResponseContext, Variables) -> Variables + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Renders a template set with status 200.
    ///
    /// See [`RenderPipeline::render_with_status`].
    pub fn render<C: ResponseContext>(
        &self,
        ctx: &mut C,
        vars: Option<Variables>,
        names: &[&str],
    ) {
        self.render_with_status(ctx, vars, status::OK, names);
    }

    /// Renders a template set against the response context.
    ///
    /// Resolves the compiled set (compiling and caching on miss), applies
    /// the registered handlers to the variable mapping, executes the set
    /// against the response stream, and on success finalizes the response
    /// with the requested status and an HTML content type. Any failure
    /// short-circuits into a plain-text diagnostic response with a 500
    /// status; a failed body write may leave partial output in the body.
    ///
    /// # Arguments
    /// * `ctx` - Transport response context
    /// * `vars` - Variable mapping; `None` becomes an empty mapping
    /// * `status` - Status code applied on success
    /// * `names` - Ordered content-template names
    pub fn render_with_status<C: ResponseContext>(
        &self,
        ctx: &mut C,
        vars: Option<Variables>,
        status: u16,
        names: &[&str],
    ) {
        let set = match self.cache.get(names) {
            Ok(set) => set,
            Err(err) => return Self::internal_error(ctx, error_prefix::PARSE, &err),
        };

        let mut vars = vars.unwrap_or_default();
        for handler in &self.handlers {
            vars = handler(ctx, vars);
        }

        if let Err(err) = set.render_to(&vars, ctx) {
            return Self::internal_error(ctx, error_prefix::EXECUTE, &err);
        }

        ctx.set_status(status);
        ctx.set_content_type(content_type::HTML);
    }

    /// Finalizes a failed render: fixed error status, plain-text content
    /// type, and a diagnostic body of prefix + underlying error text.
    fn internal_error<C: ResponseContext>(ctx: &mut C, prefix: &str, err: &Error) {
        ctx.set_status(status::INTERNAL_SERVER_ERROR);
        ctx.set_content_type(content_type::PLAIN);
        if let Err(write_err) = write!(ctx, "{prefix}{err}") {
            warn!("Unable to write diagnostic response: {write_err}");
        }
    }
}
