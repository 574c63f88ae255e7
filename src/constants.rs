//! Constants used throughout the pagekit crate

/// Default directory content and master templates are resolved under
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Logical name the master layout is registered under, and the default file
/// it is loaded from. Content templates extend this name regardless of which
/// file currently backs the master.
pub const MASTER_TEMPLATE_NAME: &str = "master.html";

/// Separator used to join ordered content names into a cache key
pub const KEY_SEPARATOR: &str = "|";

/// Content types applied when finalizing a response
pub mod content_type {
    pub const HTML: &str = "text/html";
    pub const PLAIN: &str = "text/plain";
}

/// Status codes used by the render pipeline
pub mod status {
    pub const OK: u16 = 200;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Diagnostic body prefixes written when a render fails
pub mod error_prefix {
    pub const PARSE: &str = "Unable to parse template: ";
    pub const EXECUTE: &str = "Unable to execute template: ";
}
