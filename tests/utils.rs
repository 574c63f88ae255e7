use pagekit::config::Config;
use pagekit::pipeline::RenderPipeline;
use pagekit::types::ResponseContext;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

/// Response-context double capturing status, content type, and body.
#[derive(Default)]
pub struct MockResponse {
    pub status: Option<u16>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

impl Write for MockResponse {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl ResponseContext for MockResponse {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }
}

/// Writes the given template files into a template root.
pub fn write_templates(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents).unwrap();
    }
}

/// Creates a temporary template root with the given files and a pipeline
/// configured against it.
pub fn pipeline_with_templates(files: &[(&str, &str)]) -> (TempDir, RenderPipeline) {
    let dir = TempDir::new().unwrap();
    write_templates(dir.path(), files);
    let config = Config {
        template_dir: dir.path().to_path_buf(),
        master_template: "master.html".to_string(),
    };
    (dir, RenderPipeline::new(config))
}
