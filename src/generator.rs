use std::path::{Path, PathBuf};

use crate::{
    document::Document,
    foundation::error::{VitaeError, VitaeResult},
    render::{
        backend::RenderBackend,
        node::{DEFAULT_CLI_SCRIPT, DEFAULT_NODE_BIN, NodeCliBackend, NodeCliConfig},
        pipeline::RenderPipeline,
    },
    tailor::TailorRequest,
};

/// Settings for a [`ResumeGenerator`] backed by a theme's Node CLI.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Directory of the JSON Resume theme (must contain `cli_script`).
    pub theme_dir: PathBuf,
    pub node_bin: PathBuf,
    pub cli_script: PathBuf,
    /// Scratch directory used when a call does not name one.
    pub tmp_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(theme_dir: impl Into<PathBuf>) -> Self {
        Self {
            theme_dir: theme_dir.into(),
            node_bin: PathBuf::from(DEFAULT_NODE_BIN),
            cli_script: PathBuf::from(DEFAULT_CLI_SCRIPT),
            tmp_dir: std::env::temp_dir(),
        }
    }

    pub fn with_tmp_dir(mut self, tmp_dir: impl Into<PathBuf>) -> Self {
        self.tmp_dir = tmp_dir.into();
        self
    }

    pub fn node_cli(&self) -> NodeCliConfig {
        NodeCliConfig::new(&self.theme_dir)
            .with_node_bin(&self.node_bin)
            .with_cli_script(&self.cli_script)
    }
}

/// Tailors résumés and renders them to PDF.
#[derive(Clone, Debug)]
pub struct ResumeGenerator<B = NodeCliBackend> {
    pipeline: RenderPipeline<B>,
    tmp_dir: PathBuf,
}

impl ResumeGenerator<NodeCliBackend> {
    /// Fails with [`VitaeError::Configuration`] if the theme's CLI entry point is missing.
    pub fn new(cfg: GeneratorConfig) -> VitaeResult<Self> {
        let backend = NodeCliBackend::new(cfg.node_cli())?;
        tracing::debug!(entry_point = %backend.entry_point().display(), "renderer located");
        Ok(Self::with_backend(backend, cfg.tmp_dir))
    }
}

impl<B: RenderBackend> ResumeGenerator<B> {
    pub fn with_backend(backend: B, tmp_dir: impl Into<PathBuf>) -> Self {
        Self {
            pipeline: RenderPipeline::new(backend),
            tmp_dir: tmp_dir.into(),
        }
    }

    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    pub fn backend(&self) -> &B {
        self.pipeline.backend()
    }

    /// Render `document` to `output_path`, using `tmp_dir` (or the configured scratch
    /// directory) for the intermediate JSON file.
    pub fn generate_pdf(
        &self,
        document: &Document,
        output_path: &Path,
        tmp_dir: Option<&Path>,
    ) -> VitaeResult<PathBuf> {
        let tmp_dir = tmp_dir.unwrap_or(self.tmp_dir.as_path());
        match self.pipeline.render(document, output_path, tmp_dir) {
            Ok(path) => {
                tracing::info!(output = %path.display(), "PDF generated");
                Ok(path)
            }
            Err(err) => {
                if let VitaeError::Render {
                    exit_code,
                    stdout,
                    stderr,
                } = &err
                {
                    tracing::error!(
                        output = %output_path.display(),
                        exit_code = ?exit_code,
                        stdout = %stdout,
                        stderr = %stderr,
                        "failed to generate PDF"
                    );
                } else {
                    tracing::error!(
                        output = %output_path.display(),
                        error = %err,
                        "failed to generate PDF"
                    );
                }
                Err(err)
            }
        }
    }

    pub fn tailor_resume_for_job(
        &self,
        base: &Document,
        job_description: &str,
        job_title: &str,
        keywords: &[String],
    ) -> Document {
        TailorRequest::new(job_title, keywords.to_vec())
            .with_description(job_description)
            .apply(base)
    }
}
