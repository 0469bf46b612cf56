use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
    time::Instant,
};

use anyhow::Context as _;

use crate::{
    foundation::error::{VitaeError, VitaeResult},
    render::backend::{RenderBackend, RenderJob, RenderOutput},
};

pub const DEFAULT_NODE_BIN: &str = "node";
pub const DEFAULT_CLI_SCRIPT: &str = "cli.js";

/// Location of a JSON Resume theme that ships a Node CLI entry point.
#[derive(Clone, Debug)]
pub struct NodeCliConfig {
    /// Node executable, resolved through `PATH` when it is a bare name.
    pub node_bin: PathBuf,
    pub theme_dir: PathBuf,
    /// Entry point, relative to `theme_dir`.
    pub cli_script: PathBuf,
}

impl NodeCliConfig {
    pub fn new(theme_dir: impl Into<PathBuf>) -> Self {
        Self {
            node_bin: PathBuf::from(DEFAULT_NODE_BIN),
            theme_dir: theme_dir.into(),
            cli_script: PathBuf::from(DEFAULT_CLI_SCRIPT),
        }
    }

    pub fn with_node_bin(mut self, node_bin: impl Into<PathBuf>) -> Self {
        self.node_bin = node_bin.into();
        self
    }

    pub fn with_cli_script(mut self, cli_script: impl Into<PathBuf>) -> Self {
        self.cli_script = cli_script.into();
        self
    }

    pub fn entry_point(&self) -> PathBuf {
        self.theme_dir.join(&self.cli_script)
    }
}

/// Renders by running `node <theme>/cli.js -i <input> -o <output> --tmp-dir <work_dir>`.
#[derive(Clone, Debug)]
pub struct NodeCliBackend {
    node_bin: PathBuf,
    entry_point: PathBuf,
}

impl NodeCliBackend {
    /// Fails with [`VitaeError::Configuration`] when the theme's entry point is not a file.
    pub fn new(cfg: NodeCliConfig) -> VitaeResult<Self> {
        let entry_point = cfg.entry_point();
        if !entry_point.is_file() {
            return Err(VitaeError::configuration(format!(
                "renderer entry point not found at '{}'",
                entry_point.display()
            )));
        }
        Ok(Self {
            node_bin: cfg.node_bin,
            entry_point,
        })
    }

    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    fn command(&self, job: &RenderJob<'_>) -> Command {
        let mut cmd = Command::new(&self.node_bin);
        cmd.arg(&self.entry_point)
            .arg("-i")
            .arg(job.input)
            .arg("-o")
            .arg(job.output)
            .arg("--tmp-dir")
            .arg(job.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl RenderBackend for NodeCliBackend {
    fn render(&self, job: &RenderJob<'_>) -> VitaeResult<RenderOutput> {
        let started_at = Instant::now();
        let output = self.command(job).output().with_context(|| {
            format!(
                "failed to spawn renderer '{}' (is it installed and on PATH?)",
                self.node_bin.display()
            )
        })?;
        let output = RenderOutput::from(output);

        tracing::debug!(
            op = "node::render",
            entry_point = %self.entry_point.display(),
            exit_code = ?output.exit_code,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "renderer process finished"
        );
        Ok(output)
    }
}
