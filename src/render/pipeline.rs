use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use tempfile::TempPath;

use crate::{
    document::Document,
    foundation::error::{VitaeError, VitaeResult},
    render::backend::{RenderBackend, RenderJob},
};

const TEMP_PREFIX: &str = "resume-";
const TEMP_SUFFIX: &str = ".json";

/// Serializes a document, hands it to a [`RenderBackend`], and cleans up after itself.
///
/// One call is one render job:
/// 1. write the document to a uniquely named `resume-*.json` in the work directory
/// 2. run the backend with that file, the requested output path, and the work directory
/// 3. return the output path, or [`VitaeError::Render`] with the captured streams
///
/// The temporary file is removed on every exit path, including early returns and panics in
/// the backend. Concurrent calls sharing a work directory never share a temporary file.
#[derive(Clone, Debug)]
pub struct RenderPipeline<B> {
    backend: B,
}

impl<B: RenderBackend> RenderPipeline<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[tracing::instrument(
        skip_all,
        fields(output = %output_path.display(), work_dir = %work_dir.display())
    )]
    pub fn render(
        &self,
        document: &Document,
        output_path: &Path,
        work_dir: &Path,
    ) -> VitaeResult<PathBuf> {
        if !work_dir.is_dir() {
            return Err(VitaeError::validation(format!(
                "work directory '{}' does not exist or is not a directory",
                work_dir.display()
            )));
        }
        ensure_parent_dir(output_path)?;

        let started_at = Instant::now();
        // Removes the file when dropped, on every return below.
        let input = write_temp_document(document, work_dir)?;
        tracing::debug!(input = %input.display(), "wrote temporary résumé document");

        let job = RenderJob {
            input: &input,
            output: output_path,
            work_dir,
        };
        let output = self.backend.render(&job)?;

        if !output.success {
            tracing::debug!(
                exit_code = ?output.exit_code,
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                "renderer reported failure"
            );
            return Err(VitaeError::render(
                output.exit_code,
                output.stdout,
                output.stderr,
            ));
        }

        tracing::debug!(
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            "renderer finished"
        );
        Ok(output_path.to_path_buf())
    }
}

/// Write `document` to a fresh temp file in `dir`. The returned [`TempPath`] deletes the file
/// when dropped and does not hold it open, so the renderer is free to read or remove it.
fn write_temp_document(document: &Document, dir: &Path) -> VitaeResult<TempPath> {
    let file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)
        .with_context(|| format!("create temporary document in '{}'", dir.display()))?;
    let (file, path) = file.into_parts();

    let mut w = BufWriter::new(file);
    document.write_pretty(&mut w)?;
    w.flush()
        .with_context(|| format!("write temporary document '{}'", path.display()))?;
    Ok(path)
}

pub fn ensure_parent_dir(path: &Path) -> VitaeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
