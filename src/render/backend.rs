use std::path::Path;

use crate::foundation::error::VitaeResult;

/// The three locations handed to a renderer for one job.
#[derive(Clone, Copy, Debug)]
pub struct RenderJob<'a> {
    /// Serialized résumé JSON the renderer reads.
    pub input: &'a Path,
    /// Where the renderer must write the PDF.
    pub output: &'a Path,
    /// Scratch directory the renderer may use.
    pub work_dir: &'a Path,
}

/// What a renderer reported after it finished.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl RenderOutput {
    pub fn succeeded() -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            ..Self::default()
        }
    }
}

impl From<std::process::Output> for RenderOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Capability to turn a JSON résumé file into a PDF.
///
/// Implementations run to completion and report the outcome; a non-successful [`RenderOutput`]
/// is not an `Err`. `Err` is reserved for failing to run the renderer at all.
pub trait RenderBackend {
    fn render(&self, job: &RenderJob<'_>) -> VitaeResult<RenderOutput>;
}

impl<B: RenderBackend + ?Sized> RenderBackend for &B {
    fn render(&self, job: &RenderJob<'_>) -> VitaeResult<RenderOutput> {
        (**self).render(job)
    }
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn render(&self, job: &RenderJob<'_>) -> VitaeResult<RenderOutput> {
        (**self).render(job)
    }
}
