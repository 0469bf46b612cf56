//! Vitae tailors JSON Resume documents for a target job and renders them to PDF.
//!
//! Rendering is delegated to an external JSON Resume theme CLI run as a child process:
//!
//! - Load a [`Document`] and optionally [`tailor`] it for a job
//! - Build a [`ResumeGenerator`] from a [`GeneratorConfig`] naming the theme directory
//! - Call [`ResumeGenerator::generate_pdf`]
//!
//! Custom renderers plug in through [`RenderBackend`].
#![forbid(unsafe_code)]

mod foundation;

/// Résumé document model.
pub mod document;
/// Public call surface tying tailoring and rendering together.
pub mod generator;
/// Rendering through an external process.
pub mod render;
/// Job-targeted document edits.
pub mod tailor;

pub use crate::foundation::error::{VitaeError, VitaeResult};

pub use crate::document::Document;
pub use crate::generator::{GeneratorConfig, ResumeGenerator};
pub use crate::render::backend::{RenderBackend, RenderJob, RenderOutput};
pub use crate::render::node::{NodeCliBackend, NodeCliConfig};
pub use crate::render::pipeline::RenderPipeline;
pub use crate::tailor::{TailorRequest, tailor};
