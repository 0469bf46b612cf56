/// Renderer capability and job types.
pub mod backend;
/// Renderer backed by a JSON Resume theme's Node CLI.
pub mod node;
/// Temp-file lifecycle around one render job.
pub mod pipeline;
