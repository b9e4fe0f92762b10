// PDF output for the transfer log. Rendering is CPU-bound; handlers call it from
// tokio::task::spawn_blocking.

pub mod fonts;
pub mod pdf;

pub use pdf::{render_transfer_log, RenderError};
