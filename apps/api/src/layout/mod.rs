// Document layout: fixed page geometry and row pagination for the transfer-log PDF.
// Pure computation; the PDF writer in `render` consumes the page plan.

pub mod geometry;
pub mod pagination;

pub use geometry::{default_page_config, truncate_chars, PageConfig};
pub use pagination::{paginate, PagePlan};
