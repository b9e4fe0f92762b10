// Transfer-log export: range grammar, batch validation and the PDF endpoint.
// Validation is pure; rendering runs on the blocking pool.

pub mod handlers;
pub mod range;
pub mod validation;
