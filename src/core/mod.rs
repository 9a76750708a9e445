pub mod form;
pub mod orchestrator;

pub use form::{Field, Form};
pub use orchestrator::{submit, CalculationRequest, Submission};
