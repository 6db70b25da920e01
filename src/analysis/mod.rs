/// Traversal-driven predictive entropy estimation
pub mod pipeline;
