pub mod analyze;
pub mod batch;
pub mod patterns;
pub mod report;
