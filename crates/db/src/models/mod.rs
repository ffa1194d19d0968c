pub mod dataset;
pub mod project;
pub mod task;
