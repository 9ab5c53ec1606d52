pub mod pipeline;
pub mod process;
pub mod report;
