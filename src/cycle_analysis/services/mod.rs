mod cycle_detector;
mod graph_builder;

pub use cycle_detector::CycleDetector;
pub use graph_builder::GraphBuilder;
