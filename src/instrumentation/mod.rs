pub mod logger;

pub use logger::{init_tracing, Operation, Outcome, SummaryRun};
