// Core data models for Stagedash
// These structs represent the board entities

pub mod task;
pub mod stage;
pub mod stakeholder;
pub mod metric;
pub mod dashboard;

pub use task::*;
pub use stage::*;
pub use stakeholder::*;
pub use metric::*;
pub use dashboard::*;
