// Progress aggregation: completion percentages, status derivation, ring geometry

pub mod engine;
pub mod ring;

pub use engine::*;
pub use ring::*;
