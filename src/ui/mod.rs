// Presentation-side state: collapsible sections and the cosmetic jitter loop

pub mod sections;
pub mod simulate;

pub use sections::*;
pub use simulate::*;
