pub mod outcome;
pub mod pacing;
pub mod target;

pub use outcome::*;
pub use pacing::*;
pub use target::*;
