// HTTP routes
pub mod discovery;
pub mod engagement;
pub mod health;

pub use discovery::*;
pub use engagement::*;
pub use health::*;
