// Business domains
pub mod discovery;
pub mod engagement;
