//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod engines;
pub mod social;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, TwitterAdapter};
pub use engines::{
    create_discovery_engines, NoopAttendeeEngine, NoopEventEngine, SearchAttendeeEngine,
    SearchEventEngine,
};
pub use social::{create_social_client, NoopSocialClient};
pub use test_dependencies::TestDependencies;
pub use traits::*;
