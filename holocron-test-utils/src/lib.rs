//! Shared test harness for the holocron workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixture rows a test
//! needs, then `build()` produces a [`TestContext`] backed by an in-memory SQLite database with
//! everything inserted.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_galaxy_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}
