//! Card profile fixture utilities.
//!
//! Fixtures insert card profiles together with their pilot and user domain rows,
//! tag teams and online pair markers. Document bodies come from [`factory`].

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn card<'a>(&'a mut self) -> CardFixtures<'a> {
        CardFixtures { setup: self }
    }
}

pub struct CardFixtures<'a> {
    setup: &'a mut TestContext,
}
