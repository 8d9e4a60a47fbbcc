//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// card fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_card_tables: bool,

    // Database fixtures to insert
    cards: Vec<(String, String, String)>, // (access_code, chip_id, session_id)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_card_tables: false,
            cards: Vec::new(),
        }
    }

    /// Add every card profile table to the test database.
    ///
    /// Creates CardProfile, PilotDomain, UserDomain, TagTeamData, OnlinePair and
    /// OfflinePvpBattleResult.
    pub fn with_card_tables(mut self) -> Self {
        self.include_card_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// ```no_run
    /// use exvs_card_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), exvs_card_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(CardProfile)
    ///     .with_table(PilotDomain)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a card profile with default documents during `build()`.
    ///
    /// Requires the card tables to be created, see [`Self::with_card_tables`].
    pub fn with_card(mut self, access_code: &str, chip_id: &str, session_id: &str) -> Self {
        self.cards.push((
            access_code.to_string(),
            chip_id.to_string(),
            session_id.to_string(),
        ));
        self
    }

    /// Build the test context.
    ///
    /// Creates the in-memory database, the configured tables and then inserts the
    /// queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_card_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CardProfile),
                schema.create_table_from_entity(entity::prelude::PilotDomain),
                schema.create_table_from_entity(entity::prelude::UserDomain),
                schema.create_table_from_entity(entity::prelude::TagTeamData),
                schema.create_table_from_entity(entity::prelude::OnlinePair),
                schema.create_table_from_entity(entity::prelude::OfflinePvpBattleResult),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (access_code, chip_id, session_id) in self.cards {
            setup
                .card()
                .insert_card(&access_code, &chip_id, &session_id)
                .await?;
        }

        Ok(setup)
    }
}
