use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            db,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the unique indexes the migrations add on top of the entity schema.
    ///
    /// `create_table_from_entity` cannot emit composite unique constraints, so the
    /// (document_id, version) and (document_id, alert_type) guards must be created
    /// separately for tests that rely on them.
    pub async fn with_engine_indexes(&self) -> Result<(), TestError> {
        let stmts: Vec<IndexCreateStatement> = vec![
            Index::create()
                .name("idx-document_version-document_id-version")
                .table(entity::document_version::Entity)
                .col(entity::document_version::Column::DocumentId)
                .col(entity::document_version::Column::Version)
                .unique()
                .to_owned(),
            Index::create()
                .name("idx-expiry_alert-document_id-alert_type")
                .table(entity::expiry_alert::Entity)
                .col(entity::expiry_alert::Column::DocumentId)
                .col(entity::expiry_alert::Column::AlertType)
                .unique()
                .to_owned(),
        ];

        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on every mock pushed onto the setup to verify it was
    /// invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_engine_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Subscription),
                schema.create_table_from_entity(entity::prelude::Document),
                schema.create_table_from_entity(entity::prelude::DocumentVersion),
                schema.create_table_from_entity(entity::prelude::ExpiryAlert),
                schema.create_table_from_entity(entity::prelude::Edital),
                schema.create_table_from_entity(entity::prelude::EditalAnalysis),
                schema.create_table_from_entity(entity::prelude::ExtractedEntity),
                schema.create_table_from_entity(entity::prelude::HabilitacaoRequirement),
            ];
            setup.with_tables(stmts).await?;
            setup.with_engine_indexes().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
