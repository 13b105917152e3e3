use crate::schema::entities::user;
use crate::{DatabaseType, DdlRenderer, identity_schema};

fn user_ddl(database_type: DatabaseType) -> String {
    let schema = identity_schema(database_type).unwrap();
    DdlRenderer::new(database_type).create_table(schema.entity(user::ENTITY_NAME).unwrap())
}

#[test]
fn test_sqlite_user_table() {
    let ddl = user_ddl(DatabaseType::Sqlite);

    assert!(ddl.starts_with("CREATE TABLE \"user\" ("));
    assert!(ddl.contains("\"id\" varchar(36) NOT NULL"));
    assert!(ddl.contains("\"email\" varchar(254) NOT NULL"));
    assert!(ddl.contains("\"password\" varchar(255) NOT NULL"));
    assert!(ddl.contains("\"resetPasswordToken\" varchar(255),"));
    assert!(ddl.contains("\"personalizationAnswers\" text,"));
    assert!(ddl.contains(
        "\"createdAt\" datetime NOT NULL DEFAULT (STRFTIME('%Y-%m-%d %H:%M:%f', 'NOW'))"
    ));
    assert!(ddl.contains("\"globalRoleId\" integer NOT NULL"));
    assert!(ddl.contains("CONSTRAINT \"PK_user\" PRIMARY KEY (\"id\")"));
    assert!(ddl.contains(
        "CONSTRAINT \"FK_user_globalRoleId\" FOREIGN KEY (\"globalRoleId\") REFERENCES \"role\" (\"id\") ON DELETE NO ACTION"
    ));
    assert!(!ddl.contains("ON UPDATE"));
}

#[test]
fn test_mysql_family_user_table_has_on_update_clause() {
    for database_type in [DatabaseType::MySql, DatabaseType::MariaDb] {
        let ddl = user_ddl(database_type);

        assert!(ddl.starts_with("CREATE TABLE `user` ("));
        assert!(ddl.contains("`personalizationAnswers` json,"));
        assert!(ddl.contains(
            "`updatedAt` datetime(3) NOT NULL DEFAULT CURRENT_TIMESTAMP(3) ON UPDATE CURRENT_TIMESTAMP(3)"
        ));
        assert!(ddl.contains("`createdAt` datetime(3) NOT NULL DEFAULT CURRENT_TIMESTAMP(3),"));
        assert!(ddl.contains("`globalRoleId` int NOT NULL"));
    }
}

#[test]
fn test_postgres_user_table() {
    let ddl = user_ddl(DatabaseType::Postgres);

    assert!(ddl.contains("\"id\" uuid NOT NULL"));
    assert!(ddl.contains("\"personalizationAnswers\" json,"));
    assert!(ddl.contains(
        "\"createdAt\" timestamp(3) NOT NULL DEFAULT CURRENT_TIMESTAMP(3)"
    ));
    assert!(!ddl.contains("with time zone"));
    assert!(!ddl.contains("ON UPDATE"));
}

#[test]
fn test_role_primary_key_generation_per_backend() {
    let expectations = [
        (DatabaseType::Sqlite, "\"id\" integer PRIMARY KEY AUTOINCREMENT NOT NULL"),
        (DatabaseType::Postgres, "\"id\" SERIAL NOT NULL"),
        (DatabaseType::MySql, "`id` int NOT NULL AUTO_INCREMENT"),
    ];

    for (database_type, expected) in expectations {
        let schema = identity_schema(database_type).unwrap();
        let ddl = DdlRenderer::new(database_type).create_table(schema.entity("Role").unwrap());
        assert!(ddl.contains(expected), "{database_type}: {ddl}");
    }

    let schema = identity_schema(DatabaseType::Sqlite).unwrap();
    let ddl = DdlRenderer::new(DatabaseType::Sqlite).create_table(schema.entity("Role").unwrap());
    assert!(!ddl.contains("CONSTRAINT \"PK_role\""));
}

#[test]
fn test_share_table_has_composite_key_and_cascading_user_fk() {
    let schema = identity_schema(DatabaseType::Sqlite).unwrap();
    let ddl = DdlRenderer::new(DatabaseType::Sqlite)
        .create_table(schema.entity("SharedWorkflow").unwrap());

    assert!(ddl.contains("CONSTRAINT \"PK_shared_workflow\" PRIMARY KEY (\"workflowId\", \"userId\")"));
    assert!(ddl.contains("\"userId\" varchar(36) NOT NULL"));
    assert!(ddl.contains(
        "FOREIGN KEY (\"userId\") REFERENCES \"user\" (\"id\") ON DELETE CASCADE"
    ));
}

#[test]
fn test_render_emits_tables_before_indices() {
    let schema = identity_schema(DatabaseType::Sqlite).unwrap();
    let statements = DdlRenderer::new(DatabaseType::Sqlite).render(&schema);

    assert_eq!(statements.len(), 6);
    assert!(statements[..4].iter().all(|s| s.starts_with("CREATE TABLE")));
    assert!(statements.contains(
        &"CREATE UNIQUE INDEX \"IDX_user_email\" ON \"user\" (\"email\")".to_string()
    ));
    assert!(statements.contains(
        &"CREATE UNIQUE INDEX \"IDX_role_scope_name\" ON \"role\" (\"scope\", \"name\")"
            .to_string()
    ));
}
