use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::user::entity::user;
use crate::domain::wall::entity::{comment, reaction, reaction_set, wall};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement,
};
use tracing::info;

/// SQLite 쓰기 잠금 대기 시간
const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(|opts| opts.busy_timeout(SQLITE_BUSY_TIMEOUT));

    let db = Database::connect(options).await?;
    info!("Successfully connected to the database.");

    if config.db_schema_update {
        // Auto-create tables (Schema Sync)
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // Order matters for foreign keys! (Parent first, then Child)

    // 1. Independent Entities
    create_table_if_not_exists(db, &schema, user::Entity).await?;

    // 2. Dependent Entities (Level 1)
    create_table_if_not_exists(db, &schema, wall::Entity).await?;

    // 3. Dependent Entities (Level 2)
    create_table_if_not_exists(db, &schema, comment::Entity).await?;
    create_table_if_not_exists(db, &schema, reaction_set::Entity).await?;

    // 4. Membership join table
    create_table_if_not_exists(db, &schema, reaction::Entity).await?;

    create_unique_index_if_not_exists(
        db,
        "uq_reaction_set_wall_kind",
        "reaction_set",
        &["wall_id", "kind"],
    )
    .await?;
    // A user sits in at most one of a wall's reaction sets.
    create_unique_index_if_not_exists(
        db,
        "uq_reaction_wall_user",
        "reaction",
        &["wall_id", "user_id"],
    )
    .await?;
    create_index_if_not_exists(
        db,
        "idx_comment_wall_created",
        "comment",
        &["wall_id", "created_on"],
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let sql = format!(
        "CREATE INDEX {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    );
    execute_ignoring_existing(db, index_name, sql).await
}

async fn create_unique_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let sql = format!(
        "CREATE UNIQUE INDEX {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    );
    execute_ignoring_existing(db, index_name, sql).await
}

/// DDL 실행. 이미 존재하는 인덱스 에러는 무시합니다 (재실행 가능).
async fn execute_ignoring_existing(
    db: &DatabaseConnection,
    index_name: &str,
    sql: String,
) -> Result<(), DbErr> {
    let stmt = Statement::from_string(db.get_database_backend(), sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate") || err_str.contains("already exists") {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let table_name = entity.table_name().to_string();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table {}: {}", table_name, e);
        e
    })
}
