use crate::errors::custom::{CustomError, DbError};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::instrument;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/******************************************/
// Establishing Db Connection
/******************************************/
/// An in-memory database belongs to the connection that opened it, so the pool
/// holds exactly one connection and never retires it.
#[instrument(name = "Establish database pool")]
pub fn establish_connection(database_url: &str) -> Result<DbPool, CustomError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(|err| CustomError::DatabaseError(DbError::ConnectionError(err.to_string())))?;

    run_migrations(&pool)?;
    Ok(pool)
}

/******************************************/
// Creating tables from embedded migrations
/******************************************/
pub fn run_migrations(pool: &DbPool) -> Result<(), CustomError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| CustomError::DatabaseError(DbError::MigrationError(err.to_string())))?;
    tracing::info!(migrations = applied.len(), "Database schema is up to date");
    Ok(())
}
