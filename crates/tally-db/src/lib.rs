//! Storage layer for the tally counter service.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! embedded SQL migrations, the counter insert helper, and pool disposal for
//! shutdown. The counter table is created through the migration runner in
//! this crate before the server accepts any request.
//!
//! # Design decisions
//!
//! - **SQLite with WAL mode**: a single local file, no external database
//!   process. WAL allows concurrent readers with a single writer, which
//!   matches the append-only counter access pattern.
//! - **`r2d2` connection pool**: bounded connection reuse without manual
//!   lifetime management. Handlers check a connection out per request and
//!   return it; nothing holds a connection across requests.
//! - **Embedded migrations**: SQL compiled into the binary via
//!   `include_str!`, so the schema ships with the server and cannot drift
//!   from the code that depends on it. Re-running migrations against an
//!   already-initialized file is a no-op.

mod counter;
mod migrations;
mod pool;

pub use counter::{insert_count, CounterError};
pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, dispose_pool, DbPool, DbRuntimeSettings, PoolError};
