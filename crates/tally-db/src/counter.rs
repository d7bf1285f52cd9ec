//! Counter row insertion — the single domain query of the service.

use rusqlite::{params, Connection};
use tally_types::CounterRecord;
use thiserror::Error;

/// Errors that can occur while inserting a counter row.
#[derive(Debug, Error)]
pub enum CounterError {
    /// The insert or its enclosing transaction failed.
    #[error("failed to insert counter row: {0}")]
    Insert(#[from] rusqlite::Error),
}

/// Inserts a new counter row and returns the assigned record.
///
/// Each call is an independent unit of work: the insert runs inside its own
/// transaction and commits before returning. SQLite serializes concurrent
/// inserts, so assigned numbers are unique and strictly increasing without
/// any locking on our side.
pub fn insert_count(conn: &Connection, memo: Option<&str>) -> Result<CounterRecord, CounterError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("INSERT INTO cnt (memo) VALUES (?1)", params![memo])?;
    let number = tx.last_insert_rowid();
    tx.commit()?;

    Ok(CounterRecord {
        number,
        memo: memo.map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_migrations;
    use rusqlite::Connection;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("should open in-memory db");
        run_migrations(&conn).expect("migrations should succeed");
        conn
    }

    #[test]
    fn insert_with_memo() {
        let conn = test_conn();
        let record = insert_count(&conn, Some("hello")).expect("insert should succeed");

        assert_eq!(record.number, 1);
        assert_eq!(record.memo.as_deref(), Some("hello"));

        let stored: Option<String> = conn
            .query_row("SELECT memo FROM cnt WHERE number = ?1", [record.number], |row| {
                row.get(0)
            })
            .expect("row should exist");
        assert_eq!(stored.as_deref(), Some("hello"));
    }

    #[test]
    fn insert_without_memo_stores_null() {
        let conn = test_conn();
        let record = insert_count(&conn, None).expect("insert should succeed");

        assert_eq!(record.memo, None);

        let stored: Option<String> = conn
            .query_row("SELECT memo FROM cnt WHERE number = ?1", [record.number], |row| {
                row.get(0)
            })
            .expect("row should exist");
        assert_eq!(stored, None);
    }

    #[test]
    fn numbers_strictly_increase() {
        let conn = test_conn();
        let mut last = 0;
        for i in 0..5 {
            let record = insert_count(&conn, Some(&format!("memo-{i}")))
                .expect("insert should succeed");
            assert!(
                record.number > last,
                "number {} should exceed previous {last}",
                record.number
            );
            last = record.number;
        }
    }

    #[test]
    fn insert_without_table_fails() {
        let conn = Connection::open_in_memory().expect("should open in-memory db");
        let err = insert_count(&conn, None).expect_err("insert into missing table should fail");
        assert!(
            err.to_string().contains("cnt"),
            "error should name the missing table: {err}"
        );
    }
}
