//! Error types for the data-access layer.
//!
//! "Zero rows" is never an error here: list reads return an empty `Vec` and
//! point reads return `None`. [`DbError`] covers actual failures, split so a
//! caller can tell a constraint violation apart from a connectivity problem
//! without digging through driver internals.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Unique, foreign-key, or check violation reported by the store.
    #[error("constraint violation: {0}")]
    Constraint(sqlx::Error),

    /// Pool exhaustion or connection failure.
    #[error("connection failure: {0}")]
    Connection(sqlx::Error),

    /// Any other statement or driver error.
    #[error("query failed: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation() =>
            {
                DbError::Constraint(err)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DbError::Connection(err)
            }
            _ => DbError::Query(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_classifies_as_connection() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::Connection(_)
        ));
    }

    #[test]
    fn io_failure_classifies_as_connection() {
        let err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ));
        assert!(matches!(DbError::from(err), DbError::Connection(_)));
    }

    #[test]
    fn other_driver_errors_classify_as_query() {
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Query(_)
        ));
    }
}
