use sea_orm::{DbErr, SqlErr};

/// Checks whether a database error was raised by a unique constraint or index.
///
/// Used by the services to turn a lost check-then-insert race into the same
/// "already exists" outcome the existence check would have produced.
///
/// # Arguments
/// - `err` - The error returned by an insert or update
///
/// # Returns
/// - `true` - The statement violated a unique constraint
/// - `false` - Any other database failure
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
