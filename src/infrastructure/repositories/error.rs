use crate::domain::errors::DomainError;

/// Translate storage failures into domain kinds. Constraint violations are
/// classified by kind since SQLite does not report constraint names.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if db_err.is_unique_violation() {
                return if message.contains("pages.slug") {
                    DomainError::Conflict("a page with this slug already exists".into())
                } else if message.contains("users.email") {
                    DomainError::Conflict("email already registered".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
