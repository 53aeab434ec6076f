use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

/// DDL for the backing table. `id` and `dt_created` are server-assigned.
pub const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    dt_created TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    username VARCHAR(100) NOT NULL,
    email VARCHAR(255),
    mobile VARCHAR(20)
);
"#;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,                        // store-generated, never set by callers
    pub dt_created: PrimitiveDateTime,  // store-assigned creation timestamp
    pub username: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// A user that has not been persisted yet. Only username and email are sent
/// on insert; id and dt_created exist once the store assigns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            username: username.into(),
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_holds_fields() {
        let draft = NewUser::new("joao", Some("joao@nospam.com".into()));
        assert_eq!(draft.username, "joao");
        assert_eq!(draft.email.as_deref(), Some("joao@nospam.com"));
    }

    #[test]
    fn ddl_targets_users_table() {
        assert!(CREATE_TABLE_SQL.contains("CREATE TABLE IF NOT EXISTS users"));
    }
}
