//! DDL for the board schema
//!
//! Table and column names are kept exactly as deployed databases have them,
//! including the unquoted camel-case identifiers.

/// A named, idempotent DDL statement
#[derive(Debug, Clone, Copy)]
pub struct SchemaStatement {
    pub name: &'static str,
    pub sql: &'static str,
}

/// PostgreSQL has no `CREATE TYPE IF NOT EXISTS`; the block absorbs the
/// duplicate instead of consulting `pg_type`.
const CREATE_ROLES_TYPE: &str = r"
DO $$
BEGIN
    CREATE TYPE roles AS ENUM ('admin', 'user', 'spectator');
EXCEPTION
    WHEN duplicate_object THEN NULL;
END
$$;
";

const CREATE_USERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(255) NOT NULL,
    firstName VARCHAR(100) NOT NULL,
    lastName VARCHAR(100) NOT NULL,
    password TEXT NOT NULL,
    roleName roles NOT NULL
);
";

const CREATE_MESSAGES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS messages (
    message_id SERIAL PRIMARY KEY,
    creationDate TIMESTAMP NOT NULL DEFAULT NOW(),
    content TEXT NOT NULL
);
";

const CREATE_USERS_MESSAGES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS users_messages (
    user_id INT REFERENCES users(id) ON DELETE CASCADE,
    message_id INT REFERENCES messages(message_id) ON DELETE CASCADE
);
";

/// Statements in dependency order
pub const SCHEMA_STATEMENTS: [SchemaStatement; 4] = [
    SchemaStatement {
        name: "roles",
        sql: CREATE_ROLES_TYPE,
    },
    SchemaStatement {
        name: "users",
        sql: CREATE_USERS_TABLE,
    },
    SchemaStatement {
        name: "messages",
        sql: CREATE_MESSAGES_TABLE,
    },
    SchemaStatement {
        name: "users_messages",
        sql: CREATE_USERS_MESSAGES_TABLE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_created_before_tables() {
        let names: Vec<_> = SCHEMA_STATEMENTS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["roles", "users", "messages", "users_messages"]);
    }

    #[test]
    fn test_tables_are_idempotent() {
        for statement in &SCHEMA_STATEMENTS[1..] {
            assert!(statement.sql.contains("IF NOT EXISTS"), "{}", statement.name);
        }
    }

    #[test]
    fn test_join_table_cascades_both_parents() {
        assert_eq!(CREATE_USERS_MESSAGES_TABLE.matches("ON DELETE CASCADE").count(), 2);
    }

    #[test]
    fn test_role_labels_match_domain() {
        for role in board_core::Role::ALL {
            assert!(CREATE_ROLES_TYPE.contains(&format!("'{}'", role.as_str())));
        }
    }
}
