//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use board_core::entities::{Message, MessageWithAuthor};
use board_core::traits::{MessageRepository, RepoResult};
use board_core::value_objects::{MessageId, UserId};

use crate::models::{MessageModel, MessageWithAuthorModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, content: &str) -> RepoResult<Message> {
        let model = sqlx::query_as::<_, MessageModel>(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING message_id, creationDate AS creation_date, content
            "#,
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(model))
    }

    #[instrument(skip(self, content))]
    async fn create_for_user(&self, user_id: UserId, content: &str) -> RepoResult<Message> {
        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, MessageModel>(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING message_id, creationDate AS creation_date, content
            "#,
        )
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO users_messages (user_id, message_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(model.message_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Message::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MessageId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM messages WHERE message_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            debug!(message_id = %id, "No message to delete");
        }

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn all_content(&self) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            r#"
            SELECT content FROM messages ORDER BY message_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn all_with_authors(&self) -> RepoResult<Vec<MessageWithAuthor>> {
        // Inner join: messages without a users_messages row are not listed
        let results = sqlx::query_as::<_, MessageWithAuthorModel>(
            r#"
            SELECT m.message_id, m.content, m.creationDate AS creation_date,
                   u.firstName AS first_name, u.lastName AS last_name,
                   u.roleName::TEXT AS role_name
            FROM users AS u
            JOIN users_messages AS um ON u.id = um.user_id
            JOIN messages AS m ON um.message_id = m.message_id
            ORDER BY m.creationDate DESC, m.message_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(MessageWithAuthor::try_from).collect()
    }
}
