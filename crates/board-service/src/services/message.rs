//! Message service
//!
//! Handles posting, deleting and listing messages.

use board_core::entities::{DeleteAck, Message, MessageWithAuthor};
use board_core::{MessageId, UserId};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a message that is not linked to any user.
    ///
    /// Such messages show up in [`Self::get_all_message_content`] only.
    #[instrument(skip(self, content))]
    pub async fn add_message(&self, content: &str) -> ServiceResult<Message> {
        let message = self.ctx.message_repo().create(content).await?;

        info!(message_id = %message.id, "Message added");
        Ok(message)
    }

    /// Store a message together with its author link
    #[instrument(skip(self, content))]
    pub async fn post_message(&self, user_id: UserId, content: &str) -> ServiceResult<Message> {
        let message = self
            .ctx
            .message_repo()
            .create_for_user(user_id, content)
            .await?;

        info!(message_id = %message.id, user_id = %user_id, "Message posted");
        Ok(message)
    }

    /// Delete a message and its author links.
    ///
    /// Deleting an unknown ID succeeds without touching anything.
    #[instrument(skip(self))]
    pub async fn delete_message(&self, message_id: MessageId) -> ServiceResult<DeleteAck> {
        let removed = self.ctx.message_repo().delete(message_id).await?;

        debug!(message_id = %message_id, removed, "Message delete finished");
        Ok(DeleteAck::new())
    }

    /// Every message's content, oldest ID first
    #[instrument(skip(self))]
    pub async fn get_all_message_content(&self) -> ServiceResult<Vec<String>> {
        Ok(self.ctx.message_repo().all_content().await?)
    }

    /// Messages that have an author, newest first
    #[instrument(skip(self))]
    pub async fn get_all_messages(&self) -> ServiceResult<Vec<MessageWithAuthor>> {
        Ok(self.ctx.message_repo().all_with_authors().await?)
    }
}
