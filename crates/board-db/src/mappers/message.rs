//! Message model -> entity mappers

use board_core::{DomainError, Message, MessageId, MessageWithAuthor, Role};

use crate::models::{MessageModel, MessageWithAuthorModel};

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: MessageId::new(model.message_id),
            created_at: model.creation_date.and_utc(),
            content: model.content,
        }
    }
}

impl TryFrom<MessageWithAuthorModel> for MessageWithAuthor {
    type Error = DomainError;

    fn try_from(model: MessageWithAuthorModel) -> Result<Self, Self::Error> {
        Ok(MessageWithAuthor {
            id: MessageId::new(model.message_id),
            content: model.content,
            created_at: model.creation_date.and_utc(),
            first_name: model.first_name,
            last_name: model.last_name,
            role: model.role_name.parse::<Role>()?,
        })
    }
}
