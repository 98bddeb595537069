//! User model -> entity mapper

use board_core::{DomainError, Role, User, UserId};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(model.id),
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            role: model.role_name.parse::<Role>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(role: &str) -> UserModel {
        UserModel {
            id: 5,
            username: "jdoe".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            role_name: role.to_string(),
        }
    }

    #[test]
    fn test_user_from_model() {
        let user = User::try_from(model("spectator")).unwrap();
        assert_eq!(user.id, UserId::new(5));
        assert_eq!(user.first_name, "John");
        assert_eq!(user.role, Role::Spectator);
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let err = User::try_from(model("owner")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRole(_)));
    }
}
