//! User service
//!
//! Account creation, promotion and password checks.

use board_core::entities::{NewUser, User};
use board_core::{DomainError, UserId};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account, hashing the plaintext password before it is stored.
    ///
    /// Input is not validated here; column limits are enforced by the database.
    #[instrument(skip(self, new_user), fields(username = %new_user.username, role = %new_user.role))]
    pub async fn add_user(&self, new_user: NewUser) -> ServiceResult<User> {
        let password_hash = self.ctx.passwords().hash(&new_user.password)?;
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Promote a spectator to user.
    ///
    /// `None` means nothing changed: the user is missing or not a spectator.
    #[instrument(skip(self))]
    pub async fn upgrade_role(&self, user_id: UserId) -> ServiceResult<Option<User>> {
        let upgraded = self.ctx.user_repo().upgrade_role(user_id).await?;

        match &upgraded {
            Some(user) => info!(user_id = %user.id, role = %user.role, "User role upgraded"),
            None => info!(user_id = %user_id, "No spectator to upgrade"),
        }

        Ok(upgraded)
    }

    /// Look up a user by ID
    #[instrument(skip(self))]
    pub async fn find_user(&self, user_id: UserId) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_id(user_id).await?)
    }

    /// Get a user by ID, failing with `UserNotFound` if it does not exist
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<User> {
        let user = self
            .find_user(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok(user)
    }

    /// Check a plaintext password against the stored hash.
    ///
    /// Returns `false` for an unknown user.
    #[instrument(skip(self, password))]
    pub async fn verify_password(&self, user_id: UserId, password: &str) -> ServiceResult<bool> {
        let Some(hash) = self.ctx.user_repo().get_password_hash(user_id).await? else {
            return Ok(false);
        };

        Ok(self.ctx.passwords().verify(password, &hash)?)
    }

    /// Whether an admin account has been seeded
    #[instrument(skip(self))]
    pub async fn admin_exists(&self) -> ServiceResult<bool> {
        Ok(self.ctx.user_repo().admin_exists().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ServiceError;
    use crate::services::test_support::{failing_context, test_context};
    use board_core::Role;

    #[tokio::test]
    async fn test_add_user_defaults_to_spectator() {
        let (ctx, _, _) = test_context();
        let service = UserService::new(&ctx);

        let user = service
            .add_user(NewUser::new("jdoe", "John", "Doe", "hunter2"))
            .await
            .unwrap();

        assert_eq!(user.username, "jdoe");
        assert_eq!(user.role, Role::Spectator);
    }

    #[tokio::test]
    async fn test_add_user_stores_hash_not_plaintext() {
        let (ctx, users, _) = test_context();
        let service = UserService::new(&ctx);

        let user = service
            .add_user(NewUser::new("jdoe", "John", "Doe", "hunter2"))
            .await
            .unwrap();

        let stored = users.password_hash(user.id).unwrap();
        assert_ne!(stored, "hunter2");
        assert!(service.verify_password(user.id, "hunter2").await.unwrap());
        assert!(!service.verify_password(user.id, "hunter3").await.unwrap());
    }

    #[tokio::test]
    async fn test_add_user_with_explicit_role() {
        let (ctx, _, _) = test_context();
        let service = UserService::new(&ctx);

        let user = service
            .add_user(NewUser::new("mod", "Mo", "Derator", "pw").with_role(Role::User))
            .await
            .unwrap();

        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_upgrade_role_only_once() {
        let (ctx, _, _) = test_context();
        let service = UserService::new(&ctx);
        let user = service
            .add_user(NewUser::new("jdoe", "John", "Doe", "pw"))
            .await
            .unwrap();

        let upgraded = service.upgrade_role(user.id).await.unwrap().unwrap();
        assert_eq!(upgraded.role, Role::User);

        assert!(service.upgrade_role(user.id).await.unwrap().is_none());
        assert_eq!(service.get_user(user.id).await.unwrap().role, Role::User);
    }

    #[tokio::test]
    async fn test_upgrade_role_ignores_admin() {
        let (ctx, _, _) = test_context();
        let service = UserService::new(&ctx);
        let admin = service
            .add_user(NewUser::new("root", "Ro", "Ot", "pw").with_role(Role::Admin))
            .await
            .unwrap();

        assert!(service.upgrade_role(admin.id).await.unwrap().is_none());
        assert_eq!(service.get_user(admin.id).await.unwrap().role, Role::Admin);
        assert!(service.admin_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_user() {
        let (ctx, _, _) = test_context();
        let service = UserService::new(&ctx);

        assert!(service.upgrade_role(UserId::new(99)).await.unwrap().is_none());
        assert!(service.find_user(UserId::new(99)).await.unwrap().is_none());
        assert!(!service.verify_password(UserId::new(99), "pw").await.unwrap());

        let err = service.get_user(UserId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::UserNotFound(id)) if id == UserId::new(99)
        ));
        assert_eq!(err.to_string(), "User not found: 99");
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        let ctx = failing_context();
        let service = UserService::new(&ctx);

        let err = service
            .add_user(NewUser::new("jdoe", "John", "Doe", "pw"))
            .await
            .unwrap_err();
        assert!(err.is_database());

        let err = service.upgrade_role(UserId::new(1)).await.unwrap_err();
        assert!(err.is_database());
    }
}
