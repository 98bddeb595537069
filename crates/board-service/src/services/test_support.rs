//! In-memory repositories for service tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use board_common::PasswordService;
use board_core::entities::{Message, MessageWithAuthor, NewUser, User};
use board_core::traits::{MessageRepository, RepoResult, UserRepository};
use board_core::{DomainError, MessageId, Role, UserId};

use super::context::ServiceContext;

#[derive(Default)]
struct Store {
    users: Vec<(User, String)>,
    messages: Vec<Message>,
    links: Vec<(UserId, MessageId)>,
    next_user_id: i32,
    next_message_id: i32,
}

impl Store {
    fn insert_message(&mut self, content: &str) -> Message {
        self.next_message_id += 1;
        let message = Message {
            id: MessageId::new(self.next_message_id),
            // Spread timestamps so ordering never depends on clock resolution
            created_at: Utc::now() + Duration::seconds(i64::from(self.next_message_id)),
            content: content.to_string(),
        };
        self.messages.push(message.clone());
        message
    }
}

pub struct InMemoryUserRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryUserRepository {
    pub fn password_hash(&self, id: UserId) -> Option<String> {
        let store = self.store.lock().unwrap();
        store
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut store = self.store.lock().unwrap();
        store.next_user_id += 1;
        let created = User {
            id: UserId::new(store.next_user_id),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
        };
        store.users.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn admin_exists(&self) -> RepoResult<bool> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().any(|(u, _)| u.role == Role::Admin))
    }

    async fn upgrade_role(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut store = self.store.lock().unwrap();
        let upgraded = store
            .users
            .iter_mut()
            .find(|(u, _)| u.id == id && u.role == Role::Spectator)
            .map(|(u, _)| {
                u.role = Role::User;
                u.clone()
            });
        Ok(upgraded)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.password_hash(id))
    }
}

pub struct InMemoryMessageRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryMessageRepository {
    pub fn link_count(&self) -> usize {
        self.store.lock().unwrap().links.len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, content: &str) -> RepoResult<Message> {
        Ok(self.store.lock().unwrap().insert_message(content))
    }

    async fn create_for_user(&self, user_id: UserId, content: &str) -> RepoResult<Message> {
        let mut store = self.store.lock().unwrap();
        if !store.users.iter().any(|(u, _)| u.id == user_id) {
            return Err(DomainError::DatabaseError(
                "insert or update on table \"users_messages\" violates foreign key constraint"
                    .to_string(),
            ));
        }
        let message = store.insert_message(content);
        store.links.push((user_id, message.id));
        Ok(message)
    }

    async fn delete(&self, id: MessageId) -> RepoResult<u64> {
        let mut store = self.store.lock().unwrap();
        let before = store.messages.len();
        store.messages.retain(|m| m.id != id);
        store.links.retain(|(_, m)| *m != id);
        Ok((before - store.messages.len()) as u64)
    }

    async fn all_content(&self) -> RepoResult<Vec<String>> {
        let store = self.store.lock().unwrap();
        let mut messages = store.messages.clone();
        messages.sort_by_key(|m| m.id);
        Ok(messages.into_iter().map(|m| m.content).collect())
    }

    async fn all_with_authors(&self) -> RepoResult<Vec<MessageWithAuthor>> {
        let store = self.store.lock().unwrap();
        let mut joined: Vec<MessageWithAuthor> = store
            .links
            .iter()
            .filter_map(|(user_id, message_id)| {
                let (user, _) = store.users.iter().find(|(u, _)| u.id == *user_id)?;
                let message = store.messages.iter().find(|m| m.id == *message_id)?;
                Some(MessageWithAuthor {
                    id: message.id,
                    content: message.content.clone(),
                    created_at: message.created_at,
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone(),
                    role: user.role,
                })
            })
            .collect();
        joined.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(joined)
    }
}

/// Repository that fails every call the way a lost connection would
pub struct FailingRepository;

fn connection_lost<T>() -> RepoResult<T> {
    Err(DomainError::DatabaseError("connection closed".to_string()))
}

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_by_id(&self, _id: UserId) -> RepoResult<Option<User>> {
        connection_lost()
    }

    async fn create(&self, _user: &NewUser, _password_hash: &str) -> RepoResult<User> {
        connection_lost()
    }

    async fn admin_exists(&self) -> RepoResult<bool> {
        connection_lost()
    }

    async fn upgrade_role(&self, _id: UserId) -> RepoResult<Option<User>> {
        connection_lost()
    }

    async fn get_password_hash(&self, _id: UserId) -> RepoResult<Option<String>> {
        connection_lost()
    }
}

#[async_trait]
impl MessageRepository for FailingRepository {
    async fn create(&self, _content: &str) -> RepoResult<Message> {
        connection_lost()
    }

    async fn create_for_user(&self, _user_id: UserId, _content: &str) -> RepoResult<Message> {
        connection_lost()
    }

    async fn delete(&self, _id: MessageId) -> RepoResult<u64> {
        connection_lost()
    }

    async fn all_content(&self) -> RepoResult<Vec<String>> {
        connection_lost()
    }

    async fn all_with_authors(&self) -> RepoResult<Vec<MessageWithAuthor>> {
        connection_lost()
    }
}

fn fast_passwords() -> PasswordService {
    PasswordService::with_cost(1).unwrap()
}

/// Context over a fresh in-memory store, plus handles for inspecting it
pub fn test_context() -> (
    ServiceContext,
    Arc<InMemoryUserRepository>,
    Arc<InMemoryMessageRepository>,
) {
    let store = Arc::new(Mutex::new(Store::default()));
    let users = Arc::new(InMemoryUserRepository {
        store: Arc::clone(&store),
    });
    let messages = Arc::new(InMemoryMessageRepository { store });

    let ctx = ServiceContext::new(users.clone(), messages.clone(), fast_passwords());
    (ctx, users, messages)
}

pub fn failing_context() -> ServiceContext {
    let repo = Arc::new(FailingRepository);
    ServiceContext::new(repo.clone(), repo, fast_passwords())
}
