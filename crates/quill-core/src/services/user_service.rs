use std::sync::Arc;

use crate::domain::{User, UserCreate, UserStatus, UserUpdate};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, UserRepository, UuidGenerator};

use super::CertificationService;

const ENTITY: &str = "Users";

/// User account lifecycle: registration, lookup, profile edits, login and
/// email verification.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    certification: CertificationService,
    clock: Arc<dyn Clock>,
    uuid: Arc<dyn UuidGenerator>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        certification: CertificationService,
        clock: Arc<dyn Clock>,
        uuid: Arc<dyn UuidGenerator>,
    ) -> Self {
        Self {
            users,
            certification,
            clock,
            uuid,
        }
    }

    /// Active user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.users
            .find_by_email_and_status(email, UserStatus::Active)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, format!("email {email}")))
    }

    /// Active user by id.
    pub async fn get_by_id(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id_and_status(id, UserStatus::Active)
            .await?
            .ok_or_else(|| Self::missing(id))
    }

    /// Register a pending user and mail the certification link.
    pub async fn create(&self, input: UserCreate) -> Result<User, DomainError> {
        let user = User::from_create(input, self.uuid.as_ref());
        let user = self.users.save(user).await?;

        let id = user
            .id
            .ok_or_else(|| RepoError::Query("saved user has no id".to_string()))?;
        self.certification
            .send(&user.email, id, &user.certification_code)
            .await;

        Ok(user)
    }

    pub async fn update(&self, id: i64, input: UserUpdate) -> Result<User, DomainError> {
        let user = self.load(id).await?.update(&input);
        Ok(self.users.save(user).await?)
    }

    pub async fn login(&self, id: i64) -> Result<User, DomainError> {
        let user = self.load(id).await?.login(self.clock.as_ref());
        Ok(self.users.save(user).await?)
    }

    pub async fn verify_email(&self, id: i64, certification_code: &str) -> Result<User, DomainError> {
        let user = self.load(id).await?.certify(certification_code)?;
        Ok(self.users.save(user).await?)
    }

    /// Any-status lookup used by the mutating operations.
    async fn load(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::missing(id))
    }

    fn missing(id: i64) -> DomainError {
        DomainError::not_found(ENTITY, format!("id {id}"))
    }
}
