use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ports::{Clock, UuidGenerator};

/// Lifecycle stage of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Registered, waiting for email certification.
    Pending,
    Active,
    Resigned,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "PENDING",
            UserStatus::Active => "ACTIVE",
            UserStatus::Resigned => "RESIGNED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(UserStatus::Pending),
            "ACTIVE" => Ok(UserStatus::Active),
            "RESIGNED" => Ok(UserStatus::Resigned),
            other => Err(format!("unknown user status: {other}")),
        }
    }
}

/// Input for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreate {
    pub email: String,
    pub nickname: String,
    pub address: String,
}

/// Input for changing a user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub nickname: String,
    pub address: String,
}

/// User entity - an account at one point of its lifecycle.
///
/// Values are never changed in place; every transition returns a new `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the repository on first save.
    pub id: Option<i64>,
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub certification_code: String,
    pub status: UserStatus,
    /// Epoch milliseconds of the latest login.
    pub last_login_at: Option<i64>,
}

impl User {
    /// Build a pending user with a freshly generated certification code.
    pub fn from_create(input: UserCreate, uuid: &dyn UuidGenerator) -> Self {
        Self {
            id: None,
            email: input.email,
            nickname: input.nickname,
            address: input.address,
            certification_code: uuid.random(),
            status: UserStatus::Pending,
            last_login_at: None,
        }
    }

    /// Replace the profile fields.
    pub fn update(&self, input: &UserUpdate) -> Self {
        Self {
            nickname: input.nickname.clone(),
            address: input.address.clone(),
            ..self.clone()
        }
    }

    /// Stamp the login time.
    pub fn login(&self, clock: &dyn Clock) -> Self {
        Self {
            last_login_at: Some(clock.millis()),
            ..self.clone()
        }
    }

    /// Activate the account if `code` equals the stored certification code.
    ///
    /// The current status is not inspected: a matching code on an already
    /// active user yields an active user again.
    pub fn certify(&self, code: &str) -> Result<Self, DomainError> {
        if self.certification_code != code {
            return Err(DomainError::CertificationCodeMismatch);
        }

        Ok(Self {
            status: UserStatus::Active,
            ..self.clone()
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
