use std::sync::Arc;

use quill_core::DomainError;
use quill_core::domain::{User, UserCreate, UserStatus, UserUpdate};
use quill_core::ports::{BaseRepository, UserRepository};
use quill_core::services::{CertificationService, UserService};
use quill_core::testing::{FixedClock, FixedUuidGenerator, RecordingMailSender};
use quill_infra::InMemoryUserRepository;

struct Fixture {
    service: UserService,
    users: Arc<InMemoryUserRepository>,
    mail: Arc<RecordingMailSender>,
}

async fn fixture() -> Fixture {
    let users = Arc::new(InMemoryUserRepository::new());
    let mail = Arc::new(RecordingMailSender::new());
    let service = UserService::new(
        users.clone(),
        CertificationService::new(mail.clone(), "http://localhost:8080"),
        Arc::new(FixedClock::new(123_456_789)),
        Arc::new(FixedUuidGenerator::new("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa")),
    );

    users
        .save(User {
            id: Some(1),
            email: "email1@example.com".to_string(),
            nickname: "nickname1".to_string(),
            address: "address1".to_string(),
            certification_code: "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa".to_string(),
            status: UserStatus::Active,
            last_login_at: Some(100),
        })
        .await
        .unwrap();
    users
        .save(User {
            id: Some(2),
            email: "email2@example.com".to_string(),
            nickname: "nickname2".to_string(),
            address: "address2".to_string(),
            certification_code: "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab".to_string(),
            status: UserStatus::Pending,
            last_login_at: Some(100),
        })
        .await
        .unwrap();

    Fixture {
        service,
        users,
        mail,
    }
}

#[tokio::test]
async fn get_by_email_finds_active_user() {
    let f = fixture().await;

    let user = f.service.get_by_email("email1@example.com").await.unwrap();

    assert_eq!(user.nickname, "nickname1");
}

#[tokio::test]
async fn get_by_email_hides_pending_user() {
    let f = fixture().await;

    let result = f.service.get_by_email("email2@example.com").await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn get_by_id_finds_active_user() {
    let f = fixture().await;

    let user = f.service.get_by_id(1).await.unwrap();

    assert_eq!(user.nickname, "nickname1");
}

#[tokio::test]
async fn get_by_id_hides_pending_user() {
    let f = fixture().await;

    let err = f.service.get_by_id(2).await.unwrap_err();

    assert_eq!(err.to_string(), "Users with id 2 not found");
}

#[tokio::test]
async fn create_registers_pending_user_and_mails_code() {
    let f = fixture().await;

    let user = f
        .service
        .create(UserCreate {
            email: "email3@example.com".to_string(),
            nickname: "nickname3".to_string(),
            address: "address3".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, Some(3));
    assert_eq!(user.status, UserStatus::Pending);
    assert_eq!(user.certification_code, "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa");
    assert_eq!(user.last_login_at, None);

    let sent = f.mail.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "email3@example.com");
    assert!(sent[0].body.ends_with(
        "/api/users/3/verify?certificationCode=aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa"
    ));
}

#[tokio::test]
async fn create_with_taken_email_fails_without_mail() {
    let f = fixture().await;

    let result = f
        .service
        .create(UserCreate {
            email: "email1@example.com".to_string(),
            nickname: "dup".to_string(),
            address: "dup".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Repository(_))));
    assert!(f.mail.sent().is_empty());
}

#[tokio::test]
async fn update_changes_profile() {
    let f = fixture().await;

    f.service
        .update(
            1,
            UserUpdate {
                nickname: "update-nickname1".to_string(),
                address: "update-address1".to_string(),
            },
        )
        .await
        .unwrap();

    let user = f.service.get_by_id(1).await.unwrap();
    assert_eq!(user.id, Some(1));
    assert_eq!(user.email, "email1@example.com");
    assert_eq!(user.nickname, "update-nickname1");
    assert_eq!(user.address, "update-address1");
}

#[tokio::test]
async fn update_applies_to_pending_users_too() {
    let f = fixture().await;

    let user = f
        .service
        .update(
            2,
            UserUpdate {
                nickname: "renamed".to_string(),
                address: "address2".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(user.nickname, "renamed");
    assert_eq!(user.status, UserStatus::Pending);
}

#[tokio::test]
async fn update_unknown_user_is_not_found() {
    let f = fixture().await;

    let result = f
        .service
        .update(
            99,
            UserUpdate {
                nickname: "n".to_string(),
                address: "a".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn login_records_last_login_time() {
    let f = fixture().await;

    f.service.login(1).await.unwrap();

    let user = f.service.get_by_id(1).await.unwrap();
    assert_eq!(user.last_login_at, Some(123_456_789));
}

#[tokio::test]
async fn login_unknown_user_is_not_found() {
    let f = fixture().await;

    assert!(matches!(
        f.service.login(99).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn verify_email_activates_pending_user() {
    let f = fixture().await;

    f.service
        .verify_email(2, "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab")
        .await
        .unwrap();

    let user = f.service.get_by_id(2).await.unwrap();
    assert_eq!(user.status, UserStatus::Active);
}

#[tokio::test]
async fn verify_email_with_wrong_code_is_rejected_and_not_persisted() {
    let f = fixture().await;

    let result = f
        .service
        .verify_email(2, "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaac")
        .await;

    assert!(matches!(result, Err(DomainError::CertificationCodeMismatch)));
    let stored = f.users.find_by_id(2).await.unwrap().unwrap();
    assert_eq!(stored.status, UserStatus::Pending);
}

#[tokio::test]
async fn verify_email_unknown_user_is_not_found() {
    let f = fixture().await;

    let result = f.service.verify_email(99, "whatever").await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn registration_verification_scenario() {
    let users = Arc::new(InMemoryUserRepository::new());
    let service = UserService::new(
        users.clone(),
        CertificationService::new(Arc::new(RecordingMailSender::new()), "http://localhost:8080"),
        Arc::new(FixedClock::new(0)),
        Arc::new(FixedUuidGenerator::new("code-1")),
    );

    let user = service
        .create(UserCreate {
            email: "e@x.com".to_string(),
            nickname: "n".to_string(),
            address: "a".to_string(),
        })
        .await
        .unwrap();
    let id = user.id.unwrap();
    assert_eq!(user.status, UserStatus::Pending);
    assert!(service.get_by_email("e@x.com").await.is_err());

    let active = service.verify_email(id, "code-1").await.unwrap();
    assert_eq!(active.status, UserStatus::Active);

    assert!(matches!(
        service.verify_email(id, "code-2").await,
        Err(DomainError::CertificationCodeMismatch)
    ));
    let stored = users
        .find_by_id_and_status(id, UserStatus::Active)
        .await
        .unwrap();
    assert!(stored.is_some());
}
