// tests/user_command_service_unit.rs
use std::sync::Arc;

use pagewright::application::commands::users::{LoginUserCommand, SeedAdminCommand};
use pagewright::application::error::ApplicationError;
use pagewright::domain::user::Role;

mod support;

use support::{DummyClock, EDITOR_ID, InMemoryUserRepo, TestContext, editor};

fn login(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn login_issues_token_for_valid_credentials() {
    let ctx = TestContext::new();
    let result = ctx
        .services
        .user_commands
        .login(login("  Editor@Example.com ", "Secret-pass1!"))
        .await
        .unwrap();

    assert_eq!(result.user.id, EDITOR_ID);
    assert_eq!(result.user.role, Role::Editor);
    assert_eq!(result.token.token, format!("token-for-{EDITOR_ID}"));
    assert_eq!(result.token.expires_in, 3600);
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_part_was_wrong() {
    let ctx = TestContext::new();
    for command in [
        login("editor@example.com", "wrong-password"),
        login("nobody@example.com", "Secret-pass1!"),
        login("not-an-email", "Secret-pass1!"),
    ] {
        let err = ctx
            .services
            .user_commands
            .login(command)
            .await
            .err()
            .expect("login should fail");
        match err {
            ApplicationError::Unauthorized(msg) => assert_eq!(msg, "invalid credentials"),
            other => panic!("expected unauthorized, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn disabled_account_cannot_log_in() {
    let ctx = TestContext::new();
    ctx.users.deactivate(EDITOR_ID);
    let err = ctx
        .services
        .user_commands
        .login(login("editor@example.com", "Secret-pass1!"))
        .await
        .err()
        .expect("login should fail");
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn seed_creates_admin_only_on_empty_store() {
    let ctx = TestContext::with_parts(InMemoryUserRepo::empty(), Arc::new(DummyClock));
    let seeded = ctx
        .services
        .user_commands
        .seed_admin(SeedAdminCommand {
            email: "root@example.com".into(),
            password: "Bootstrap-pass9!".into(),
            name: Some("Root".into()),
        })
        .await
        .unwrap()
        .expect("admin created");
    assert_eq!(seeded.role, Role::Admin);
    assert_eq!(seeded.email, "root@example.com");

    let again = ctx
        .services
        .user_commands
        .seed_admin(SeedAdminCommand {
            email: "other@example.com".into(),
            password: "Bootstrap-pass9!".into(),
            name: None,
        })
        .await
        .unwrap();
    assert!(again.is_none());

    let result = ctx
        .services
        .user_commands
        .login(login("root@example.com", "Bootstrap-pass9!"))
        .await
        .unwrap();
    assert_eq!(result.user.id, seeded.id);
}

#[tokio::test]
async fn seed_rejects_weak_password() {
    let ctx = TestContext::with_parts(InMemoryUserRepo::empty(), Arc::new(DummyClock));
    for password in ["short1!A", "alllowercase-123", "NoDigitsHere!!"] {
        let err = ctx
            .services
            .user_commands
            .seed_admin(SeedAdminCommand {
                email: "root@example.com".into(),
                password: password.into(),
                name: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)), "{password}");
    }
}

#[tokio::test]
async fn profile_reports_sorted_capabilities_and_remaining_lifetime() {
    let ctx = TestContext::with_parts(InMemoryUserRepo::seeded(), Arc::new(DummyClock));
    let profile = ctx
        .services
        .user_queries
        .get_profile(&editor())
        .await
        .unwrap();

    assert_eq!(profile.user.id, EDITOR_ID);
    assert_eq!(profile.expires_in, 3600);
    let actions: Vec<&str> = profile
        .capabilities
        .iter()
        .map(|cap| cap.action.as_str())
        .collect();
    assert_eq!(actions, vec!["create", "delete", "publish", "read", "update"]);
}

#[tokio::test]
async fn profile_of_disabled_account_is_forbidden() {
    let ctx = TestContext::new();
    ctx.users.deactivate(EDITOR_ID);
    let err = ctx
        .services
        .user_queries
        .get_profile(&editor())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
