use super::*;

#[test]
fn admin_login_yields_admin_hr_session() {
    let session = authenticate("admin@lms.com", "admin123").unwrap();
    assert_eq!(session.email, "admin@lms.com");
    assert_eq!(session.role, Role::AdminHr);
    assert_eq!(session.role.label(), "Admin / HR");
    assert_eq!(session.name, "Admin User");
}

#[test]
fn super_admin_and_trainer_accounts_exist() {
    assert_eq!(authenticate("superadmin@lms.com", "super123").unwrap().role, Role::SuperAdmin);
    assert_eq!(authenticate("trainer@lms.com", "trainer123").unwrap().role, Role::Trainer);
}

#[test]
fn email_lookup_is_case_insensitive_and_normalized() {
    let session = authenticate("Admin@LMS.com", "admin123").unwrap();
    assert_eq!(session.email, "admin@lms.com");
}

#[test]
fn password_comparison_is_exact() {
    assert_eq!(authenticate("admin@lms.com", "ADMIN123"), Err(LoginError::InvalidCredentials));
    assert_eq!(authenticate("admin@lms.com", "admin123 "), Err(LoginError::InvalidCredentials));
}

#[test]
fn unknown_email_is_rejected() {
    assert_eq!(authenticate("learner@lms.com", "learner123"), Err(LoginError::InvalidCredentials));
    assert_eq!(authenticate("", ""), Err(LoginError::InvalidCredentials));
}

#[test]
fn passwords_do_not_cross_accounts() {
    assert!(authenticate("trainer@lms.com", "admin123").is_err());
}

#[test]
fn login_error_message_is_fixed() {
    assert_eq!(
        LoginError::InvalidCredentials.to_string(),
        "Invalid email or password. Try: admin@lms.com / admin123"
    );
}

#[test]
fn demo_hints_list_all_accounts() {
    let hints: Vec<String> = demo_hints().collect();
    assert_eq!(
        hints,
        vec![
            "Admin: admin@lms.com / admin123".to_owned(),
            "Super Admin: superadmin@lms.com / super123".to_owned(),
            "Trainer: trainer@lms.com / trainer123".to_owned(),
        ]
    );
}
