//! Hardcoded demo credential table and the login check.
//!
//! There is no authentication backend: a login is a case-insensitive email
//! lookup followed by an exact password comparison.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use super::session::{Role, Session};

/// Message shown for any failed login attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password. Try: admin@lms.com / admin123";

#[derive(Clone, Copy, Debug)]
struct DemoAccount {
    email: &'static str,
    password: &'static str,
    role: Role,
    name: &'static str,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount { email: "admin@lms.com", password: "admin123", role: Role::AdminHr, name: "Admin User" },
    DemoAccount { email: "superadmin@lms.com", password: "super123", role: Role::SuperAdmin, name: "Super Admin" },
    DemoAccount { email: "trainer@lms.com", password: "trainer123", role: Role::Trainer, name: "Trainer User" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
}

/// Check `email`/`password` against the demo table.
///
/// # Errors
///
/// Returns `LoginError::InvalidCredentials` for an unknown email or a
/// password mismatch.
pub fn authenticate(email: &str, password: &str) -> Result<Session, LoginError> {
    let email = email.to_lowercase();
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
        .map(|account| Session { email, role: account.role, name: account.name.to_owned() })
        .ok_or(LoginError::InvalidCredentials)
}

/// Lines for the "Demo Credentials" box in the login modal.
pub fn demo_hints() -> impl Iterator<Item = String> {
    [Role::AdminHr, Role::SuperAdmin, Role::Trainer].into_iter().filter_map(|role| {
        let account = DEMO_ACCOUNTS.iter().find(|a| a.role == role)?;
        Some(format!("{}: {} / {}", role.short_label(), account.email, account.password))
    })
}
