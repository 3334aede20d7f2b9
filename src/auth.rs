//! Authentication and session state.
//!
//! Credentials are matched locally against plaintext passwords: seed
//! accounts first, registered accounts second, first match wins. There is
//! no token, no expiry and no server round-trip; a reload re-derives the
//! session synchronously from the store.

use crate::error::{AppError, Result};
use crate::models::{Registration, SessionUser, User};
use crate::repo::Repo;
use crate::seed;
use crate::store::{Store, StoreKey, next_id, today};
use parking_lot::Mutex;

/// Loose email shape check: one `@`, nonempty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Require a logged-in user before a mutation; no state changes on
/// rejection.
pub fn require_user(user: Option<&SessionUser>) -> Result<&SessionUser> {
    user.ok_or(AppError::Unauthenticated)
}

/// Authentication service.
pub struct AuthService {
    repo: Repo,
    registration_enabled: bool,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(repo: Repo, registration_enabled: bool) -> Self {
        Self {
            repo,
            registration_enabled,
        }
    }

    /// Match credentials and return the session projection of the account.
    ///
    /// Seed accounts are consulted before registered accounts, so a seed
    /// account wins a username tie. Failure changes no state.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionUser> {
        let seed_match = seed::seed_users()
            .into_iter()
            .find(|u| u.username == username && u.password == password);

        let user = match seed_match {
            Some(u) => u,
            None => self
                .repo
                .registered_users()?
                .into_iter()
                .find(|u| u.username == username && u.password == password)
                .ok_or_else(|| AppError::validation("account", "用户名或密码错误"))?,
        };

        Ok(user.session())
    }

    /// Register a new account and append it to the registered collection.
    ///
    /// Duplicate checks scan the registered collection only; a duplicate of
    /// a seed-only username is accepted here and loses the tie at login.
    /// Any rejection happens before anything is written.
    pub fn register(&self, input: &Registration) -> Result<User> {
        if !self.registration_enabled {
            return Err(AppError::validation("username", "注册功能已关闭"));
        }

        let username = input.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("username", "用户名不能为空"));
        }
        if username.chars().count() < 3 {
            return Err(AppError::validation("username", "用户名至少需要3个字符"));
        }

        let email = input.email.trim();
        if email.is_empty() {
            return Err(AppError::validation("email", "邮箱不能为空"));
        }
        if !is_valid_email(email) {
            return Err(AppError::validation("email", "请输入有效的邮箱地址"));
        }

        if input.password.is_empty() {
            return Err(AppError::validation("password", "密码不能为空"));
        }
        if input.password.chars().count() < 6 {
            return Err(AppError::validation("password", "密码至少需要6个字符"));
        }
        if input.password != input.confirm_password {
            return Err(AppError::validation(
                "confirmPassword",
                "两次输入的密码不一致",
            ));
        }

        let existing = self.repo.registered_users()?;
        if existing.iter().any(|u| u.username == username) {
            return Err(AppError::validation("username", "用户名已存在"));
        }
        if existing.iter().any(|u| u.email == email) {
            return Err(AppError::validation("email", "邮箱已被注册"));
        }

        let user = User {
            id: next_id(),
            username: username.to_string(),
            email: email.to_string(),
            password: input.password.clone(),
            role: input.role,
            avatar: format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                username
            ),
            join_date: today(),
            courses_completed: 0,
            total_score: 0,
            level: input.role.initial_level().to_string(),
        };

        self.repo.add_registered_user(&user)?;
        Ok(user)
    }
}

/// Single owner of the current-user state.
///
/// The in-memory copy is hydrated from the `currentUser` key exactly once,
/// when the session is attached, and never re-read afterwards; the
/// persisted copy stays an implementation detail behind this type.
pub struct Session {
    store: Store,
    current: Mutex<Option<SessionUser>>,
}

impl Session {
    /// Attach to a store, hydrating the in-memory copy once.
    ///
    /// A malformed persisted session degrades to logged-out.
    pub fn attach(store: Store) -> Result<Self> {
        let current = store.get_value(&StoreKey::CurrentUser)?;
        Ok(Self {
            store,
            current: Mutex::new(current),
        })
    }

    /// The current user, if any.
    pub fn current(&self) -> Option<SessionUser> {
        self.current.lock().clone()
    }

    /// Record a successful login in both the memory and persisted copies.
    pub fn login(&self, user: SessionUser) -> Result<()> {
        self.store.set_value(&StoreKey::CurrentUser, &user)?;
        *self.current.lock() = Some(user);
        Ok(())
    }

    /// Clear both copies.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(&StoreKey::CurrentUser)?;
        *self.current.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn level_derived_from_role() {
        assert_eq!(Role::Student.initial_level(), "新学员");
        assert_eq!(Role::Teacher.initial_level(), "讲师");
        assert_eq!(Role::Admin.initial_level(), "管理员");
    }
}
