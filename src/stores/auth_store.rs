// ============================================================================
// AUTH STORE - Estado de autenticación (sin yewdux)
// ============================================================================

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore {
    pub user: Option<User>,
    /// Ya se revisó localStorage al arrancar
    pub restored: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthStore {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
