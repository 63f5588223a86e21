// ============================================================================
// AUTH SERVICE - Login local contra la lista de usuarios de demostración
// ============================================================================

use crate::models::{DemoUser, User, DEMO_USERS};
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_AUTH_USER};

pub const MSG_SELECT_USER: &str = "Seleccione un usuario.";
pub const MSG_INVALID_CREDENTIALS: &str = "Credenciales inválidas. Intente nuevamente.";

/// Busca el usuario por id o email y valida la contraseña exacta
pub fn authenticate(users: &[DemoUser], identifier: &str, password: &str) -> Result<User, String> {
    if identifier.trim().is_empty() {
        return Err(MSG_SELECT_USER.to_string());
    }

    users
        .iter()
        .find(|u| u.matches_identifier(identifier) && u.password == password)
        .map(DemoUser::to_user)
        .ok_or_else(|| MSG_INVALID_CREDENTIALS.to_string())
}

/// Filtro del selector de usuarios (nombre o nómina)
pub fn search_users<'a>(users: &'a [DemoUser], query: &str) -> Vec<&'a DemoUser> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.id.to_lowercase().contains(&query)
        })
        .collect()
}

/// Login y persistencia en localStorage (`auth_user`)
pub fn login(identifier: &str, password: &str) -> Result<User, String> {
    let user = authenticate(DEMO_USERS, identifier, password).map_err(|e| {
        log::warn!("🔐 [AUTH] Login rechazado para '{}'", identifier.trim());
        e
    })?;

    if let Err(e) = save_to_storage(STORAGE_KEY_AUTH_USER, &user) {
        // La sesión sigue válida en memoria aunque no se persista
        log::error!("❌ [AUTH] No se pudo guardar la sesión: {}", e);
    }
    log::info!("✅ [AUTH] Sesión iniciada: {} ({})", user.name, user.role);
    Ok(user)
}

/// Sesión guardada de una visita anterior
pub fn restore() -> Option<User> {
    let user = load_from_storage::<User>(STORAGE_KEY_AUTH_USER)?;
    log::info!("✅ [AUTH] Sesión restaurada: {}", user.name);
    Some(user)
}

pub fn logout() {
    if let Err(e) = remove_from_storage(STORAGE_KEY_AUTH_USER) {
        log::error!("❌ [AUTH] Error cerrando sesión: {}", e);
    }
    log::info!("👋 [AUTH] Sesión cerrada");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_by_id_or_email_ignores_case() {
        let user = authenticate(DEMO_USERS, "2", "inspector123").unwrap();
        assert_eq!(user.email, "inspector@bioflex.com");

        let user = authenticate(DEMO_USERS, " ADMIN@Bioflex.com ", "admin123").unwrap();
        assert_eq!(user.name, "Administrador");
    }

    #[test]
    fn password_must_match_exactly() {
        assert_eq!(
            authenticate(DEMO_USERS, "1", "ADMIN123"),
            Err(MSG_INVALID_CREDENTIALS.to_string())
        );
        assert_eq!(
            authenticate(DEMO_USERS, "desconocido@bioflex.com", "admin123"),
            Err(MSG_INVALID_CREDENTIALS.to_string())
        );
    }

    #[test]
    fn missing_user_asks_for_selection() {
        assert_eq!(authenticate(DEMO_USERS, "  ", "x"), Err(MSG_SELECT_USER.to_string()));
    }

    #[test]
    fn stored_user_has_no_password() {
        let user = authenticate(DEMO_USERS, "3", "test123").unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("test123"));
    }

    #[test]
    fn user_search_matches_name_or_payroll_id() {
        assert_eq!(search_users(DEMO_USERS, "").len(), DEMO_USERS.len());
        let found = search_users(DEMO_USERS, "pruebas");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
        assert_eq!(search_users(DEMO_USERS, "1")[0].name, "Administrador");
        assert!(search_users(DEMO_USERS, "zzz").is_empty());
    }
}
