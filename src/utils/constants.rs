// Constantes compartidas

/// Usuario autenticado (JSON sin contraseña)
pub const STORAGE_KEY_AUTH_USER: &str = "auth_user";

/// Verificaciones terminadas que se muestran en el resumen
pub const COMPLETED_PREVIEW_LIMIT: usize = 3;

/// Nombre que se manda como validador cuando no hay sesión
pub const UNKNOWN_VALIDATOR: &str = "USUARIO DESCONOCIDO";
