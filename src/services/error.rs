//! Errores de comunicación con la API de verificación.

use serde_json::Value;
use thiserror::Error;

/// Orden por defecto de los campos de donde se toma el mensaje del backend
pub const DEFAULT_MESSAGE_KEYS: &[&str] = &["detail", "message", "error"];

/// `Display` produce el texto que se muestra al operador.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Error de conexión: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Construye el error de una respuesta no-2xx. Usa el mensaje del cuerpo
    /// si existe; si no, `fallback` con el código de estado.
    pub fn from_response(status: u16, body: &str, keys: &[&str], fallback: &str) -> Self {
        let message = extract_error_message(body, keys)
            .unwrap_or_else(|| format!("Error ({}) {}", status, fallback));
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_)) || self.status() == Some(404)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Busca un mensaje legible en un cuerpo JSON de error.
///
/// Acepta un objeto (se revisan `keys` en orden, ignorando valores vacíos) o
/// un string JSON suelto. Cualquier otra cosa devuelve `None`.
pub fn extract_error_message(body: &str, keys: &[&str]) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body).ok()? {
        Value::Object(map) => keys.iter().find_map(|key| match map.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_message_and_error() {
        let body = r#"{"error": "E", "message": "M", "detail": "La verificación ya fue cerrada"}"#;
        assert_eq!(
            extract_error_message(body, DEFAULT_MESSAGE_KEYS).as_deref(),
            Some("La verificación ya fue cerrada")
        );
    }

    #[test]
    fn custom_order_prefers_error() {
        let body = r#"{"detail": "D", "error": "Consecutivo duplicado"}"#;
        assert_eq!(
            extract_error_message(body, &["error", "detail"]).as_deref(),
            Some("Consecutivo duplicado")
        );
    }

    #[test]
    fn empty_fields_are_skipped() {
        let body = r#"{"detail": "", "message": "Lote no encontrado"}"#;
        assert_eq!(
            extract_error_message(body, DEFAULT_MESSAGE_KEYS).as_deref(),
            Some("Lote no encontrado")
        );
    }

    #[test]
    fn bare_json_string_is_used() {
        assert_eq!(
            extract_error_message("\"Tarima llena\"", DEFAULT_MESSAGE_KEYS).as_deref(),
            Some("Tarima llena")
        );
    }

    #[test]
    fn html_or_empty_bodies_give_none() {
        assert_eq!(extract_error_message("<html>502</html>", DEFAULT_MESSAGE_KEYS), None);
        assert_eq!(extract_error_message("   ", DEFAULT_MESSAGE_KEYS), None);
        assert_eq!(extract_error_message(r#"{"title": "x", "status": 400}"#, DEFAULT_MESSAGE_KEYS), None);
    }

    #[test]
    fn fallback_includes_status() {
        let err = ApiError::from_response(500, "", DEFAULT_MESSAGE_KEYS, "al subir evidencia.");
        assert_eq!(err.to_string(), "Error (500) al subir evidencia.");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn server_message_is_displayed_verbatim() {
        let err = ApiError::from_response(409, r#"{"detail": "Ya existe una tarima abierta"}"#, DEFAULT_MESSAGE_KEYS, "x");
        assert_eq!(err.to_string(), "Ya existe una tarima abierta");
        assert!(!err.is_not_found());
        assert!(ApiError::from_response(404, "", DEFAULT_MESSAGE_KEYS, "x").is_not_found());
    }
}
