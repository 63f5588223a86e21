// ============================================================================
// SERDE HELPERS - Tolerancia a números que llegan como texto (y viceversa)
// ============================================================================

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::Deserialize;
use serde_json::Value;

use crate::models::client::Client;

/// Acepta `"1000"`, `1000` o `null` y devuelve siempre texto
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("se esperaba texto o número, llegó {}", other))),
    }
}

/// Igual que `string_or_number` pero conserva la ausencia del valor
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("se esperaba texto o número, llegó {}", other))),
    }
}

/// Subsistema conocido o `None`: texto libre, vacío o `null` no rompen la respuesta
pub fn lenient_client<'de, D>(deserializer: D) -> Result<Option<Client>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = opt_string_or_number(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<Client>().ok()))
}

/// Entero tolerante: acepta enteros, decimales (se redondean) y texto numérico.
/// `null` y texto vacío valen 0.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .ok_or_else(|| de::Error::custom(format!("número fuera de rango: {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|f| f.round() as i64)
            .map_err(|_| de::Error::custom(format!("'{}' no es un número", s))),
        other => Err(de::Error::custom(format!("se esperaba un número, llegó {}", other))),
    }
}

/// Decimal tolerante: acepta números y texto numérico. `null` vale 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("número fuera de rango: {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("'{}' no es un número", s))),
        other => Err(de::Error::custom(format!("se esperaba un número, llegó {}", other))),
    }
}

/// Serializa un `f64` sin parte decimal como entero (`500` en lugar de `500.0`);
/// el backend rechaza `500.0` en campos enteros.
pub fn compact_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Interpreta texto numérico de formularios/etiquetas; lo que no parsea vale 0
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(deserialize_with = "string_or_number")]
        texto: String,
        #[serde(deserialize_with = "lenient_i64")]
        entero: i64,
        #[serde(deserialize_with = "lenient_f64")]
        decimal: f64,
    }

    #[derive(Serialize)]
    struct Compact {
        #[serde(serialize_with = "compact_number")]
        valor: f64,
    }

    #[test]
    fn numbers_and_strings_are_interchangeable() {
        let parsed: Lenient = serde_json::from_str(r#"{"texto": 1000, "entero": "30", "decimal": "2.5"}"#).unwrap();
        assert_eq!(parsed.texto, "1000");
        assert_eq!(parsed.entero, 30);
        assert_eq!(parsed.decimal, 2.5);
    }

    #[test]
    fn nulls_become_zero_values() {
        let parsed: Lenient = serde_json::from_str(r#"{"texto": null, "entero": null, "decimal": ""}"#).unwrap();
        assert_eq!(parsed.texto, "");
        assert_eq!(parsed.entero, 0);
        assert_eq!(parsed.decimal, 0.0);
    }

    #[derive(Deserialize)]
    struct WithClient {
        #[serde(default, deserialize_with = "lenient_client")]
        cliente: Option<Client>,
    }

    #[test]
    fn unknown_or_null_client_is_none() {
        let parse = |json: &str| serde_json::from_str::<WithClient>(json).unwrap().cliente;
        assert_eq!(parse(r#"{"cliente": "destiny"}"#), Some(Client::Destiny));
        assert_eq!(parse(r#"{"cliente": "WALMART"}"#), None);
        assert_eq!(parse(r#"{"cliente": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn fractional_integer_is_rounded() {
        let parsed: Lenient = serde_json::from_str(r#"{"texto": "x", "entero": 5.6, "decimal": 1}"#).unwrap();
        assert_eq!(parsed.entero, 6);
    }

    #[test]
    fn garbage_integer_is_rejected() {
        let parsed = serde_json::from_str::<Lenient>(r#"{"texto": "x", "entero": "treinta", "decimal": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn whole_floats_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Compact { valor: 500.0 }).unwrap(), r#"{"valor":500}"#);
        assert_eq!(serde_json::to_string(&Compact { valor: 166.5 }).unwrap(), r#"{"valor":166.5}"#);
    }

    #[test]
    fn parse_number_accepts_decimal_comma() {
        assert_eq!(parse_number(" 12,5 "), 12.5);
        assert_eq!(parse_number("1000"), 1000.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
    }
}
