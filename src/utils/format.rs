// ============================================================================
// FORMAT - Textos de presentación (tiempos, porcentajes, fechas)
// ============================================================================

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MESES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// `95` -> `"1 h 35 min"`, `40` -> `"40 min"`
pub fn format_elapsed_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{} h {} min", hours, rest)
    } else {
        format!("{} min", rest)
    }
}

/// Porcentaje acotado a 0-100 con un decimal
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    format!("{:.1}%", value)
}

/// Fecha del backend: RFC 3339, ISO sin zona o solo fecha
pub fn parse_server_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `dd mmm yyyy` en español; si no parsea se muestra tal cual
pub fn format_date_es(value: &str) -> String {
    match parse_server_date(value) {
        Some(date) => format!(
            "{:02} {} {}",
            date.day(),
            MESES[date.month0() as usize],
            date.year()
        ),
        None => value.to_string(),
    }
}
