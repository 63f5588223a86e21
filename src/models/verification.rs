use serde::{Deserialize, Serialize};
use crate::models::client::Client;
use crate::models::serde_helpers::{
    compact_number, lenient_client, lenient_f64, lenient_i64, string_or_number,
};

/// Estado de la verificación en el backend mientras sigue abierta
pub const ESTADO_EN_PROCESO: &str = "EN PROCESO";

/// Elemento de `GET /Verificacion/activas`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActiveVerification {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub lote: String,
    #[serde(deserialize_with = "string_or_number")]
    pub producto: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cliente: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub fecha_inicio: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub avance_tarimas: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VerificationStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Pendiente",
            VerificationStatus::InProgress => "En Progreso",
            VerificationStatus::Completed => "Completada",
            VerificationStatus::Rejected => "Rechazada",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "status-pending",
            VerificationStatus::InProgress => "status-in-progress",
            VerificationStatus::Completed => "status-completed",
            VerificationStatus::Rejected => "status-rejected",
        }
    }

    /// Sigue abierta (aparece en la lista de pendientes)
    pub fn is_open(&self) -> bool {
        matches!(self, VerificationStatus::Pending | VerificationStatus::InProgress)
    }
}

/// Vista de lista de una verificación (derivada de `ActiveVerification`)
#[derive(Clone, PartialEq, Debug)]
pub struct VerificationSummary {
    pub id: i64,
    pub product_name: String,
    pub lot_number: String,
    pub client: String,
    pub created_at: String,
    pub status: VerificationStatus,
    pub pallets: i64,
    pub notes: String,
}

/// `GET /Verificacion/dashboard/{id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub verificacion_id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub producto_info: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub lote_orden: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub piezas_meta: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub piezas_actuales: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub porcentaje_avance: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cajas_actuales: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub tarimas_actuales: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub tarimas_totales_estimadas: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub estado: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub tiempo_transcurrido_minutos: i64,
    /// `None` cuando el backend manda un cliente que no es subsistema
    #[serde(default, deserialize_with = "lenient_client")]
    pub cliente: Option<Client>,
}

impl DashboardData {
    pub fn is_in_process(&self) -> bool {
        self.estado.trim().eq_ignore_ascii_case(ESTADO_EN_PROCESO)
    }
}

/// `POST /Verificacion/iniciar`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StartVerificationRequest {
    pub producto_id: i64,
    pub lote: String,
    pub cliente: String,
    pub validadores: String,
    pub print_card: String,
    pub tipo_bolsa: String,
    #[serde(serialize_with = "compact_number")]
    pub piezas_por_wicket: f64,
    #[serde(serialize_with = "compact_number")]
    pub cantidad_orden: f64,
    pub unidad_orden: String,
    #[serde(serialize_with = "compact_number")]
    pub piezas_por_caja: f64,
    pub cajas_por_tarima: i64,
    pub wickets_por_caja: i64,
    pub perforaciones: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StartVerificationResponse {
    pub id: i64,
}

/// `POST /Verificacion/registrar-escaneo` (BIOFLEX/QUALITY, por trazabilidad)
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub verificacion_id: i64,
    pub trazabilidad: String,
    pub qty_uom_etiqueta: String,
    #[serde(serialize_with = "compact_number")]
    pub piezas_por_caja_db: f64,
    pub cajas_por_tarima: i64,
    #[serde(serialize_with = "compact_number")]
    pub cantidad_orden: f64,
    pub unidad_orden: String,
}

/// `POST /Verificacion/registrar-escaneo-destiny`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DestinyScanRequest {
    pub verificacion_id: i64,
    pub orden_produccion: String,
    pub consecutivo: i64,
    pub item_number: String,
    pub qty_uom_etiqueta: String,
}

/// `PUT /Verificacion/terminar`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FinishVerificationRequest {
    pub verificacion_id: i64,
    pub muestreo: String,
    pub defectos_encontrados: String,
    pub comentarios: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_parses_backend_payload() {
        let json = r#"{
            "verificacionId": 12,
            "productoInfo": "5135 - BOLSA CAMISETA",
            "loteOrden": 25132,
            "piezasMeta": 500000,
            "piezasActuales": 125000,
            "porcentajeAvance": 25.0,
            "cajasActuales": 125,
            "tarimasActuales": 4,
            "tarimasTotalesEstimadas": 17,
            "estado": "EN PROCESO",
            "tiempoTranscurridoMinutos": 95,
            "cliente": "BIOFLEX"
        }"#;
        let dashboard: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.verificacion_id, 12);
        assert_eq!(dashboard.lote_orden, "25132");
        assert_eq!(dashboard.cliente, Some(Client::Bioflex));
        assert!(dashboard.is_in_process());
    }

    #[test]
    fn finished_dashboard_is_not_in_process() {
        let json = r#"{"verificacionId": 3, "estado": "TERMINADA", "cliente": "DESTINY"}"#;
        let dashboard: DashboardData = serde_json::from_str(json).unwrap();
        assert!(!dashboard.is_in_process());
        assert_eq!(dashboard.cajas_actuales, 0);
    }

    #[test]
    fn dashboard_tolerates_free_text_or_null_client() {
        let json = r#"{"verificacionId": 12, "estado": "EN PROCESO", "cliente": "WALMART"}"#;
        let dashboard: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.cliente, None);
        assert!(dashboard.is_in_process());

        let json = r#"{"verificacionId": 12, "estado": null, "productoInfo": null, "cliente": null}"#;
        let dashboard: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.cliente, None);
        assert_eq!(dashboard.estado, "");
        assert_eq!(dashboard.producto_info, "");
    }

    #[test]
    fn start_request_uses_backend_field_names() {
        let request = StartVerificationRequest {
            producto_id: 4389,
            lote: "28596".to_string(),
            cliente: "WALMART".to_string(),
            validadores: "Inspector".to_string(),
            print_card: "E-4814-A_R-1".to_string(),
            tipo_bolsa: "CAMISETA".to_string(),
            piezas_por_wicket: 166.5,
            cantidad_orden: 500.0,
            unidad_orden: "Millares".to_string(),
            piezas_por_caja: 1000.0,
            cajas_por_tarima: 30,
            wickets_por_caja: 6,
            perforaciones: "4".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["productoId"], 4389);
        assert_eq!(value["printCard"], "E-4814-A_R-1");
        assert_eq!(value["piezasPorWicket"], 166.5);
        assert_eq!(value["cantidadOrden"], 500);
        assert_eq!(value["cajasPorTarima"], 30);
        assert_eq!(value["perforaciones"], "4");
    }

    #[test]
    fn active_verification_accepts_numeric_lot() {
        let json = r#"[{"id": 7, "lote": 25132, "producto": "5135", "cliente": "BIOFLEX", "fechaInicio": "2026-10-14T08:30:00", "avanceTarimas": 2}]"#;
        let items: Vec<ActiveVerification> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].lote, "25132");
        assert_eq!(items[0].avance_tarimas, 2);
    }

    #[test]
    fn active_verification_accepts_null_client_and_date() {
        let json = r#"[{"id": 8, "lote": "25133", "producto": "5135", "cliente": null, "fechaInicio": null}]"#;
        let items: Vec<ActiveVerification> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].cliente, "");
        assert_eq!(items[0].fecha_inicio, "");
    }
}
