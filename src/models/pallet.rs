use serde::{Deserialize, Serialize};
use crate::models::serde_helpers::{lenient_f64, lenient_i64, opt_string_or_number, string_or_number};

/// Tarima de una verificación (`tarimas-activas` / `tarimas-terminadas`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pallet {
    pub id: i64,
    #[serde(default, alias = "numero", deserialize_with = "lenient_i64")]
    pub numero_tarima: i64,
    #[serde(default, alias = "cajasEscaneadas", deserialize_with = "lenient_i64")]
    pub cajas_actuales: i64,
    #[serde(default, alias = "cajasPorTarima", deserialize_with = "lenient_i64")]
    pub cajas_meta: i64,
    #[serde(default)]
    pub creado_por: Option<String>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub cajas: Vec<BoxDetail>,
}

impl Pallet {
    /// Avance de la tarima en porcentaje (0 si no tiene meta)
    pub fn progress_percent(&self) -> f64 {
        if self.cajas_meta <= 0 {
            return 0.0;
        }
        let pct = self.cajas_actuales as f64 / self.cajas_meta as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    pub fn is_full(&self) -> bool {
        self.cajas_meta > 0 && self.cajas_actuales >= self.cajas_meta
    }

    pub fn defect_count(&self) -> usize {
        self.cajas.iter().filter(|c| c.tiene_defecto).count()
    }
}

/// Caja registrada en una tarima
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BoxDetail {
    #[serde(alias = "trazabilidad", deserialize_with = "string_or_number")]
    pub identificador: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cantidad: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub piezas_auditadas: i64,
    #[serde(default)]
    pub tiene_defecto: bool,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub comentario_defecto: Option<String>,
    #[serde(default)]
    pub fecha_escaneo: Option<String>,
}

/// `POST /Verificacion/iniciar-tarima`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StartPalletRequest {
    pub verificacion_id: i64,
    pub creado_por: String,
}

/// `POST /Verificacion/terminar-tarima-manual`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FinishPalletRequest {
    pub verificacion_id: i64,
    pub tarima_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pallet(actuales: i64, meta: i64) -> Pallet {
        Pallet {
            id: 1,
            numero_tarima: 1,
            cajas_actuales: actuales,
            cajas_meta: meta,
            creado_por: None,
            fecha_inicio: None,
            fecha_fin: None,
            cajas: Vec::new(),
        }
    }

    #[test]
    fn progress_is_clamped_and_safe_without_target() {
        assert_eq!(pallet(15, 30).progress_percent(), 50.0);
        assert_eq!(pallet(40, 30).progress_percent(), 100.0);
        assert_eq!(pallet(5, 0).progress_percent(), 0.0);
        assert!(pallet(30, 30).is_full());
        assert!(!pallet(3, 0).is_full());
    }

    #[test]
    fn parses_pallet_with_alias_fields_and_boxes() {
        let json = r#"{
            "id": 44,
            "numero": 2,
            "cajasEscaneadas": 12,
            "cajasPorTarima": 30,
            "creadoPor": "Inspector",
            "cajas": [
                {"trazabilidad": 604025132030, "cantidad": 1000, "piezasAuditadas": 10, "tieneDefecto": true, "comentarioDefecto": "sello abierto", "fechaEscaneo": "2026-10-14T09:12:00"},
                {"identificador": "604025132031", "cantidad": "1000"}
            ]
        }"#;
        let parsed: Pallet = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.numero_tarima, 2);
        assert_eq!(parsed.cajas_actuales, 12);
        assert_eq!(parsed.cajas_meta, 30);
        assert_eq!(parsed.cajas[0].identificador, "604025132030");
        assert_eq!(parsed.defect_count(), 1);
        assert!(!parsed.cajas[1].tiene_defecto);
    }

    #[test]
    fn finish_request_omits_missing_reason() {
        let request = FinishPalletRequest { verificacion_id: 5, tarima_id: 9, motivo: None };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"verificacionId":5,"tarimaId":9}"#
        );
    }
}
