// ============================================================================
// SCAN VIEWMODEL - Registro de cajas en una verificación abierta
// ============================================================================
// Dos pasos por modal: el primer submit busca la etiqueta, el segundo
// registra la caja. BIOFLEX y QUALITY usan trazabilidad; DESTINY usa las
// tres llaves de shipping + consecutivo.
// ============================================================================

use crate::models::{
    ConsolidatedProduct, DestinyEtiquetaData, DestinyScanRequest, DestinySearch, LabelRecord,
    ScanRequest,
};
use crate::services::{fetch_destiny_label, ApiClient};

pub const MSG_TRACE_REQUIRED: &str = "Por favor, ingrese el código de trazabilidad.";
pub const MSG_NOT_TRACEABLE: &str = "La etiqueta no tiene código de trazabilidad.";
pub const MSG_SEARCH_FIELDS: &str = "Complete todos los campos de búsqueda.";
pub const MSG_INVALID_CONSECUTIVO: &str = "Debe ingresar un valor válido para el Consecutivo.";

pub struct ScanViewModel {
    api_client: ApiClient,
}

impl Default for ScanViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn register_box(&self, verificacion_id: i64, product: &ConsolidatedProduct) -> Result<(), String> {
        let request = build_scan_request(verificacion_id, product)?;
        log::info!("📦 [SCAN] Registrando caja {} en verificación {}", request.trazabilidad, verificacion_id);
        self.api_client
            .register_scan(&request)
            .await
            .map_err(|e| e.to_string())
    }

    /// Primer submit del modal DESTINY (solo la etiqueta)
    pub async fn lookup_destiny_box(&self, search: &DestinySearch) -> Result<DestinyEtiquetaData, String> {
        if !search.is_complete() {
            return Err(MSG_SEARCH_FIELDS.to_string());
        }
        fetch_destiny_label(&self.api_client, search)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn register_destiny_box(
        &self,
        verificacion_id: i64,
        label: &DestinyEtiquetaData,
        consecutivo: &str,
    ) -> Result<(), String> {
        let request = build_destiny_scan_request(verificacion_id, label, consecutivo)?;
        log::info!(
            "📦 [SCAN] Registrando caja Destiny {} #{} en verificación {}",
            request.item_number,
            request.consecutivo,
            verificacion_id
        );
        self.api_client
            .register_destiny_scan(&request)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Body de `registrar-escaneo`. Solo aplica a etiquetas con trazabilidad.
pub fn build_scan_request(verificacion_id: i64, product: &ConsolidatedProduct) -> Result<ScanRequest, String> {
    let LabelRecord::Bioflex(label) = &product.label else {
        return Err(MSG_NOT_TRACEABLE.to_string());
    };
    let valores = &product.valores_tecnicos;

    Ok(ScanRequest {
        verificacion_id,
        trazabilidad: label.trazabilidad.clone(),
        qty_uom_etiqueta: label.uom.clone(),
        piezas_por_caja_db: label.valor_piezas().unwrap_or(valores.piezas_por_caja),
        cajas_por_tarima: valores.cajas_xtarima,
        cantidad_orden: product.orden.cantidad,
        unidad_orden: product.orden.clave_unidad.clone(),
    })
}

/// Primer submit del modal por trazabilidad: el código es obligatorio
pub fn validate_trace_code(code: &str) -> Result<String, String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(MSG_TRACE_REQUIRED.to_string());
    }
    Ok(code.to_string())
}

/// Consecutivo entero positivo
pub fn parse_consecutivo(value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MSG_INVALID_CONSECUTIVO.to_string()),
    }
}

pub fn build_destiny_scan_request(
    verificacion_id: i64,
    label: &DestinyEtiquetaData,
    consecutivo: &str,
) -> Result<DestinyScanRequest, String> {
    let consecutivo = parse_consecutivo(consecutivo)?;
    let nested = label
        .prod_etiquetas_destiny
        .as_ref()
        .ok_or_else(|| MSG_SEARCH_FIELDS.to_string())?;

    Ok(DestinyScanRequest {
        verificacion_id,
        orden_produccion: label.orden.to_string(),
        consecutivo,
        item_number: nested.item_no.clone(),
        qty_uom_etiqueta: nested.qty_uom.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EtiquetaData, OrdenData, ValoresTecnicosData};

    fn product(valor: &str) -> ConsolidatedProduct {
        let json = format!(
            r#"{{"id": 77, "claveProducto": "5135", "orden": 25132, "trazabilidad": "604025132030", "uom": "MIL", "valor": "{}"}}"#,
            valor
        );
        let label: EtiquetaData = serde_json::from_str(&json).unwrap();
        ConsolidatedProduct {
            label: LabelRecord::Bioflex(label),
            orden: OrdenData { unidad: "Millares".into(), clave_unidad: "MIL".into(), cantidad: 500.0 },
            valores_tecnicos: ValoresTecnicosData {
                piezas_por_caja: 100.0,
                wicket_por_caja: 6,
                cajas_xtarima: 30,
                cant_perforaciones: 4,
            },
        }
    }

    fn destiny_label() -> DestinyEtiquetaData {
        serde_json::from_str(
            r#"{"id": 4389, "claveProducto": "61953", "orden": 28596, "prodEtiquetasDestiny": {"itemNo": "61953-11", "inventoryLot": "13915", "shippingUnitID": "28596", "uom": "BAGS", "qtyUOM": "1000"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn scan_request_prefers_label_value() {
        let request = build_scan_request(9, &product("250")).unwrap();
        assert_eq!(request.piezas_por_caja_db, 250.0);
        assert_eq!(request.qty_uom_etiqueta, "MIL");
        assert_eq!(request.unidad_orden, "MIL");
        assert_eq!(request.cajas_por_tarima, 30);

        let request = build_scan_request(9, &product("")).unwrap();
        assert_eq!(request.piezas_por_caja_db, 100.0);
    }

    #[test]
    fn scan_request_serializes_backend_names() {
        let value = serde_json::to_value(build_scan_request(9, &product("250")).unwrap()).unwrap();
        assert_eq!(value["verificacionId"], 9);
        assert_eq!(value["trazabilidad"], "604025132030");
        assert_eq!(value["piezasPorCajaDb"], 250);
        assert_eq!(value["cantidadOrden"], 500);
    }

    #[test]
    fn trace_code_is_required_and_trimmed() {
        assert_eq!(validate_trace_code("  "), Err(MSG_TRACE_REQUIRED.to_string()));
        assert_eq!(validate_trace_code(" 604025132030 "), Ok("604025132030".to_string()));
    }

    #[test]
    fn scan_request_rejects_labels_without_traceability() {
        let mut product = product("250");
        product.label = LabelRecord::Destiny(destiny_label());
        assert_eq!(build_scan_request(1, &product), Err(MSG_NOT_TRACEABLE.to_string()));
    }

    #[test]
    fn consecutivo_must_be_positive_integer() {
        assert_eq!(parse_consecutivo(" 12 "), Ok(12));
        for bad in ["", "0", "-3", "abc", "1.5"] {
            assert_eq!(parse_consecutivo(bad), Err(MSG_INVALID_CONSECUTIVO.to_string()));
        }
    }

    #[test]
    fn destiny_request_uses_nested_label_fields() {
        let request = build_destiny_scan_request(9, &destiny_label(), "7").unwrap();
        assert_eq!(request.orden_produccion, "28596");
        assert_eq!(request.item_number, "61953-11");
        assert_eq!(request.qty_uom_etiqueta, "1000");
        assert_eq!(request.consecutivo, 7);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["ordenProduccion"], "28596");
        assert_eq!(value["qtyUomEtiqueta"], "1000");
    }
}
