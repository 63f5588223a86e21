// ============================================================================
// NEW VERIFICATION VIEWMODEL - Búsqueda del producto e inicio de verificación
// ============================================================================
// Lógica de negocio del formulario de alta - SIN estado de Yew
// Devuelve valores, los hooks actualizan el estado
// ============================================================================

use crate::models::serde_helpers::parse_number;
use crate::models::{
    Client, ConsolidatedProduct, DestinySearch, LabelRecord, QualitySearch,
    StartVerificationRequest, User,
};
use crate::services::{fetch_bioflex, fetch_destiny, fetch_quality, ApiClient};
use crate::utils::UNKNOWN_VALIDATOR;

pub const MSG_MANUAL_FIELDS: &str = "Por favor, complete todos los campos manuales requeridos.";
pub const MSG_DESTINY_FIELDS: &str = "Complete ItemNo, InventoryLot y ShippingUnitId para Destiny.";
pub const MSG_QUALITY_FIELDS: &str = "Complete PO2 e Item Number para Quality.";

/// Llaves de búsqueda según el subsistema elegido
#[derive(Clone, PartialEq, Debug)]
pub enum LookupInput {
    Bioflex { trazabilidad: String },
    Destiny(DestinySearch),
    Quality(QualitySearch),
}

impl LookupInput {
    pub fn client(&self) -> Client {
        match self {
            LookupInput::Bioflex { .. } => Client::Bioflex,
            LookupInput::Destiny(_) => Client::Destiny,
            LookupInput::Quality(_) => Client::Quality,
        }
    }
}

/// Campos capturados a mano en la fase 2
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ManualInputs {
    pub cliente: String,
    pub tipo_bolsa: String,
    pub piezas_por_wicket: String,
}

impl ManualInputs {
    /// Devuelve las piezas por wicket ya parseadas
    pub fn validate(&self) -> Result<f64, String> {
        let piezas = parse_number(&self.piezas_por_wicket);
        if self.cliente.trim().is_empty() || self.tipo_bolsa.trim().is_empty() || piezas <= 0.0 {
            return Err(MSG_MANUAL_FIELDS.to_string());
        }
        Ok(piezas)
    }
}

/// ViewModel de alta - SOLO lógica de negocio
pub struct NewVerificationViewModel {
    api_client: ApiClient,
}

impl Default for NewVerificationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl NewVerificationViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Fase 0 -> 1. `Ok(None)` cuando no hay nada que buscar.
    pub async fn lookup(&self, input: &LookupInput) -> Result<Option<ConsolidatedProduct>, String> {
        log::info!("🔎 [NEW] Búsqueda {}", input.client());
        match input {
            LookupInput::Bioflex { trazabilidad } => fetch_bioflex(&self.api_client, trazabilidad)
                .await
                .map_err(|e| e.to_string()),
            LookupInput::Destiny(search) => {
                if !search.is_complete() {
                    return Err(MSG_DESTINY_FIELDS.to_string());
                }
                fetch_destiny(&self.api_client, search)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string())
            }
            LookupInput::Quality(search) => {
                if !search.is_complete() {
                    return Err(MSG_QUALITY_FIELDS.to_string());
                }
                fetch_quality(&self.api_client, search)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string())
            }
        }
    }

    /// Fase 2: valida, arma el body y crea la verificación. Devuelve el id.
    pub async fn start(
        &self,
        product: &ConsolidatedProduct,
        manual: &ManualInputs,
        user: Option<&User>,
    ) -> Result<i64, String> {
        let request = build_start_request(product, manual, user)?;
        let created = self
            .api_client
            .start_verification(&request)
            .await
            .map_err(|e| e.to_string())?;
        Ok(created.id)
    }
}

/// Piezas por caja que se envían al iniciar, según el subsistema
pub fn piezas_por_caja(product: &ConsolidatedProduct) -> f64 {
    match &product.label {
        LabelRecord::Bioflex(_) => product.valores_tecnicos.piezas_por_caja * 10.0,
        LabelRecord::Destiny(label) => label.qty_uom_piezas(),
        LabelRecord::Quality(label) => label
            .qty_uom
            .as_deref()
            .map(parse_number)
            .filter(|q| *q > 0.0)
            .unwrap_or(product.valores_tecnicos.piezas_por_caja),
    }
}

pub fn build_start_request(
    product: &ConsolidatedProduct,
    manual: &ManualInputs,
    user: Option<&User>,
) -> Result<StartVerificationRequest, String> {
    let piezas_por_wicket = manual.validate()?;
    let valores = &product.valores_tecnicos;

    let perforaciones = if valores.cant_perforaciones == 0 {
        String::new()
    } else {
        valores.cant_perforaciones.to_string()
    };

    Ok(StartVerificationRequest {
        producto_id: product.label.id(),
        lote: product.label.orden().to_string(),
        cliente: manual.cliente.trim().to_string(),
        validadores: user
            .map(|u| u.name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_VALIDATOR.to_string()),
        print_card: product.label.print_card().unwrap_or_default().to_string(),
        tipo_bolsa: manual.tipo_bolsa.trim().to_string(),
        piezas_por_wicket,
        cantidad_orden: product.orden.cantidad,
        unidad_orden: product.orden.unidad.clone(),
        piezas_por_caja: piezas_por_caja(product),
        cajas_por_tarima: valores.cajas_xtarima,
        wickets_por_caja: valores.wicket_por_caja,
        perforaciones,
    })
}

/// Sugerencia de piezas por wicket (solo DESTINY): qtyUOM / wicketPorCaja
pub fn wicket_suggestion(product: &ConsolidatedProduct) -> Option<String> {
    let LabelRecord::Destiny(label) = &product.label else {
        return None;
    };
    let qty = label.qty_uom_piezas();
    let wickets = product.valores_tecnicos.wicket_por_caja;
    if qty > 0.0 && wickets > 0 {
        Some(format!("{:.2}", qty / wickets as f64))
    } else {
        None
    }
}

pub fn success_message(verificacion_id: i64) -> String {
    format!("Verificación {} iniciada. Redirigiendo...", verificacion_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DestinyEtiquetaData, EtiquetaData, OrdenData, QualityEtiquetaData, ValoresTecnicosData};

    fn valores() -> ValoresTecnicosData {
        ValoresTecnicosData {
            piezas_por_caja: 100.0,
            wicket_por_caja: 6,
            cajas_xtarima: 30,
            cant_perforaciones: 4,
        }
    }

    fn orden() -> OrdenData {
        OrdenData { unidad: "Millares".into(), clave_unidad: "MIL".into(), cantidad: 500.0 }
    }

    fn bioflex() -> ConsolidatedProduct {
        let label: EtiquetaData = serde_json::from_str(
            r#"{"id": 77, "claveProducto": "5135", "orden": 25132, "trazabilidad": "604025132030", "uom": "MIL", "printCard": "PC-1"}"#,
        )
        .unwrap();
        ConsolidatedProduct { label: LabelRecord::Bioflex(label), orden: orden(), valores_tecnicos: valores() }
    }

    fn destiny(qty: &str) -> ConsolidatedProduct {
        let json = format!(
            r#"{{"id": 4389, "claveProducto": "61953", "orden": 28596, "printCard": "E-4814-A_R-1", "prodEtiquetasDestiny": {{"itemNo": "61953-11", "inventoryLot": "13915", "shippingUnitID": "28596", "uom": "BAGS", "qtyUOM": "{}"}}}}"#,
            qty
        );
        let label: DestinyEtiquetaData = serde_json::from_str(&json).unwrap();
        ConsolidatedProduct { label: LabelRecord::Destiny(label), orden: orden(), valores_tecnicos: valores() }
    }

    fn manual() -> ManualInputs {
        ManualInputs {
            cliente: "WALMART".into(),
            tipo_bolsa: "CAMISETA".into(),
            piezas_por_wicket: "166.67".into(),
        }
    }

    fn inspector() -> User {
        User { id: "2".into(), name: "Inspector".into(), email: "inspector@bioflex.com".into(), role: "Inspector de Calidad".into() }
    }

    #[test]
    fn bioflex_multiplies_pieces_per_box_by_ten() {
        let request = build_start_request(&bioflex(), &manual(), Some(&inspector())).unwrap();
        assert_eq!(request.piezas_por_caja, 1000.0);
        assert_eq!(request.producto_id, 77);
        assert_eq!(request.lote, "25132");
        assert_eq!(request.unidad_orden, "Millares");
        assert_eq!(request.validadores, "Inspector");
        assert_eq!(request.perforaciones, "4");
        assert_eq!(request.piezas_por_wicket, 166.67);
    }

    #[test]
    fn destiny_uses_label_qty_uom() {
        let request = build_start_request(&destiny("1000"), &manual(), None).unwrap();
        assert_eq!(request.piezas_por_caja, 1000.0);
        assert_eq!(request.print_card, "E-4814-A_R-1");
        assert_eq!(request.validadores, UNKNOWN_VALIDATOR);

        let request = build_start_request(&destiny("abc"), &manual(), None).unwrap();
        assert_eq!(request.piezas_por_caja, 0.0);
    }

    #[test]
    fn quality_prefers_label_qty_then_technical_value() {
        let mut label: QualityEtiquetaData = serde_json::from_str(
            r#"{"id": 901, "claveProducto": "7001", "orden": 30110, "qtyUOM": "750"}"#,
        )
        .unwrap();
        let product = ConsolidatedProduct {
            label: LabelRecord::Quality(label.clone()),
            orden: orden(),
            valores_tecnicos: valores(),
        };
        assert_eq!(piezas_por_caja(&product), 750.0);

        label.qty_uom = None;
        let product = ConsolidatedProduct { label: LabelRecord::Quality(label), ..product };
        assert_eq!(piezas_por_caja(&product), 100.0);
    }

    #[test]
    fn zero_perforations_are_sent_empty() {
        let mut product = bioflex();
        product.valores_tecnicos.cant_perforaciones = 0;
        let request = build_start_request(&product, &manual(), None).unwrap();
        assert_eq!(request.perforaciones, "");
    }

    #[test]
    fn manual_inputs_are_required() {
        let mut inputs = manual();
        inputs.piezas_por_wicket = "0".into();
        assert_eq!(inputs.validate(), Err(MSG_MANUAL_FIELDS.to_string()));

        let mut inputs = manual();
        inputs.tipo_bolsa = "  ".into();
        assert_eq!(
            build_start_request(&bioflex(), &inputs, None),
            Err(MSG_MANUAL_FIELDS.to_string())
        );
    }

    #[test]
    fn suggestion_only_for_destiny_with_both_values() {
        assert_eq!(wicket_suggestion(&destiny("1000")).as_deref(), Some("166.67"));
        assert_eq!(wicket_suggestion(&destiny("0")), None);
        assert_eq!(wicket_suggestion(&bioflex()), None);

        let mut product = destiny("1000");
        product.valores_tecnicos.wicket_por_caja = 0;
        assert_eq!(wicket_suggestion(&product), None);
    }

    #[test]
    fn lookup_input_reports_its_client() {
        assert_eq!(LookupInput::Bioflex { trazabilidad: "1".into() }.client(), Client::Bioflex);
        assert_eq!(LookupInput::Quality(QualitySearch::default()).client(), Client::Quality);
        assert_eq!(success_message(15), "Verificación 15 iniciada. Redirigiendo...");
    }
}
