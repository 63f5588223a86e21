// ============================================================================
// LABEL SERVICE - Cadena etiqueta -> orden -> valores técnicos
// ============================================================================
// Consolida los datos del producto antes de iniciar una verificación.
// Cada paso corta la cadena al primer error.
// ============================================================================

use crate::models::{
    ConsolidatedProduct, DestinyEtiquetaData, DestinySearch, EtiquetaData, LabelRecord, OrdenData,
    QualityEtiquetaData, QualitySearch, ValoresTecnicosData,
};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub const DESTINY_INCOMPLETE: &str = "Datos de producto Destiny incompletos o no encontrados.";

/// Catálogos que consulta la cadena de consolidación
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn label_by_traceability(&self, code: &str) -> Result<EtiquetaData, ApiError>;
    async fn destiny_search(&self, search: &DestinySearch) -> Result<DestinyEtiquetaData, ApiError>;
    async fn quality_search(&self, search: &QualitySearch) -> Result<QualityEtiquetaData, ApiError>;
    async fn order_detail(&self, orden: i64, clave_producto: &str) -> Result<OrdenData, ApiError>;
    async fn technical_values(&self, clave_producto: &str) -> Result<Vec<ValoresTecnicosData>, ApiError>;
}

impl CatalogSource for ApiClient {
    async fn label_by_traceability(&self, code: &str) -> Result<EtiquetaData, ApiError> {
        ApiClient::label_by_traceability(self, code).await
    }

    async fn destiny_search(&self, search: &DestinySearch) -> Result<DestinyEtiquetaData, ApiError> {
        ApiClient::destiny_search(self, search).await
    }

    async fn quality_search(&self, search: &QualitySearch) -> Result<QualityEtiquetaData, ApiError> {
        ApiClient::quality_search(self, search).await
    }

    async fn order_detail(&self, orden: i64, clave_producto: &str) -> Result<OrdenData, ApiError> {
        ApiClient::order_detail(self, orden, clave_producto).await
    }

    async fn technical_values(&self, clave_producto: &str) -> Result<Vec<ValoresTecnicosData>, ApiError> {
        ApiClient::technical_values(self, clave_producto).await
    }
}

/// Reemplaza el mensaje de un rechazo del servidor por uno que nombra la
/// llave que falló. Errores de red y de parseo se conservan.
fn step_error(err: ApiError, message: String) -> ApiError {
    match err {
        ApiError::Http { status, .. } => ApiError::Http { status, message },
        ApiError::NotFound(_) => ApiError::NotFound(message),
        other => other,
    }
}

/// BIOFLEX: trazabilidad -> orden -> valores técnicos.
/// Código vacío no consulta nada (`Ok(None)`).
pub async fn fetch_bioflex<S: CatalogSource>(
    source: &S,
    code: &str,
) -> Result<Option<ConsolidatedProduct>, ApiError> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(None);
    }

    log::info!("🔎 [LABEL] Consolidando BIOFLEX para trazabilidad {}", code);
    let label = source.label_by_traceability(code).await.map_err(|e| {
        step_error(e, format!("Trazabilidad {} no encontrada o inválida.", code))
    })?;

    let product = enrich(source, LabelRecord::Bioflex(label)).await?;
    Ok(Some(product))
}

/// DESTINY: búsqueda por shipping -> orden -> valores técnicos
pub async fn fetch_destiny<S: CatalogSource>(
    source: &S,
    search: &DestinySearch,
) -> Result<ConsolidatedProduct, ApiError> {
    let label = fetch_destiny_label(source, search).await?;
    enrich(source, LabelRecord::Destiny(label)).await
}

/// Solo la etiqueta DESTINY, sin enriquecer (modal de escaneo)
pub async fn fetch_destiny_label<S: CatalogSource>(
    source: &S,
    search: &DestinySearch,
) -> Result<DestinyEtiquetaData, ApiError> {
    if !search.is_complete() {
        return Err(ApiError::Validation(
            "Complete ItemNo, InventoryLot y ShippingUnitId para Destiny.".to_string(),
        ));
    }

    log::info!(
        "🔎 [LABEL] Buscando DESTINY {} / {} / {}",
        search.item_no,
        search.inventory_lot,
        search.shipping_unit_id
    );
    let label = source.destiny_search(search).await?;
    if label.prod_etiquetas_destiny.is_none() {
        log::warn!("⚠️ [LABEL] Respuesta Destiny sin prodEtiquetasDestiny");
        return Err(ApiError::NotFound(DESTINY_INCOMPLETE.to_string()));
    }
    Ok(label)
}

/// QUALITY: búsqueda por PO2 + ItemNumber -> orden -> valores técnicos
pub async fn fetch_quality<S: CatalogSource>(
    source: &S,
    search: &QualitySearch,
) -> Result<ConsolidatedProduct, ApiError> {
    if !search.is_complete() {
        return Err(ApiError::Validation(
            "Complete PO2 e Item Number para Quality.".to_string(),
        ));
    }

    log::info!("🔎 [LABEL] Buscando QUALITY PO2 {} / Item {}", search.po2, search.item_number);
    let label = source.quality_search(search).await?;
    enrich(source, LabelRecord::Quality(label)).await
}

/// Pasos 2 y 3 comunes a los tres subsistemas
async fn enrich<S: CatalogSource>(source: &S, label: LabelRecord) -> Result<ConsolidatedProduct, ApiError> {
    let orden_id = label.orden();
    let clave = label.clave_producto().to_string();

    let orden = source.order_detail(orden_id, &clave).await.map_err(|e| {
        step_error(e, format!("Error al obtener el detalle de la orden {}.", orden_id))
    })?;

    let missing_values = format!("No se encontraron valores técnicos para el producto {}.", clave);
    let valores = source
        .technical_values(&clave)
        .await
        .map_err(|e| step_error(e, missing_values.clone()))?;

    let valores_tecnicos = valores
        .into_iter()
        .next()
        .ok_or(ApiError::NotFound(missing_values))?;

    log::info!("✅ [LABEL] Producto {} consolidado (orden {})", clave, orden_id);
    Ok(ConsolidatedProduct {
        label,
        orden,
        valores_tecnicos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct MockCatalog {
        label: Result<EtiquetaData, ApiError>,
        destiny: Result<DestinyEtiquetaData, ApiError>,
        quality: Result<QualityEtiquetaData, ApiError>,
        orden: Result<OrdenData, ApiError>,
        valores: Result<Vec<ValoresTecnicosData>, ApiError>,
        calls: RefCell<Vec<String>>,
    }

    impl MockCatalog {
        fn happy() -> Self {
            Self {
                label: Ok(serde_json::from_str(
                    r#"{"id": 77, "area": "IMPRESION", "claveProducto": "5135", "nombreProducto": "BOLSA CAMISETA", "orden": 25132, "trazabilidad": "604025132030", "uom": "MIL", "valor": "250"}"#,
                ).unwrap()),
                destiny: Ok(serde_json::from_str(
                    r#"{"id": 4389, "claveProducto": "61953", "nombreProducto": "BOLSA DESTINY", "orden": 28596, "prodEtiquetasDestiny": {"itemNo": "61953-11", "inventoryLot": "13915", "shippingUnitID": "28596", "uom": "BAGS", "qtyUOM": "1000"}}"#,
                ).unwrap()),
                quality: Ok(serde_json::from_str(
                    r#"{"id": 901, "claveProducto": "7001", "orden": 30110, "po2": "PO-77", "itemNumber": "A1"}"#,
                ).unwrap()),
                orden: Ok(OrdenData { unidad: "Millares".into(), clave_unidad: "MIL".into(), cantidad: 500.0 }),
                valores: Ok(vec![ValoresTecnicosData {
                    piezas_por_caja: 100.0,
                    wicket_por_caja: 6,
                    cajas_xtarima: 30,
                    cant_perforaciones: 4,
                }]),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl CatalogSource for MockCatalog {
        async fn label_by_traceability(&self, code: &str) -> Result<EtiquetaData, ApiError> {
            self.record(format!("label:{}", code));
            self.label.clone()
        }

        async fn destiny_search(&self, search: &DestinySearch) -> Result<DestinyEtiquetaData, ApiError> {
            self.record(format!("destiny:{}", search.shipping_unit_id));
            self.destiny.clone()
        }

        async fn quality_search(&self, search: &QualitySearch) -> Result<QualityEtiquetaData, ApiError> {
            self.record(format!("quality:{}", search.po2));
            self.quality.clone()
        }

        async fn order_detail(&self, orden: i64, clave_producto: &str) -> Result<OrdenData, ApiError> {
            self.record(format!("orden:{}:{}", orden, clave_producto));
            self.orden.clone()
        }

        async fn technical_values(&self, clave_producto: &str) -> Result<Vec<ValoresTecnicosData>, ApiError> {
            self.record(format!("valores:{}", clave_producto));
            self.valores.clone()
        }
    }

    fn http(status: u16) -> ApiError {
        ApiError::Http { status, message: "mensaje del servidor".into() }
    }

    #[test]
    fn empty_code_is_a_no_op() {
        let catalog = MockCatalog::happy();
        assert_eq!(block_on(fetch_bioflex(&catalog, "   ")), Ok(None));
        assert!(catalog.calls.borrow().is_empty());
    }

    #[test]
    fn bioflex_chain_runs_three_steps_in_order() {
        let catalog = MockCatalog::happy();
        let product = block_on(fetch_bioflex(&catalog, " 604025132030 ")).unwrap().unwrap();
        assert_eq!(product.label.id(), 77);
        assert_eq!(product.valores_tecnicos.cajas_xtarima, 30);
        assert_eq!(
            *catalog.calls.borrow(),
            vec!["label:604025132030", "orden:25132:5135", "valores:5135"]
        );
    }

    #[test]
    fn label_rejection_names_the_code_and_stops() {
        let mut catalog = MockCatalog::happy();
        catalog.label = Err(http(404));
        let err = block_on(fetch_bioflex(&catalog, "123")).unwrap_err();
        assert_eq!(err.to_string(), "Trazabilidad 123 no encontrada o inválida.");
        assert_eq!(catalog.calls.borrow().len(), 1);
    }

    #[test]
    fn order_and_technical_failures_name_their_keys() {
        let mut catalog = MockCatalog::happy();
        catalog.orden = Err(http(500));
        let err = block_on(fetch_bioflex(&catalog, "604025132030")).unwrap_err();
        assert_eq!(err.to_string(), "Error al obtener el detalle de la orden 25132.");
        assert_eq!(catalog.calls.borrow().len(), 2);

        let mut catalog = MockCatalog::happy();
        catalog.valores = Err(http(404));
        let err = block_on(fetch_bioflex(&catalog, "604025132030")).unwrap_err();
        assert_eq!(err.to_string(), "No se encontraron valores técnicos para el producto 5135.");
    }

    #[test]
    fn empty_technical_values_is_an_error() {
        let mut catalog = MockCatalog::happy();
        catalog.valores = Ok(Vec::new());
        let err = block_on(fetch_bioflex(&catalog, "604025132030")).unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound("No se encontraron valores técnicos para el producto 5135.".to_string())
        );
    }

    #[test]
    fn network_errors_pass_through_unchanged() {
        let mut catalog = MockCatalog::happy();
        catalog.label = Err(ApiError::Network("Failed to fetch".into()));
        let err = block_on(fetch_bioflex(&catalog, "1")).unwrap_err();
        assert_eq!(err, ApiError::Network("Failed to fetch".into()));
    }

    #[test]
    fn destiny_requires_all_keys_before_calling() {
        let catalog = MockCatalog::happy();
        let err = block_on(fetch_destiny(&catalog, &DestinySearch::new("61953-11", "", "28596"))).unwrap_err();
        assert_eq!(err.to_string(), "Complete ItemNo, InventoryLot y ShippingUnitId para Destiny.");
        assert!(catalog.calls.borrow().is_empty());
    }

    #[test]
    fn destiny_without_nested_block_is_incomplete() {
        let mut catalog = MockCatalog::happy();
        if let Ok(label) = catalog.destiny.as_mut() {
            label.prod_etiquetas_destiny = None;
        }
        let search = DestinySearch::new("61953-11", "13915", "28596");
        let err = block_on(fetch_destiny(&catalog, &search)).unwrap_err();
        assert_eq!(err.to_string(), DESTINY_INCOMPLETE);
        assert_eq!(catalog.calls.borrow().len(), 1);
    }

    #[test]
    fn destiny_label_alone_skips_enrichment() {
        let catalog = MockCatalog::happy();
        let search = DestinySearch::new("61953-11", "13915", "28596");
        let label = block_on(fetch_destiny_label(&catalog, &search)).unwrap();
        assert_eq!(label.qty_uom_piezas(), 1000.0);
        assert_eq!(*catalog.calls.borrow(), vec!["destiny:28596"]);
    }

    #[test]
    fn destiny_and_quality_chains_enrich_with_order_and_values() {
        let catalog = MockCatalog::happy();
        let search = DestinySearch::new("61953-11", "13915", "28596");
        let product = block_on(fetch_destiny(&catalog, &search)).unwrap();
        assert_eq!(product.label.orden(), 28596);
        assert_eq!(product.orden.unidad, "Millares");

        let catalog = MockCatalog::happy();
        let product = block_on(fetch_quality(&catalog, &QualitySearch::new("PO-77", "A1"))).unwrap();
        assert_eq!(product.label.id(), 901);
        assert_eq!(
            *catalog.calls.borrow(),
            vec!["quality:PO-77", "orden:30110:7001", "valores:7001"]
        );
    }
}
