// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra la API de
// verificación y traduce las respuestas no-2xx a ApiError
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::{
    ActiveVerification, DashboardData, DestinyEtiquetaData, DestinyScanRequest, DestinySearch,
    EtiquetaData, FinishPalletRequest, FinishVerificationRequest, OrdenData, Pallet,
    QualityEtiquetaData, QualitySearch, ScanRequest, StartPalletRequest,
    StartVerificationRequest, StartVerificationResponse, ValoresTecnicosData,
};
use crate::services::error::{ApiError, DEFAULT_MESSAGE_KEYS};

/// El registro de cajas DESTINY devuelve la causa en `error`
const DESTINY_SCAN_MESSAGE_KEYS: &[&str] = &["error", "detail", "message"];

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // VERIFICACIONES
    // ========================================================================

    /// Verificaciones abiertas
    pub async fn get_active_verifications(&self) -> Result<Vec<ActiveVerification>, ApiError> {
        let url = self.url("/Verificacion/activas");
        log::info!("📋 [API] GET {}", url);

        let response = send(json_headers(Request::get(&url))).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al cargar las verificaciones activas.").await
    }

    pub async fn get_dashboard(&self, verificacion_id: i64) -> Result<DashboardData, ApiError> {
        let url = self.url(&format!("/Verificacion/dashboard/{}", verificacion_id));
        log::info!("📊 [API] GET {}", url);

        let response = send(json_headers(Request::get(&url))).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al obtener detalles del dashboard.").await
    }

    /// Crea la verificación y devuelve su id
    pub async fn start_verification(
        &self,
        request: &StartVerificationRequest,
    ) -> Result<StartVerificationResponse, ApiError> {
        let url = self.url("/Verificacion/iniciar");
        log::info!(
            "🚀 [API] POST {} (producto {}, lote {}, cliente {})",
            url,
            request.producto_id,
            request.lote,
            request.cliente
        );

        let response = send_json(Request::post(&url), request).await?;
        let created: StartVerificationResponse =
            read_json(response, DEFAULT_MESSAGE_KEYS, "al iniciar la verificación.").await?;
        log::info!("✅ [API] Verificación creada: {}", created.id);
        Ok(created)
    }

    pub async fn finish_verification(&self, request: &FinishVerificationRequest) -> Result<(), ApiError> {
        let url = self.url("/Verificacion/terminar");
        log::info!("🏁 [API] PUT {} (verificación {})", url, request.verificacion_id);

        let response = send_json(Request::put(&url), request).await?;
        expect_success(response, DEFAULT_MESSAGE_KEYS, "al finalizar la verificación.").await
    }

    pub async fn reopen_verification(&self, verificacion_id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/Verificacion/reabrir/{}", verificacion_id));
        log::info!("🔓 [API] PUT {}", url);

        let response = send(json_headers(Request::put(&url))).await?;
        expect_success(response, DEFAULT_MESSAGE_KEYS, "al reabrir la verificación.").await
    }

    // ========================================================================
    // ESCANEOS Y EVIDENCIA
    // ========================================================================

    pub async fn register_scan(&self, request: &ScanRequest) -> Result<(), ApiError> {
        let url = self.url("/Verificacion/registrar-escaneo");
        log::info!("📦 [API] POST {} (trazabilidad {})", url, request.trazabilidad);

        let response = send_json(Request::post(&url), request).await?;
        expect_success(response, DEFAULT_MESSAGE_KEYS, "al registrar el escaneo.").await
    }

    pub async fn register_destiny_scan(&self, request: &DestinyScanRequest) -> Result<(), ApiError> {
        let url = self.url("/Verificacion/registrar-escaneo-destiny");
        log::info!(
            "📦 [API] POST {} (orden {}, consecutivo {})",
            url,
            request.orden_produccion,
            request.consecutivo
        );

        let response = send_json(Request::post(&url), request).await?;
        expect_success(response, DESTINY_SCAN_MESSAGE_KEYS, "al registrar el escaneo Destiny.").await
    }

    /// Sube las fotos como multipart (`VerificacionId` + `Fotos` repetido)
    pub async fn upload_evidence(&self, verificacion_id: i64, files: &[File]) -> Result<(), ApiError> {
        let url = self.url("/Verificacion/subir-evidencia");
        log::info!("📷 [API] POST {} ({} fotos)", url, files.len());

        let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        form.append_with_str("VerificacionId", &verificacion_id.to_string())
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        for file in files {
            form.append_with_blob_and_filename("Fotos", file, &file.name())
                .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        }

        // Sin Content-Type: el navegador pone el boundary del multipart
        let response = Request::post(&url)
            .header("accept", "*/*")
            .body(form)?
            .send()
            .await?;
        expect_success(response, DEFAULT_MESSAGE_KEYS, "al subir evidencia.").await
    }

    // ========================================================================
    // TARIMAS
    // ========================================================================

    pub async fn get_active_pallets(&self, verificacion_id: i64) -> Result<Vec<Pallet>, ApiError> {
        let url = self.url(&format!("/Verificacion/tarimas-activas/{}", verificacion_id));
        log::info!("📦 [API] GET {}", url);

        let response = send(json_headers(Request::get(&url))).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al cargar las tarimas activas.").await
    }

    pub async fn get_finished_pallets(&self, verificacion_id: i64) -> Result<Vec<Pallet>, ApiError> {
        let url = self.url(&format!("/Verificacion/tarimas-terminadas/{}", verificacion_id));
        log::info!("📦 [API] GET {}", url);

        let response = send(json_headers(Request::get(&url))).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al cargar las tarimas terminadas.").await
    }

    pub async fn start_pallet(&self, request: &StartPalletRequest) -> Result<(), ApiError> {
        let url = self.url("/Verificacion/iniciar-tarima");
        log::info!("🆕 [API] POST {} (verificación {})", url, request.verificacion_id);

        let response = send_json(Request::post(&url), request).await?;
        expect_success(response, DEFAULT_MESSAGE_KEYS, "al iniciar la tarima.").await
    }

    pub async fn finish_pallet(&self, request: &FinishPalletRequest) -> Result<(), ApiError> {
        let url = self.url("/Verificacion/terminar-tarima-manual");
        log::info!("🔒 [API] POST {} (tarima {})", url, request.tarima_id);

        let response = send_json(Request::post(&url), request).await?;
        expect_success(response, DEFAULT_MESSAGE_KEYS, "al terminar la tarima.").await
    }

    // ========================================================================
    // CATÁLOGOS (etiquetas, órdenes, valores técnicos)
    // ========================================================================

    pub async fn label_by_traceability(&self, code: &str) -> Result<EtiquetaData, ApiError> {
        let url = self.url(&format!("/EtiquetaIndividual/individual/{}", encode_segment(code)));
        log::info!("🏷️ [API] GET {}", url);

        let response = send(json_headers(Request::get(&url))).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al buscar la etiqueta.").await
    }

    pub async fn destiny_search(&self, search: &DestinySearch) -> Result<DestinyEtiquetaData, ApiError> {
        let url = self.url("/EtiquetaIndividual/destiny/search-by-shipping");
        log::info!(
            "🏷️ [API] GET {} (ItemNo {}, InventoryLot {}, ShippingUnitID {})",
            url,
            search.item_no,
            search.inventory_lot,
            search.shipping_unit_id
        );

        let request = json_headers(Request::get(&url)).query([
            ("ItemNo", search.item_no.as_str()),
            ("InventoryLot", search.inventory_lot.as_str()),
            ("ShippingUnitID", search.shipping_unit_id.as_str()),
        ]);
        let response = send(request).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al buscar datos Destiny.").await
    }

    pub async fn quality_search(&self, search: &QualitySearch) -> Result<QualityEtiquetaData, ApiError> {
        let url = self.url("/EtiquetaIndividual/quality/search");
        log::info!("🏷️ [API] GET {} (PO2 {}, ItemNumber {})", url, search.po2, search.item_number);

        let request = json_headers(Request::get(&url)).query([
            ("PO2", search.po2.as_str()),
            ("ItemNumber", search.item_number.as_str()),
        ]);
        let response = send(request).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al buscar datos Quality.").await
    }

    pub async fn order_detail(&self, orden: i64, clave_producto: &str) -> Result<OrdenData, ApiError> {
        let url = self.url("/CatOrden/detalle");
        log::info!("🧾 [API] GET {} (orden {}, producto {})", url, orden, clave_producto);

        let orden = orden.to_string();
        let request = json_headers(Request::get(&url))
            .query([("orden", orden.as_str()), ("claveProducto", clave_producto)]);
        let response = send(request).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al obtener el detalle de la orden.").await
    }

    pub async fn technical_values(&self, clave_producto: &str) -> Result<Vec<ValoresTecnicosData>, ApiError> {
        let url = self.url(&format!(
            "/ValoresTecnicosIndividual/ByProducto/{}",
            encode_segment(clave_producto)
        ));
        log::info!("🔧 [API] GET {}", url);

        let response = send(json_headers(Request::get(&url))).await?;
        read_json(response, DEFAULT_MESSAGE_KEYS, "al obtener los valores técnicos.").await
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn json_headers(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("accept", "*/*")
        .header("Content-Type", "application/json")
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(|e| {
        log::error!("❌ [API] Error de red: {}", e);
        ApiError::from(e)
    })
}

async fn send_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
    let request = json_headers(builder).json(body)?;
    request.send().await.map_err(|e| {
        log::error!("❌ [API] Error de red: {}", e);
        ApiError::from(e)
    })
}

/// Convierte una respuesta no-2xx en `ApiError::Http`
async fn error_from(response: Response, keys: &[&str], fallback: &str) -> ApiError {
    let status = response.status();
    let url = response.url();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body, keys, fallback);
    log::warn!("⚠️ [API] {} {}: {}", status, url, err);
    err
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    keys: &[&str],
    fallback: &str,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response, keys, fallback).await);
    }
    response.json::<T>().await.map_err(ApiError::from)
}

async fn expect_success(response: Response, keys: &[&str], fallback: &str) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(error_from(response, keys, fallback).await);
    }
    Ok(())
}

/// Todo menos los caracteres no reservados de RFC 3986
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapa un valor para usarlo como segmento de ruta
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value.trim(), PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(
            client.url("/Verificacion/activas"),
            "http://localhost:5000/api/Verificacion/activas"
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("604025132030"), "604025132030");
        assert_eq!(encode_segment(" 61953-11 "), "61953-11");
        assert_eq!(encode_segment("A/B C"), "A%2FB%20C");
        assert_eq!(encode_segment("Ñ"), "%C3%91");
        assert_eq!(encode_segment("PO#12?x=1"), "PO%2312%3Fx%3D1");
    }
}
