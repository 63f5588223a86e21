// ============================================================================
// VERIFICATION VIEWMODEL - Lista, dashboard, cierre, evidencia y tarimas
// ============================================================================

use web_sys::File;

use crate::models::{
    ActiveVerification, DashboardData, FinishPalletRequest, FinishVerificationRequest, Pallet,
    StartPalletRequest, User, VerificationStatus, VerificationSummary,
};
use crate::services::ApiClient;
use crate::utils::{COMPLETED_PREVIEW_LIMIT, UNKNOWN_VALIDATOR};

pub const MSG_FINISH_FIELDS: &str = "Complete todos los campos para finalizar la verificación.";
pub const MSG_NO_PHOTOS: &str = "Seleccione al menos una foto.";
pub const MSG_EVIDENCE_OK: &str = "Evidencia subida correctamente.";
pub const MSG_FINISH_OK: &str = "Verificación finalizada correctamente.";

// ============================================================================
// LISTA DE VERIFICACIONES
// ============================================================================

pub fn to_summary(active: &ActiveVerification) -> VerificationSummary {
    let status = if active.avance_tarimas > 0 {
        VerificationStatus::InProgress
    } else {
        VerificationStatus::Pending
    };

    VerificationSummary {
        id: active.id,
        product_name: format!("Lote {} / Prod {}", active.lote, active.producto),
        lot_number: active.lote.clone(),
        client: active.cliente.clone(),
        created_at: active.fecha_inicio.clone(),
        status,
        pallets: active.avance_tarimas,
        notes: format!("Cliente: {}. Tarimas: {}", active.cliente, active.avance_tarimas),
    }
}

pub fn pending(summaries: &[VerificationSummary]) -> Vec<VerificationSummary> {
    summaries.iter().filter(|s| s.status.is_open()).cloned().collect()
}

/// Últimas completadas (máximo tres)
pub fn completed_preview(summaries: &[VerificationSummary]) -> Vec<VerificationSummary> {
    summaries
        .iter()
        .filter(|s| s.status == VerificationStatus::Completed)
        .take(COMPLETED_PREVIEW_LIMIT)
        .cloned()
        .collect()
}

/// `"1 verificación"` / `"3 verificaciones"`
pub fn pending_count_label(count: usize) -> String {
    if count == 1 {
        "1 verificación en proceso".to_string()
    } else {
        format!("{} verificaciones en proceso", count)
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

/// Botones habilitados del dashboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DashboardActions {
    pub scan: bool,
    pub evidence: bool,
    pub finish: bool,
    pub pallets: bool,
    pub reopen: bool,
}

pub fn actions_for(dashboard: &DashboardData) -> DashboardActions {
    let open = dashboard.is_in_process();
    DashboardActions {
        scan: open,
        evidence: open,
        finish: open,
        pallets: open,
        reopen: !open,
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FinishForm {
    pub muestreo: String,
    pub defectos: String,
    pub comentarios: String,
}

pub fn build_finish_request(verificacion_id: i64, form: &FinishForm) -> Result<FinishVerificationRequest, String> {
    let muestreo = form.muestreo.trim();
    let defectos = form.defectos.trim();
    let comentarios = form.comentarios.trim();
    if muestreo.is_empty() || defectos.is_empty() || comentarios.is_empty() {
        return Err(MSG_FINISH_FIELDS.to_string());
    }

    Ok(FinishVerificationRequest {
        verificacion_id,
        muestreo: muestreo.to_string(),
        defectos_encontrados: defectos.to_string(),
        comentarios: comentarios.to_string(),
    })
}

pub fn validate_evidence(file_count: usize) -> Result<(), String> {
    if file_count == 0 {
        return Err(MSG_NO_PHOTOS.to_string());
    }
    Ok(())
}

pub fn build_finish_pallet_request(verificacion_id: i64, tarima_id: i64, motivo: &str) -> FinishPalletRequest {
    let motivo = motivo.trim();
    FinishPalletRequest {
        verificacion_id,
        tarima_id,
        motivo: (!motivo.is_empty()).then(|| motivo.to_string()),
    }
}

pub fn build_start_pallet_request(verificacion_id: i64, user: Option<&User>) -> StartPalletRequest {
    StartPalletRequest {
        verificacion_id,
        creado_por: user
            .map(|u| u.name.clone())
            .unwrap_or_else(|| UNKNOWN_VALIDATOR.to_string()),
    }
}

// ============================================================================
// VIEWMODEL (operaciones con red)
// ============================================================================

pub struct VerificationViewModel {
    api_client: ApiClient,
}

impl Default for VerificationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load_summaries(&self) -> Result<Vec<VerificationSummary>, String> {
        let active = self
            .api_client
            .get_active_verifications()
            .await
            .map_err(|e| e.to_string())?;
        log::info!("📋 [VERIF] {} verificaciones activas", active.len());
        Ok(active.iter().map(to_summary).collect())
    }

    pub async fn load_dashboard(&self, verificacion_id: i64) -> Result<DashboardData, String> {
        self.api_client
            .get_dashboard(verificacion_id)
            .await
            .map_err(|e| e.to_string())
    }

    /// (activas, terminadas)
    pub async fn load_pallets(&self, verificacion_id: i64) -> Result<(Vec<Pallet>, Vec<Pallet>), String> {
        let active = self
            .api_client
            .get_active_pallets(verificacion_id)
            .await
            .map_err(|e| e.to_string())?;
        let finished = self
            .api_client
            .get_finished_pallets(verificacion_id)
            .await
            .map_err(|e| e.to_string())?;
        Ok((active, finished))
    }

    pub async fn finish(&self, verificacion_id: i64, form: &FinishForm) -> Result<(), String> {
        let request = build_finish_request(verificacion_id, form)?;
        self.api_client
            .finish_verification(&request)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn reopen(&self, verificacion_id: i64) -> Result<(), String> {
        self.api_client
            .reopen_verification(verificacion_id)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn upload_evidence(&self, verificacion_id: i64, files: &[File]) -> Result<(), String> {
        validate_evidence(files.len())?;
        self.api_client
            .upload_evidence(verificacion_id, files)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn start_pallet(&self, verificacion_id: i64, user: Option<&User>) -> Result<(), String> {
        let request = build_start_pallet_request(verificacion_id, user);
        self.api_client
            .start_pallet(&request)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn finish_pallet(&self, verificacion_id: i64, tarima_id: i64, motivo: &str) -> Result<(), String> {
        let request = build_finish_pallet_request(verificacion_id, tarima_id, motivo);
        self.api_client
            .finish_pallet(&request)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Client;

    fn active(id: i64, tarimas: i64) -> ActiveVerification {
        ActiveVerification {
            id,
            lote: "25132".into(),
            producto: "5135".into(),
            cliente: "BIOFLEX".into(),
            fecha_inicio: "2026-10-14T08:30:00".into(),
            avance_tarimas: tarimas,
        }
    }

    fn dashboard(estado: &str) -> DashboardData {
        DashboardData {
            verificacion_id: 1,
            producto_info: String::new(),
            lote_orden: "25132".into(),
            piezas_meta: 0.0,
            piezas_actuales: 0.0,
            porcentaje_avance: 0.0,
            cajas_actuales: 0,
            tarimas_actuales: 0,
            tarimas_totales_estimadas: 0,
            estado: estado.into(),
            tiempo_transcurrido_minutos: 0,
            cliente: Some(Client::Bioflex),
        }
    }

    #[test]
    fn summary_status_follows_pallet_progress() {
        let summary = to_summary(&active(7, 0));
        assert_eq!(summary.status, VerificationStatus::Pending);
        assert_eq!(summary.product_name, "Lote 25132 / Prod 5135");
        assert_eq!(summary.notes, "Cliente: BIOFLEX. Tarimas: 0");
        assert_eq!(to_summary(&active(8, 3)).status, VerificationStatus::InProgress);
    }

    #[test]
    fn completed_preview_takes_first_three() {
        let mut summaries: Vec<_> = (1..=5).map(|i| to_summary(&active(i, 1))).collect();
        for s in summaries.iter_mut().skip(1) {
            s.status = VerificationStatus::Completed;
        }
        let preview = completed_preview(&summaries);
        assert_eq!(preview.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(pending(&summaries).len(), 1);
    }

    #[test]
    fn actions_depend_on_en_proceso() {
        let open = actions_for(&dashboard("EN PROCESO"));
        assert!(open.scan && open.evidence && open.finish && open.pallets);
        assert!(!open.reopen);

        let closed = actions_for(&dashboard("TERMINADA"));
        assert!(!closed.scan && !closed.evidence && !closed.finish && !closed.pallets);
        assert!(closed.reopen);
    }

    #[test]
    fn finish_requires_every_field() {
        let form = FinishForm {
            muestreo: "20 cajas".into(),
            defectos: " ".into(),
            comentarios: "ok".into(),
        };
        assert_eq!(build_finish_request(1, &form), Err(MSG_FINISH_FIELDS.to_string()));

        let form = FinishForm { defectos: "Ninguno".into(), ..form };
        let request = build_finish_request(1, &form).unwrap();
        assert_eq!(request.defectos_encontrados, "Ninguno");
    }

    #[test]
    fn evidence_needs_at_least_one_photo() {
        assert_eq!(validate_evidence(0), Err(MSG_NO_PHOTOS.to_string()));
        assert_eq!(validate_evidence(2), Ok(()));
    }

    #[test]
    fn pallet_requests_fill_defaults() {
        assert_eq!(build_finish_pallet_request(1, 4, "  ").motivo, None);
        assert_eq!(build_finish_pallet_request(1, 4, " rota ").motivo.as_deref(), Some("rota"));
        assert_eq!(build_start_pallet_request(1, None).creado_por, UNKNOWN_VALIDATOR);
    }

    #[test]
    fn pending_label_is_pluralized() {
        assert_eq!(pending_count_label(1), "1 verificación en proceso");
        assert_eq!(pending_count_label(0), "0 verificaciones en proceso");
    }
}
