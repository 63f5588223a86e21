use crate::models::{DashboardData, Pallet};

/// Dashboard de una verificación + sus tarimas
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStore {
    pub dashboard: Option<DashboardData>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_pallets: Vec<Pallet>,
    pub finished_pallets: Vec<Pallet>,
    pub pallets_error: Option<String>,
}
