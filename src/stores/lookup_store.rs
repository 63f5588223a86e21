// ============================================================================
// LOOKUP STORE - Resultado de la búsqueda de etiqueta en curso
// ============================================================================

use crate::models::{ConsolidatedProduct, DestinyEtiquetaData};

/// Producto consolidado (alta de verificación y modal por trazabilidad)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupStore {
    pub product: Option<ConsolidatedProduct>,
    pub fetching: bool,
    pub error: Option<String>,
}

impl LookupStore {
    /// Hay datos listos y ningún error pendiente
    pub fn is_available(&self) -> bool {
        self.product.is_some() && self.error.is_none()
    }
}

/// Etiqueta DESTINY sola (modal de escaneo DESTINY)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DestinyLookupStore {
    pub label: Option<DestinyEtiquetaData>,
    pub fetching: bool,
    pub error: Option<String>,
}
