// ============================================================================
// LABEL MODELS - Etiquetas por subsistema + datos de orden y valores técnicos
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::client::Client;
use crate::models::serde_helpers::{
    lenient_f64, lenient_i64, opt_string_or_number, parse_number, string_or_number,
};

/// Etiqueta individual BIOFLEX (`/EtiquetaIndividual/individual/{code}`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EtiquetaData {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub area: String,
    #[serde(deserialize_with = "string_or_number")]
    pub clave_producto: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub nombre_producto: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub orden: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub trazabilidad: String,
    #[serde(default)]
    pub print_card: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub uom: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub maquina: String,
    /// Piezas por caja impresas en la etiqueta (no siempre viene)
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub valor: Option<String>,
}

impl EtiquetaData {
    /// `valor` interpretado como número; `None` si falta o no es positivo
    pub fn valor_piezas(&self) -> Option<f64> {
        self.valor
            .as_deref()
            .map(parse_number)
            .filter(|v| *v > 0.0)
    }
}

/// Bloque anidado propio de DESTINY
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProdEtiquetasDestiny {
    #[serde(rename = "itemNo", deserialize_with = "string_or_number")]
    pub item_no: String,
    #[serde(rename = "inventoryLot", deserialize_with = "string_or_number")]
    pub inventory_lot: String,
    #[serde(rename = "shippingUnitID", alias = "shippingUnitId", deserialize_with = "string_or_number")]
    pub shipping_unit_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub uom: String,
    /// Piezas por caja (el backend lo manda como texto, p. ej. "1000")
    #[serde(rename = "qtyUOM", alias = "qtyUom", default, deserialize_with = "string_or_number")]
    pub qty_uom: String,
}

/// Etiqueta DESTINY (`/EtiquetaIndividual/destiny/search-by-shipping`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DestinyEtiquetaData {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub area: String,
    #[serde(deserialize_with = "string_or_number")]
    pub clave_producto: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub nombre_producto: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub orden: i64,
    #[serde(default)]
    pub print_card: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub clave_unidad: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub piezas: f64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub ot_sispro: String,
    /// Puede faltar cuando el backend no encuentra el shipping unit
    #[serde(default)]
    pub prod_etiquetas_destiny: Option<ProdEtiquetasDestiny>,
}

impl DestinyEtiquetaData {
    /// Piezas por caja según la etiqueta (0 si no parsea)
    pub fn qty_uom_piezas(&self) -> f64 {
        self.prod_etiquetas_destiny
            .as_ref()
            .map(|p| parse_number(&p.qty_uom))
            .unwrap_or(0.0)
    }
}

/// Etiqueta QUALITY (`/EtiquetaIndividual/quality/search`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QualityEtiquetaData {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub area: String,
    #[serde(deserialize_with = "string_or_number")]
    pub clave_producto: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub nombre_producto: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub orden: i64,
    #[serde(default)]
    pub print_card: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub uom: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub po2: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub item_number: String,
    #[serde(rename = "qtyUOM", alias = "qtyUom", default, deserialize_with = "opt_string_or_number")]
    pub qty_uom: Option<String>,
}

/// `GET /CatOrden/detalle`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrdenData {
    #[serde(default, deserialize_with = "string_or_number")]
    pub unidad: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub clave_unidad: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cantidad: f64,
}

/// Elemento de `GET /ValoresTecnicosIndividual/ByProducto/{key}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ValoresTecnicosData {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub piezas_por_caja: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub wicket_por_caja: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cajas_xtarima: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cant_perforaciones: i64,
}

/// Llaves de búsqueda DESTINY (`ItemNo`, `InventoryLot`, `ShippingUnitID`)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DestinySearch {
    pub item_no: String,
    pub inventory_lot: String,
    pub shipping_unit_id: String,
}

impl DestinySearch {
    pub fn new(item_no: &str, inventory_lot: &str, shipping_unit_id: &str) -> Self {
        Self {
            item_no: item_no.trim().to_string(),
            inventory_lot: inventory_lot.trim().to_string(),
            shipping_unit_id: shipping_unit_id.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.item_no.is_empty() && !self.inventory_lot.is_empty() && !self.shipping_unit_id.is_empty()
    }
}

/// Llaves de búsqueda QUALITY (`PO2`, `ItemNumber`)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct QualitySearch {
    pub po2: String,
    pub item_number: String,
}

impl QualitySearch {
    pub fn new(po2: &str, item_number: &str) -> Self {
        Self {
            po2: po2.trim().to_string(),
            item_number: item_number.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.po2.is_empty() && !self.item_number.is_empty()
    }
}

/// Etiqueta de cualquiera de los tres subsistemas
#[derive(Clone, PartialEq, Debug)]
pub enum LabelRecord {
    Bioflex(EtiquetaData),
    Destiny(DestinyEtiquetaData),
    Quality(QualityEtiquetaData),
}

impl LabelRecord {
    pub fn client(&self) -> Client {
        match self {
            LabelRecord::Bioflex(_) => Client::Bioflex,
            LabelRecord::Destiny(_) => Client::Destiny,
            LabelRecord::Quality(_) => Client::Quality,
        }
    }

    /// Id de la etiqueta (se envía como `productoId`)
    pub fn id(&self) -> i64 {
        match self {
            LabelRecord::Bioflex(e) => e.id,
            LabelRecord::Destiny(e) => e.id,
            LabelRecord::Quality(e) => e.id,
        }
    }

    /// Orden de producción (se envía como `lote`)
    pub fn orden(&self) -> i64 {
        match self {
            LabelRecord::Bioflex(e) => e.orden,
            LabelRecord::Destiny(e) => e.orden,
            LabelRecord::Quality(e) => e.orden,
        }
    }

    pub fn clave_producto(&self) -> &str {
        match self {
            LabelRecord::Bioflex(e) => &e.clave_producto,
            LabelRecord::Destiny(e) => &e.clave_producto,
            LabelRecord::Quality(e) => &e.clave_producto,
        }
    }

    pub fn nombre_producto(&self) -> &str {
        match self {
            LabelRecord::Bioflex(e) => &e.nombre_producto,
            LabelRecord::Destiny(e) => &e.nombre_producto,
            LabelRecord::Quality(e) => &e.nombre_producto,
        }
    }

    pub fn area(&self) -> &str {
        match self {
            LabelRecord::Bioflex(e) => &e.area,
            LabelRecord::Destiny(e) => &e.area,
            LabelRecord::Quality(e) => &e.area,
        }
    }

    pub fn print_card(&self) -> Option<&str> {
        let print_card = match self {
            LabelRecord::Bioflex(e) => e.print_card.as_deref(),
            LabelRecord::Destiny(e) => e.print_card.as_deref(),
            LabelRecord::Quality(e) => e.print_card.as_deref(),
        };
        print_card.filter(|p| !p.trim().is_empty())
    }

    /// Texto secundario del encabezado de la vista previa
    pub fn secondary_header(&self) -> String {
        match self {
            LabelRecord::Bioflex(e) => format!("Trazabilidad: {}", e.trazabilidad),
            LabelRecord::Destiny(e) => format!("Shipping ID: {}", e.orden),
            LabelRecord::Quality(e) => format!("PO2: {} · Item: {}", e.po2, e.item_number),
        }
    }
}

/// Etiqueta + detalle de la orden + valores técnicos
#[derive(Clone, PartialEq, Debug)]
pub struct ConsolidatedProduct {
    pub label: LabelRecord,
    pub orden: OrdenData,
    pub valores_tecnicos: ValoresTecnicosData,
}

impl ConsolidatedProduct {
    pub fn client(&self) -> Client {
        self.label.client()
    }

    /// Piezas por caja mostradas en la vista previa
    pub fn piezas_por_caja_display(&self) -> String {
        match &self.label {
            LabelRecord::Bioflex(e) => {
                let piezas = e.valor_piezas().unwrap_or(self.valores_tecnicos.piezas_por_caja);
                format_quantity(piezas)
            }
            LabelRecord::Destiny(e) => e
                .prod_etiquetas_destiny
                .as_ref()
                .map(|p| p.qty_uom.clone())
                .filter(|q| !q.is_empty())
                .unwrap_or_else(|| "-".to_string()),
            LabelRecord::Quality(e) => e
                .qty_uom
                .clone()
                .filter(|q| !q.is_empty())
                .unwrap_or_else(|| format_quantity(self.valores_tecnicos.piezas_por_caja)),
        }
    }

    /// Cantidad de la orden con su unidad (`"500 Millares"`)
    pub fn cantidad_orden_display(&self) -> String {
        let cantidad = if self.orden.cantidad > 0.0 {
            format_quantity(self.orden.cantidad)
        } else {
            "-".to_string()
        };
        let unidad = if self.orden.unidad.is_empty() { "-" } else { self.orden.unidad.as_str() };
        format!("{} {}", cantidad, unidad)
    }
}

/// Formatea cantidades sin decimales cuando son enteras
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESTINY_JSON: &str = r#"{
        "id": 4389,
        "area": "EXTRUSION",
        "claveProducto": "61953",
        "nombreProducto": "BOLSA DESTINY 11",
        "orden": 28596,
        "printCard": "E-4814-A_R-1",
        "claveUnidad": "BAGS",
        "piezas": 500,
        "otSispro": "OT-1",
        "prodEtiquetasDestiny": {
            "itemNo": "61953-11",
            "inventoryLot": "13915",
            "shippingUnitID": "28596",
            "uom": "BAGS",
            "qtyUOM": "1000"
        }
    }"#;

    #[test]
    fn parses_destiny_label_with_nested_block() {
        let label: DestinyEtiquetaData = serde_json::from_str(DESTINY_JSON).unwrap();
        let nested = label.prod_etiquetas_destiny.as_ref().unwrap();
        assert_eq!(nested.item_no, "61953-11");
        assert_eq!(nested.shipping_unit_id, "28596");
        assert_eq!(label.qty_uom_piezas(), 1000.0);
    }

    #[test]
    fn bioflex_valor_accepts_number_or_text() {
        let json = r#"{"id": 1, "claveProducto": "5135", "orden": 25132, "trazabilidad": "604025132030", "uom": "MIL", "valor": "250"}"#;
        let label: EtiquetaData = serde_json::from_str(json).unwrap();
        assert_eq!(label.valor_piezas(), Some(250.0));

        let json = r#"{"id": 1, "claveProducto": 5135, "orden": "25132", "trazabilidad": 604025132030, "valor": 0}"#;
        let label: EtiquetaData = serde_json::from_str(json).unwrap();
        assert_eq!(label.orden, 25132);
        assert_eq!(label.valor_piezas(), None);
        assert!(label.print_card.is_none());
    }

    #[test]
    fn null_text_fields_become_empty() {
        let json = r#"{"id": 1, "area": null, "claveProducto": "5135", "nombreProducto": null, "orden": 25132, "trazabilidad": "604025132030", "maquina": null}"#;
        let label: EtiquetaData = serde_json::from_str(json).unwrap();
        assert_eq!(label.area, "");
        assert_eq!(label.maquina, "");
        assert_eq!(label.nombre_producto, "");

        let orden: OrdenData =
            serde_json::from_str(r#"{"unidad": "Millares", "claveUnidad": null, "cantidad": 500}"#).unwrap();
        assert_eq!(orden.clave_unidad, "");
        assert_eq!(orden.cantidad, 500.0);

        let json = r#"{"id": 4389, "area": null, "claveProducto": "61953", "orden": 28596, "claveUnidad": null}"#;
        let destiny: DestinyEtiquetaData = serde_json::from_str(json).unwrap();
        assert_eq!(destiny.clave_unidad, "");
        assert!(destiny.prod_etiquetas_destiny.is_none());
    }

    #[test]
    fn blank_print_card_counts_as_missing() {
        let mut label: DestinyEtiquetaData = serde_json::from_str(DESTINY_JSON).unwrap();
        label.print_card = Some("  ".to_string());
        assert_eq!(LabelRecord::Destiny(label).print_card(), None);
    }

    #[test]
    fn display_helpers_follow_label_kind() {
        let label: DestinyEtiquetaData = serde_json::from_str(DESTINY_JSON).unwrap();
        let product = ConsolidatedProduct {
            label: LabelRecord::Destiny(label),
            orden: OrdenData { unidad: "Millares".into(), clave_unidad: "MIL".into(), cantidad: 500.0 },
            valores_tecnicos: ValoresTecnicosData {
                piezas_por_caja: 100.0,
                wicket_por_caja: 6,
                cajas_xtarima: 30,
                cant_perforaciones: 4,
            },
        };
        assert_eq!(product.piezas_por_caja_display(), "1000");
        assert_eq!(product.cantidad_orden_display(), "500 Millares");
        assert_eq!(product.label.secondary_header(), "Shipping ID: 28596");
        assert_eq!(product.client(), Client::Destiny);
    }

    #[test]
    fn search_keys_are_trimmed_before_checking() {
        assert!(DestinySearch::new(" 61953-11 ", "13915", "28596").is_complete());
        assert!(!DestinySearch::new("61953-11", "  ", "28596").is_complete());
        assert_eq!(QualitySearch::new(" PO-77 ", "A1").po2, "PO-77");
        assert!(!QualitySearch::new("PO-77", "").is_complete());
    }

    #[test]
    fn format_quantity_keeps_fractions() {
        assert_eq!(format_quantity(12.0), "12");
        assert_eq!(format_quantity(166.666), "166.67");
    }
}
