pub mod serde_helpers;
pub mod client;
pub mod auth;
pub mod verification;
pub mod pallet;
pub mod label;

pub use client::Client;
pub use auth::{DemoUser, User, DEMO_USERS};
pub use verification::{
    ActiveVerification, DashboardData, DestinyScanRequest, FinishVerificationRequest, ScanRequest,
    StartVerificationRequest, StartVerificationResponse, VerificationStatus, VerificationSummary,
    ESTADO_EN_PROCESO,
};
pub use pallet::{BoxDetail, FinishPalletRequest, Pallet, StartPalletRequest};
pub use label::{
    ConsolidatedProduct, DestinyEtiquetaData, DestinySearch, EtiquetaData, LabelRecord, OrdenData,
    ProdEtiquetasDestiny, QualityEtiquetaData, QualitySearch, ValoresTecnicosData,
};
