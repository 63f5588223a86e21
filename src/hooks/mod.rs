pub mod use_auth;
pub mod auth_context;
pub mod use_navigation;
pub mod use_verifications;
pub mod use_verification_data;
pub mod use_destiny_etiqueta;
pub mod use_dashboard;

pub use use_auth::{use_auth, UseAuthHandle};
pub use auth_context::{use_auth_context, AuthContextProvider};
pub use use_navigation::{use_navigation, use_navigation_state, NavigationHandle, Route};
pub use use_verifications::{use_verifications, UseVerificationsHandle};
pub use use_verification_data::{use_verification_data, UseVerificationDataHandle};
pub use use_destiny_etiqueta::{use_destiny_etiqueta, UseDestinyEtiquetaHandle};
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
