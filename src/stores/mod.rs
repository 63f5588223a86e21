pub mod auth_store;
pub mod verification_store;
pub mod lookup_store;
pub mod dashboard_store;

pub use auth_store::AuthStore;
pub use verification_store::VerificationStore;
pub use lookup_store::{DestinyLookupStore, LookupStore};
pub use dashboard_store::DashboardStore;
