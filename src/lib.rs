// ============================================================================
// VERIFICACIÓN DE CALIDAD - FRONTEND MVVM (YEW + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Components: vistas Yew (sin lógica de negocio)
// - Hooks: estado Yew + callbacks hacia los ViewModels
// - ViewModels: lógica de negocio pura
// - Services: SOLO comunicación API y sesión
// - Stores: estado de cada pantalla
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod stores;
pub mod hooks;
pub mod components;
pub mod utils;

pub use components::App;
