pub mod app;
pub mod login_screen;
pub mod dashboard_layout;
pub mod dashboard_menu;
pub mod pending_verifications;
pub mod new_verification_form;
pub mod verification_detail;
pub mod scan_modal;
pub mod scan_modal_destiny;
pub mod evidence_modal;
pub mod finish_modal;
pub mod pallet_panel;

pub use app::App;
pub use login_screen::LoginScreen;
pub use dashboard_layout::DashboardLayout;
pub use dashboard_menu::DashboardMenu;
pub use pending_verifications::PendingVerifications;
pub use new_verification_form::NewVerificationForm;
pub use verification_detail::VerificationDetail;
pub use scan_modal::ScanModal;
pub use scan_modal_destiny::ScanModalDestiny;
pub use evidence_modal::EvidenceModal;
pub use finish_modal::FinishModal;
pub use pallet_panel::PalletPanel;
