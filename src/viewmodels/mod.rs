pub mod new_verification_viewmodel;
pub mod scan_viewmodel;
pub mod verification_viewmodel;

pub use new_verification_viewmodel::NewVerificationViewModel;
pub use scan_viewmodel::ScanViewModel;
pub use verification_viewmodel::VerificationViewModel;
