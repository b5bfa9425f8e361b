pub mod error_banner;
pub mod layout;
pub mod tutorial_detail;

pub use error_banner::ErrorBanner;
pub use tutorial_detail::TutorialDetail;
