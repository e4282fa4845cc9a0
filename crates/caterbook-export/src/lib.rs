pub mod error;
pub mod layout;
pub mod profile;
pub mod typst_source;

#[cfg(feature = "typst-render")]
pub mod render;

pub use error::ExportError;
pub use layout::{ExportJob, LineItem};
pub use profile::{default_profile_path, BankingDetails, BusinessProfile};

#[cfg(feature = "typst-render")]
pub use render::render_pdf;
