//! PlantGuard Common Library
//!
//! Types and view-state logic shared between the web app and host-side tests

pub mod error;
pub mod media;
pub mod state;
pub mod types;

pub use error::{Error, Result};
pub use media::{encode_data_url, is_image_media_type, parse_data_url};
pub use state::{AnalysisTicket, Flow, UploadedImage, ViewState};
pub use types::{AnalysisResult, Severity};
