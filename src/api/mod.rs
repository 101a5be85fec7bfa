pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::study_api_router;
pub use server::{start_study_api_server, StudyApiServer};
