//! casetrace-client — typed async client for the crime-research API.
//!
//! Wraps the remote HTTP endpoints the assistant front-ends talk to: chat
//! completions (`POST /chat`), structured crime-case search
//! (`POST /search/crimes`), health checks (`GET /health`) and predefined
//! search templates (`GET /search/templates`). The wire model mirrors the
//! backend's schema field for field; responses come back as plain data and
//! structuring/rendering stay out of this crate.

pub mod client;
pub mod config;
pub mod error;
pub mod types;


pub use client::{ResearchApi, ResearchClient};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::{
    Agency, AgencyType, CaseDetails, CaseStatus, ChatMessage, ChatResponse, CrimeCase, CrimeType,
    HealthStatus, Investigator, ResolutionDetails, SearchRequest, SeverityLevel, Source,
};
