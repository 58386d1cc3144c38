pub mod config;
pub mod errors;
pub mod handlers;
pub mod io;
pub mod models;
pub mod routes;
pub mod scribe;
pub mod state;
pub mod transcript;

pub use config::{Environment, ServerConfig};
pub use errors::{AppError, AppResult};
pub use models::{ScribeResponse, ScribeWord, SpeakerSegment};
pub use scribe::{ScribeClient, ScribeConfig, ScribeError};
pub use state::AppState;
pub use transcript::{build_segments, render_transcript};
