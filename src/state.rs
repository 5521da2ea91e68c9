use std::sync::Arc;

use crate::config::AppConfig;
use crate::transcript::TranscriptClient;

pub struct AppState {
    pub config: Arc<AppConfig>,
    pub transcripts: TranscriptClient,
}
