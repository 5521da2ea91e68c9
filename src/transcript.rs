use std::fmt::Write as _;

use anyhow::{Context, Result};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::FetchedTranscript;

/// Thin wrapper around the transcript provider. One fetch per request, no
/// retry, no fallback language; provider errors are surfaced to the caller.
pub struct TranscriptClient {
    api: YouTubeTranscriptApi,
}

impl TranscriptClient {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .context("Failed to create transcript client")?;
        Ok(Self { api })
    }

    pub async fn fetch(&self, video_id: &str, language: &str) -> Result<FetchedTranscript> {
        self.api
            .fetch_transcript(video_id, &[language], false)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

/// Render a start offset as `H:MM:SS`, truncated to whole seconds.
///
/// Convention: hours are always present and never zero-padded; minutes and
/// seconds are two digits (65.9 seconds -> `0:01:05`). This is the rendering
/// Python's `str(timedelta(...))` produces for durations under a day, which
/// is what users of this page have come to expect.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{}:{:02}:{:02}", h, m, s)
}

/// Join timed caption entries into one `[H:MM:SS] text` line per entry.
///
/// Entries are rendered in the order given (the provider returns them
/// chronologically) and text is passed through verbatim; escaping is the
/// rendering layer's job.
pub fn format_transcript<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (f64, &'a str)>,
{
    let mut out = String::new();
    for (start, text) in entries {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "[{}] {}", format_timestamp(start), text);
    }
    out
}
