use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{page, state::AppState, transcript, util};

#[derive(Deserialize)]
pub struct TranscriptRequest {
    pub url: String,
}

#[derive(Deserialize)]
pub struct DownloadRequest {
    pub transcript_text: String,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn index() -> impl Responder {
    html(page::render_index(None, None))
}

pub async fn submit(req: web::Form<TranscriptRequest>, state: web::Data<AppState>) -> impl Responder {
    let video_id = match util::extract_video_id(&req.url) {
        Some(id) => id,
        None => {
            eprintln!("[TRANSCRIPT] No video ID in url={}", req.url);
            return html(page::render_index(None, Some("Invalid YouTube URL.")));
        }
    };

    let language = state.config.language.as_str();
    eprintln!("[TRANSCRIPT] Request: video_id={} language={}", video_id, language);

    // Single provider call, no timeout beyond the client's own; any failure
    // collapses into one user-facing message with the raw provider error.
    match state.transcripts.fetch(video_id, language).await {
        Ok(fetched) => {
            let text = transcript::format_transcript(
                fetched.snippets.iter().map(|s| (s.start, s.text.as_str())),
            );
            html(page::render_index(Some(&text), None))
        }
        Err(e) => {
            eprintln!("[TRANSCRIPT] Fetch failed: video_id={} error={:#}", video_id, e);
            html(page::render_index(
                None,
                Some(&format!("Error fetching transcript: {:#}", e)),
            ))
        }
    }
}

pub async fn download(req: web::Form<DownloadRequest>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .append_header((
            actix_web::http::header::CONTENT_DISPOSITION,
            r#"attachment; filename="transcript.txt""#,
        ))
        .append_header((actix_web::http::header::CACHE_CONTROL, "no-store"))
        .body(req.into_inner().transcript_text)
}
