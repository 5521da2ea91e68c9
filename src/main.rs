use std::sync::Arc;

use actix_web::{web, App, HttpServer};

mod config;
mod handlers;
mod page;
mod state;
mod transcript;
mod util;

use crate::state::AppState;
use crate::transcript::TranscriptClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cfg_path = std::env::args()
        .skip_while(|a| a != "--config")
        .skip(1)
        .next()
        .unwrap_or_else(|| "config.toml".to_string());

    let cfg = match config::AppConfig::load(&cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[CONFIG] Failed to load {}: {:#}", cfg_path, e);
            std::process::exit(1);
        }
    };

    let transcripts = match TranscriptClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[TRANSCRIPT] Failed to create client: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("========================================");
    println!("  YouTube Transcript Service");
    println!("  http://{}", cfg.listen_addr);
    println!("  language: {}", cfg.language);
    println!("========================================");
    println!();

    let state = web::Data::new(AppState {
        config: Arc::new(cfg),
        transcripts,
    });

    let bind_addr = state.config.listen_addr.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::resource("/")
                    .route(web::get().to(handlers::index))
                    .route(web::post().to(handlers::submit)),
            )
            .service(web::resource("/download").route(web::post().to(handlers::download)))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
