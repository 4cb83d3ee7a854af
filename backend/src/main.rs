mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::HostConfig;
use crate::services::embedded::serve_embedded;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::load();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    let api_base = if config.console.api_base.is_empty() {
        "same origin"
    } else {
        config.console.api_base.as_str()
    };
    info!("Console running at {} (API: {})", url, api_base);

    let console = web::Data::new(config.console.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(console.clone())
            .service(services::console_config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
