//! Serves the compiled console bundle embedded at build time.
//!
//! Unknown paths get `index.html` so client-side navigation survives a reload.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Console bundle not built"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_the_root_answer() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let root = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let deep = test::call_service(
            &app,
            test::TestRequest::get().uri("/sites/42/edit").to_request(),
        )
        .await;

        assert_eq!(root.status(), deep.status());
        assert_eq!(
            root.headers().get("content-type"),
            deep.headers().get("content-type")
        );
    }
}
