//! The single bridge between `ApiRequest` descriptions and `fetch`.
//!
//! Every call resolves to the response body text or a `ConsoleError`;
//! callers decode with the parsers in `common` so malformed bodies are
//! classified the same way everywhere.

use common::error::ConsoleError;
use common::model::config::ConsoleConfig;
use common::requests::{decode, ApiRequest, Method};
use gloo_console::{log, warn};
use gloo_net::http::{Request, RequestBuilder};

/// Where the host publishes the console settings.
const CONFIG_PATH: &str = "/console/config.json";

/// Sends `request` to the API under `api_base` and returns the body text.
pub async fn send(api_base: &str, request: &ApiRequest) -> Result<String, ConsoleError> {
    let url = request.url(api_base);
    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };

    let response = dispatch(builder, request)
        .await
        .map_err(|e| ConsoleError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ConsoleError::MalformedBody(e.to_string()))?;

    if response.ok() {
        Ok(body)
    } else {
        warn!(format!("{} {} -> {}", method_name(request.method), url, status));
        Err(ConsoleError::from_status(status, body))
    }
}

async fn dispatch(
    builder: RequestBuilder,
    request: &ApiRequest,
) -> Result<gloo_net::http::Response, gloo_net::Error> {
    match &request.body {
        Some(body) => builder.json(body)?.send().await,
        None => builder.send().await,
    }
}

/// Fetches the host-provided settings, falling back to defaults.
pub async fn load_config() -> ConsoleConfig {
    let fetched = match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => match resp.text().await {
            Ok(body) => decode::<ConsoleConfig>(&body).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        },
        Ok(resp) => Err(format!("status {}", resp.status())),
        Err(e) => Err(e.to_string()),
    };

    match fetched {
        Ok(config) => {
            log!(format!("console config loaded, api base '{}'", config.api_base));
            config
        }
        Err(reason) => {
            warn!(format!("using default console config: {}", reason));
            ConsoleConfig::default()
        }
    }
}

fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
    }
}
