use lambda_http::{run, service_fn, Body, Error, Request, Response};
use prompt_relay::{InboundRequest, OutboundResponse, PromptRelay, RelayConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let relay = PromptRelay::from_config(RelayConfig::from_env())?;
    if !relay.has_credential() {
        tracing::warn!("GEMINI_API_KEY is not set, every request will fail");
    }
    let relay = &relay;

    run(service_fn(move |event: Request| async move {
        function_handler(relay, event).await
    }))
    .await
}

async fn function_handler(relay: &PromptRelay, event: Request) -> Result<Response<Body>, Error> {
    let request = inbound_request(&event);
    let response = relay.handle(&request).await;
    Ok(into_lambda_response(response)?)
}

/// Binary bodies stay raw bytes; invalid UTF-8 is rejected by the JSON parse.
fn inbound_request(event: &Request) -> InboundRequest {
    let body = match event.body() {
        Body::Empty => None,
        Body::Text(text) => Some(text.clone().into_bytes()),
        Body::Binary(bytes) => Some(bytes.clone()),
    };
    InboundRequest::new(event.method().as_str(), body)
}

fn into_lambda_response(
    response: OutboundResponse,
) -> Result<Response<Body>, lambda_http::http::Error> {
    Response::builder()
        .status(response.status_code)
        .header("Content-Type", response.content_type)
        .body(Body::Text(response.body))
}
