use contact_relay::adapters::lambda::{handle_event, HttpEvent, HttpResponse};
use contact_relay::utils::{logger, validation::Validate};
use contact_relay::{ContactConfig, ContactHandler, ResendClient};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    logger::init_lambda_logger();

    // 設定只在冷啟動時讀取一次；缺少 API key 由每個請求回 500
    let config = ContactConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let sender = ResendClient::new(config.api_url.clone());
    let handler = Arc::new(ContactHandler::new(sender, config));

    tracing::info!("Starting contact Lambda function");
    run(service_fn(move |event: LambdaEvent<HttpEvent>| {
        let handler = Arc::clone(&handler);
        async move { Ok::<HttpResponse, Error>(handle_event(&handler, event.payload).await) }
    }))
    .await
}
