use clap::Parser;
use contact_relay::adapters::http;
use contact_relay::client::{FormFields, FormState, MessageKind, SubmitOutcome};
use contact_relay::config::cli::Command;
use contact_relay::config::toml_config::TomlConfig;
use contact_relay::config::ServerSettings;
use contact_relay::core::email;
use contact_relay::core::Submission;
use contact_relay::utils::{logger, validation::Validate};
use contact_relay::{CliConfig, ContactConfig, ContactError, ContactFormClient, ContactHandler, ResendClient};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在時忽略
    let _ = dotenvy::dotenv();
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    let (config, server) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Contact config: {:?}", config);

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(server.bind);
            let addr: SocketAddr = bind.parse()?;
            let sender = ResendClient::new(config.api_url.clone());
            let handler = Arc::new(ContactHandler::new(sender, config));
            http::serve(handler, addr).await?;
        }
        Command::Submit {
            endpoint,
            name,
            email,
            message,
        } => {
            let client = ContactFormClient::for_site(&endpoint);
            let mut form = FormState::new(FormFields::new(name, email, message));

            tracing::info!("📨 Submitting contact form to {}", client.endpoint());
            let outcome = client.submit(&mut form).await;

            if let Some(message) = form.visible_message(Instant::now()) {
                match message.kind {
                    MessageKind::Success => println!("✅ {}", message.text),
                    MessageKind::Error => eprintln!("❌ {}", message.text),
                }
            }
            if outcome != SubmitOutcome::Sent {
                std::process::exit(1);
            }
        }
        Command::Preview {
            name,
            email: address,
            message,
        } => {
            let submission = Submission::new(name, address, message);
            if let Err(e) = submission.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            let rendered = email::compose(&submission, &config.email);
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    }

    Ok(())
}

/// 設定檔 → 環境變數覆蓋 → 驗證
fn load_config(path: Option<&Path>) -> Result<(ContactConfig, ServerSettings), ContactError> {
    let (config, server) = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.resolve()?
        }
        None => (ContactConfig::default(), ServerSettings::default()),
    };

    let config = config.with_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    server.validate()?;
    Ok((config, server))
}
