//! Runs the Telegraph HTTP API.
//!
//! Usage:
//!
//! ```text
//! telegraph serve [--host <host>] [--port <port>] [--apikey <key>] [--dry-run]
//! ```

use std::sync::Arc;

use clap::Parser;
use telegraph::{
    config::{Cli, Command, ServeArgs},
    http,
    sms::{
        adapters::{
            memory::InMemoryTransport,
            messagebird::MessageBirdTransport,
            reference::RandomReferenceAllocator,
        },
        ports::SmsTransport,
        services::DispatchService,
        validation::DefaultMessageValidator,
    },
};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,telegraph=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => serve(&args).await,
    }
}

async fn serve(args: &ServeArgs) -> Result<(), BoxError> {
    if args.dry_run {
        tracing::warn!("dry run: messages are logged, not delivered");
        return run(args, InMemoryTransport::logging_only()).await;
    }

    let transport = MessageBirdTransport::new(args.messagebird_config()?)?;
    run(args, transport).await
}

async fn run<T>(args: &ServeArgs, transport: T) -> Result<(), BoxError>
where
    T: SmsTransport + 'static,
{
    let service = DispatchService::new(
        Arc::new(transport),
        Arc::new(RandomReferenceAllocator::new()),
        Arc::new(DefaultMessageValidator::new()),
    );
    http::serve(&args.bind_addr(), http::build_router(service)).await?;
    Ok(())
}
