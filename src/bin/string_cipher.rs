// src/bin/string_cipher.rs
//! Line-oriented JSON consumer: one `EncryptionContract` per stdin line in,
//! one `EncryptionResponse` per stdout line out. Logs go to stderr.

use std::io::{Stdout, Write};

use anyhow::{Context, Result};
use secure_string_cipher::consumer::{EncryptionConsumer, Responder};
use secure_string_cipher::{
    load_config, CancellationToken, EncryptionContract, EncryptionOrchestrator, EncryptionResponse,
    EncryptionServiceFactory,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct StdoutResponder(Stdout);

impl Responder for StdoutResponder {
    fn respond(&mut self, response: &EncryptionResponse) -> secure_string_cipher::Result<()> {
        let mut out = self.0.lock();
        serde_json::to_writer(&mut out, response)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!(
        max_concurrent_operations = config.orchestrator.permits(),
        "string-cipher ready, reading contracts from stdin"
    );

    let orchestrator =
        EncryptionOrchestrator::new(EncryptionServiceFactory::default(), &config.orchestrator);
    let consumer = EncryptionConsumer::new(orchestrator);
    let mut responder = StdoutResponder(std::io::stdout());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut handled = 0usize;
    let mut failed = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let contract = match serde_json::from_str::<EncryptionContract>(&line) {
            Ok(contract) => Some(contract),
            Err(e) => {
                warn!(error = %e, "could not decode contract");
                None
            }
        };

        let token = CancellationToken::new();
        handled += 1;
        if let Err(e) = consumer
            .consume(contract.as_ref(), &token, &mut responder)
            .await
        {
            failed += 1;
            warn!(error = %e, "request failed, continuing with next line");
        }
    }

    info!(handled, failed, "stdin closed, shutting down");
    Ok(())
}
