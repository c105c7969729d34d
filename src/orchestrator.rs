// src/orchestrator.rs
//! Async entry point: contract in, response out
//!
//! Each operation holds a worker permit for its whole lifetime and runs the
//! cipher pass on Tokio's blocking pool. Cancellation is cooperative and is
//! checked at entry, after the service is resolved and after the cipher
//! pass. A pass that already started always runs to the end; a late cancel
//! only discards its result.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::cancellation::CancellationToken;
use crate::config::OrchestratorConfig;
use crate::contract::{EncryptionContract, EncryptionResponse};
use crate::enums::EncryptionOperation;
use crate::error::{CoreError, Result};
use crate::factory::EncryptionServiceFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn started(self) -> &'static str {
        match self {
            Direction::Encrypt => "Encryption task started.",
            Direction::Decrypt => "Decryption task started.",
        }
    }

    fn completed(self) -> &'static str {
        match self {
            Direction::Encrypt => "Encryption task completed.",
            Direction::Decrypt => "Decryption task completed.",
        }
    }

    fn failed(self) -> &'static str {
        match self {
            Direction::Encrypt => "Encryption task failed.",
            Direction::Decrypt => "Decryption task failed.",
        }
    }

    fn cancelled_message(self) -> &'static str {
        match self {
            Direction::Encrypt => "The string could not be encrypted.",
            Direction::Decrypt => "The string could not be decrypted.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EncryptionOrchestrator {
    factory: EncryptionServiceFactory,
    permits: Arc<Semaphore>,
}

impl Default for EncryptionOrchestrator {
    fn default() -> Self {
        Self::new(
            EncryptionServiceFactory::default(),
            &OrchestratorConfig::default(),
        )
    }
}

impl EncryptionOrchestrator {
    pub fn new(factory: EncryptionServiceFactory, config: &OrchestratorConfig) -> Self {
        Self {
            factory,
            permits: Arc::new(Semaphore::new(config.permits())),
        }
    }

    /// Dispatch on `encryption_operation`
    ///
    /// An unrecognized operation fails before any service is resolved.
    pub async fn execute_crypto_operation(
        &self,
        contract: &EncryptionContract,
        token: &CancellationToken,
    ) -> Result<EncryptionResponse> {
        match &contract.encryption_operation {
            EncryptionOperation::Encrypt => self.run(Direction::Encrypt, contract, token).await,
            EncryptionOperation::Decrypt => self.run(Direction::Decrypt, contract, token).await,
            EncryptionOperation::Unrecognized(raw) => Err(CoreError::InvalidEnumArgument {
                field: "EncryptionOperation",
                value: raw.clone(),
                expected: "EncryptionOperation",
            }),
        }
    }

    pub async fn encrypt_string(
        &self,
        contract: &EncryptionContract,
        token: &CancellationToken,
    ) -> Result<EncryptionResponse> {
        self.run(Direction::Encrypt, contract, token).await
    }

    pub async fn decrypt_string(
        &self,
        contract: &EncryptionContract,
        token: &CancellationToken,
    ) -> Result<EncryptionResponse> {
        self.run(Direction::Decrypt, contract, token).await
    }

    async fn run(
        &self,
        direction: Direction,
        contract: &EncryptionContract,
        token: &CancellationToken,
    ) -> Result<EncryptionResponse> {
        let _permit = self.permits.acquire().await?;
        checkpoint(direction, token)?;

        info!("{}", direction.started());

        let request = contract.to_request();
        let service = self.factory.get_service(request.method, request.options)?;
        checkpoint(direction, token)?;

        let message = tokio::task::spawn_blocking(move || {
            let salt = request.salt.as_deref();
            match direction {
                Direction::Encrypt => service.encrypt_string(&request.value, &request.key, salt),
                Direction::Decrypt => service.decrypt_string(&request.value, &request.key, salt),
            }
        })
        .await??;
        checkpoint(direction, token)?;

        info!("{}", direction.completed());

        Ok(EncryptionResponse::success(Some(message)))
    }
}

fn checkpoint(direction: Direction, token: &CancellationToken) -> Result<()> {
    if !token.is_cancelled() {
        return Ok(());
    }
    let err = CoreError::Cancelled {
        message: direction.cancelled_message().to_owned(),
        data: token.data(),
    };
    error!(error = %err, "{}", direction.failed());
    Err(err)
}
