// src/consumer.rs
//! Message-bus facing handler
//!
//! Runs one contract through the orchestrator and always answers: 200 with
//! the result on success, 500 with a description on failure. Failures are
//! still returned to the caller after the reply so the transport can apply
//! its own retry or dead-letter policy.

use tracing::{error, info};

use crate::cancellation::CancellationToken;
use crate::consts::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT, STATUS_INTERNAL_SERVER_ERROR};
use crate::contract::{EncryptionContract, EncryptionResponse};
use crate::error::{CoreError, Result};
use crate::orchestrator::EncryptionOrchestrator;

/// Where responses go; one per consumed message
pub trait Responder {
    fn respond(&mut self, response: &EncryptionResponse) -> Result<()>;
}

impl Responder for Vec<EncryptionResponse> {
    fn respond(&mut self, response: &EncryptionResponse) -> Result<()> {
        self.push(response.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncryptionConsumer {
    orchestrator: EncryptionOrchestrator,
}

impl EncryptionConsumer {
    pub fn new(orchestrator: EncryptionOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// `contract` is `None` when the transport could not decode a message
    pub async fn consume<R: Responder + ?Sized>(
        &self,
        contract: Option<&EncryptionContract>,
        token: &CancellationToken,
        responder: &mut R,
    ) -> Result<()> {
        let outcome = match contract {
            Some(contract) => {
                info!("Encryption request received.");
                self.orchestrator
                    .execute_crypto_operation(contract, token)
                    .await
            }
            None => Err(CoreError::invalid_argument(
                "contract",
                "Message type EncryptionContract could not be consumed from the context.",
            )),
        };

        match outcome {
            Ok(response) => {
                info!("Encryption request completed.");
                responder.respond(&EncryptionResponse::success(response.message))
            }
            Err(err) => {
                error!(error = %err, "Encryption request failed.");
                responder.respond(&failure_response(&err))?;
                Err(err)
            }
        }
    }
}

/// 500 body for `err`: a JSON list of `"key: value"` lines for a cancel
/// that carried data, plain text otherwise
pub fn failure_response(err: &CoreError) -> EncryptionResponse {
    if let CoreError::Cancelled { data, .. } = err {
        if !data.is_empty() {
            let lines: Vec<String> = data.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            if let Ok(json) = serde_json::to_string(&lines) {
                return EncryptionResponse::failure(
                    STATUS_INTERNAL_SERVER_ERROR,
                    CONTENT_TYPE_JSON,
                    json,
                );
            }
        }
    }
    EncryptionResponse::failure(
        STATUS_INTERNAL_SERVER_ERROR,
        CONTENT_TYPE_TEXT,
        err.to_string(),
    )
}
