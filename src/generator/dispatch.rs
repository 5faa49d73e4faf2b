//! Dispatch/Result Adapter.

use anyhow::Result;
use tracing::{debug, warn};

use super::{GenerateOptions, Generator};
use crate::core::CreateError;

/// Call the generator once and turn its result into the status line to print.
///
/// A missing or empty status message is a [`CreateError::Generation`], and so is a
/// generator failure; the underlying error is only logged. The call is never retried.
pub async fn dispatch<G: Generator>(generator: &G, options: GenerateOptions<'_>) -> Result<String> {
    debug!("Dispatching {} request to generator", options.meta_information.artifact_type);

    match generator.create(options).await {
        Ok(result) => match result.status_message {
            Some(message) if !message.trim().is_empty() => Ok(message),
            _ => {
                warn!("Generator finished without a status message");
                Err(CreateError::Generation.into())
            }
        },
        Err(e) => {
            warn!("Generator failed: {:#}", e);
            Err(CreateError::Generation.into())
        }
    }
}
