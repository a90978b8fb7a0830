/*!
 * Remote translation clients.
 *
 * This module contains the clients that can produce a full-sentence
 * translation of a line over the network:
 * - Google: the public `translate_a/single` endpoint
 * - Mock: deterministic in-process client for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all remote translators
///
/// Implementations are stateless from the caller's point of view: one call
/// translates one line and returns either the translated text or an error.
#[async_trait]
pub trait RemoteTranslator: Send + Sync + Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Translate a single line of text
    ///
    /// # Arguments
    /// * `text` - The source line
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translation or the reason it failed
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}

pub mod google;
pub mod mock;
