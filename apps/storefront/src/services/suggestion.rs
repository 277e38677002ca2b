//! # Suggestion Collaborator
//!
//! The assistant behind "Gợi ý món ăn". The storefront only ever sees a
//! string: [`recommend`] turns every outcome of the collaborator into one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  provider outcome              shown to the customer                    │
//! │  ────────────────              ─────────────────────                    │
//! │  not configured        ──►     "Xin lỗi, trợ lý AI chưa được cấu hình." │
//! │  Ok(Some(text))        ──►     text                                     │
//! │  Ok(None) / blank      ──►     "Không tìm thấy gợi ý."                  │
//! │  Err(..)               ──►     "Đã có lỗi xảy ra khi kết nối với AI."   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

use crate::messages;
use crate::state::ProviderKind;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("Suggestion provider is not configured")]
    NotConfigured,

    #[error("Suggestion provider failed: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool {
        true
    }

    /// Produces a dish suggestion for free-text preferences.
    async fn suggest(&self, preferences: &str) -> Result<Option<String>, SuggestionError>;
}

/// Always answers with the same demo suggestion.
#[derive(Debug, Clone)]
pub struct CannedProvider {
    reply: String,
}

impl CannedProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        CannedProvider { reply: reply.into() }
    }
}

impl Default for CannedProvider {
    fn default() -> Self {
        CannedProvider::new(messages::CANNED_SUGGESTION)
    }
}

#[async_trait]
impl SuggestionProvider for CannedProvider {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn suggest(&self, _preferences: &str) -> Result<Option<String>, SuggestionError> {
        Ok(Some(self.reply.clone()))
    }
}

/// Stands in when no assistant is set up.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl SuggestionProvider for UnconfiguredProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_configured(&self) -> bool {
        false
    }

    async fn suggest(&self, _preferences: &str) -> Result<Option<String>, SuggestionError> {
        Err(SuggestionError::NotConfigured)
    }
}

pub fn provider_for(kind: ProviderKind) -> Arc<dyn SuggestionProvider> {
    match kind {
        ProviderKind::Canned => Arc::new(CannedProvider::default()),
        ProviderKind::Disabled => Arc::new(UnconfiguredProvider),
    }
}

/// Asks the collaborator and always comes back with displayable text.
pub async fn recommend(provider: &dyn SuggestionProvider, preferences: &str) -> String {
    if !provider.is_configured() {
        return messages::ASSISTANT_NOT_CONFIGURED.to_string();
    }

    match provider.suggest(preferences).await {
        Ok(Some(text)) if !text.trim().is_empty() => {
            debug!(provider = provider.name(), "Suggestion received");
            text
        }
        Ok(_) => messages::ASSISTANT_NO_SUGGESTION.to_string(),
        Err(SuggestionError::NotConfigured) => messages::ASSISTANT_NOT_CONFIGURED.to_string(),
        Err(e) => {
            error!(provider = provider.name(), error = %e, "Suggestion request failed");
            messages::ASSISTANT_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl SuggestionProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn suggest(&self, _preferences: &str) -> Result<Option<String>, SuggestionError> {
            Err(SuggestionError::Upstream("timeout".to_string()))
        }
    }

    struct BlankProvider;

    #[async_trait]
    impl SuggestionProvider for BlankProvider {
        fn name(&self) -> &'static str {
            "blank"
        }

        async fn suggest(&self, _preferences: &str) -> Result<Option<String>, SuggestionError> {
            Ok(Some("   ".to_string()))
        }
    }

    #[tokio::test]
    async fn test_canned_reply() {
        let text = recommend(&CannedProvider::default(), "món nước").await;
        assert!(text.contains("Phở Thìn Lò Đúc"));
    }

    #[tokio::test]
    async fn test_unconfigured_reply() {
        let text = recommend(&UnconfiguredProvider, "món nước").await;
        assert_eq!(text, messages::ASSISTANT_NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn test_failure_becomes_apology() {
        let text = recommend(&FailingProvider, "món nước").await;
        assert_eq!(text, messages::ASSISTANT_FAILED);
    }

    #[tokio::test]
    async fn test_blank_reply_becomes_no_suggestion() {
        let text = recommend(&BlankProvider, "món nước").await;
        assert_eq!(text, messages::ASSISTANT_NO_SUGGESTION);
    }

    #[test]
    fn test_provider_for_kind() {
        assert!(provider_for(ProviderKind::Canned).is_configured());
        assert!(!provider_for(ProviderKind::Disabled).is_configured());
    }
}
