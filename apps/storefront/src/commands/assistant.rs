//! # Assistant Commands
//!
//! The "Gợi ý món ăn" box: a free-text prompt in, one suggestion out after
//! a fixed delay. Leaving the view drops the request.

use tracing::{debug, info};

use monngon_core::validation::validate_prompt;
use monngon_core::ValidationError;

use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::services::recommend;
use crate::state::AppState;
use crate::storefront::Storefront;

/// Starts a suggestion request.
pub fn request_suggestion(app: &Storefront, prompt: &str) -> ApiResult<()> {
    debug!(prompt_len = prompt.len(), "request_suggestion command");
    app.surface(start_suggestion(app, prompt))
}

fn start_suggestion(app: &Storefront, prompt: &str) -> ApiResult<()> {
    let prompt = validate_prompt(prompt).map_err(|e| match e {
        ValidationError::Required { .. } => ApiError::validation(messages::PROMPT_MISSING),
        other => ApiError::from(other),
    })?;

    let (view, epoch) = app.update(|s| {
        if s.flows.suggestion_loading {
            return Err(ApiError::busy(messages::SUGGESTION_IN_PROGRESS));
        }
        s.flows.suggestion_loading = true;
        s.suggestion = None;
        Ok((s.current_view(), s.view_epoch()))
    })?;

    let delay = app.config().timing.suggestion_delay();
    let assistant = app.assistant();
    let this = app.clone();
    app.spawn_flow("suggestion", view, async move {
        tokio::time::sleep(delay).await;
        let text = recommend(assistant.as_ref(), &prompt).await;
        this.update(|s| complete_suggestion(s, epoch, text));
    });

    Ok(())
}

fn complete_suggestion(state: &mut AppState, epoch: u64, text: String) -> bool {
    if !state.is_current_epoch(epoch) || !state.flows.suggestion_loading {
        debug!("Suggestion arrived after its view was left, dropping");
        return false;
    }
    state.flows.suggestion_loading = false;
    state.suggestion = Some(text);
    info!("Suggestion ready");
    true
}

pub fn current_suggestion(app: &Storefront) -> Option<String> {
    app.read(|s| s.suggestion.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::nav;
    use crate::commands::test_support::{last_message, storefront};
    use crate::error::ErrorCode;
    use crate::state::{ProviderKind, StorefrontConfig};
    use monngon_core::View;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_blank_prompt_rejected() {
        let app = storefront();
        let err = request_suggestion(&app, "   ").unwrap_err();

        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(last_message(&app).unwrap(), messages::PROMPT_MISSING);
        assert!(!app.read(|s| s.flows.suggestion_loading));
    }

    #[tokio::test(start_paused = true)]
    async fn test_suggestion_arrives_after_delay() {
        let app = storefront();
        request_suggestion(&app, "Tôi muốn ăn món nước nóng").unwrap();
        assert!(app.read(|s| s.flows.suggestion_loading));

        tokio::time::sleep(Duration::from_millis(1_400)).await;
        assert!(current_suggestion(&app).is_none());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(current_suggestion(&app).unwrap(), messages::CANNED_SUGGESTION);
        assert!(!app.read(|s| s.flows.suggestion_loading));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_assistant_reply() {
        let mut config = StorefrontConfig::default();
        config.assistant.provider = ProviderKind::Disabled;
        let app = Storefront::new(config).unwrap();

        request_suggestion(&app, "bún chả").unwrap();
        tokio::time::sleep(Duration::from_millis(1_600)).await;
        assert_eq!(current_suggestion(&app).unwrap(), messages::ASSISTANT_NOT_CONFIGURED);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_request_while_loading_is_busy() {
        let app = storefront();
        request_suggestion(&app, "phở").unwrap();
        assert_eq!(request_suggestion(&app, "bún").unwrap_err().code, ErrorCode::Busy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_view_drops_suggestion() {
        let app = storefront();
        request_suggestion(&app, "phở").unwrap();
        nav::navigate(&app, View::MapDiscovery);

        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert!(current_suggestion(&app).is_none());
        assert_eq!(app.tasks().active_in(View::Landing), 0);
    }
}
