//! # Application State
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreState        Arc<Mutex<AppState>>, the single mutable root        │
//! │  StorefrontConfig  timings, toast bound, demo name, assistant choice    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;

pub use app::{AppState, CartSnapshot, Effect, FlowFlags, StateSnapshot, StoreState, Transition};
pub use config::{
    AssistantSettings, ConfigError, ConfigResult, NotificationSettings, ProviderKind,
    SessionSettings, StorefrontConfig, TimingSettings, CONFIG_FILE_NAME,
};
