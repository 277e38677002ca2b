//! External collaborators.

pub mod suggestion;

pub use suggestion::{
    provider_for, recommend, CannedProvider, SuggestionError, SuggestionProvider,
    UnconfiguredProvider,
};
