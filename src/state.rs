//! Application state shared across web handlers.

use crate::config::Config;
use crate::suggest::service::PopularWordService;
use std::sync::Arc;

/// Default filter dimensions applied when a request omits them.
#[derive(Debug, Clone, Default)]
pub struct SuggestDefaults {
    pub tags: Vec<String>,
    pub fields: Vec<String>,
    pub excludes: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub word_service: PopularWordService,
    pub suggest_defaults: Arc<SuggestDefaults>,
    pub popular_words_enabled: bool,
}

impl AppState {
    pub fn new(word_service: PopularWordService, config: &Config) -> Self {
        Self {
            word_service,
            suggest_defaults: Arc::new(SuggestDefaults {
                tags: config.popular_word_tag_list(),
                fields: config.popular_word_field_list(),
                excludes: config.popular_word_exclude_list(),
            }),
            popular_words_enabled: config.popular_word_enabled,
        }
    }
}
