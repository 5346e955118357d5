//! Popular-word lookup orchestration: role resolution, key construction,
//! and cache-mediated backend queries.

use crate::suggest::cache::SuggestionCache;
use crate::suggest::client::{PopularWordQuery, SuggestClient};
use crate::suggest::key::cache_key;
use crate::suggest::roles::RoleResolver;
use crate::utils::fmt_duration;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Per-query size parameters, fixed at construction from configuration.
#[derive(Debug, Clone, Copy)]
pub struct QueryLimits {
    /// Ranked terms requested per query.
    pub size: u32,
    /// Ranking window the backend scans per query.
    pub window_size: u32,
}

/// Front door for popular-word lookups. Clone-cheap.
#[derive(Clone)]
pub struct PopularWordService {
    cache: SuggestionCache,
    client: Arc<dyn SuggestClient>,
    roles: Arc<dyn RoleResolver>,
    limits: QueryLimits,
}

impl PopularWordService {
    pub fn new(
        cache: SuggestionCache,
        client: Arc<dyn SuggestClient>,
        roles: Arc<dyn RoleResolver>,
        limits: QueryLimits,
    ) -> Self {
        Self {
            cache,
            client,
            roles,
            limits,
        }
    }

    /// Popular words for the given dimensions, scoped by resolved roles.
    ///
    /// Never fails; worst case returns an empty list.
    pub async fn word_list(
        &self,
        seed: Option<&str>,
        tags: &[String],
        fields: &[String],
        excludes: &[String],
    ) -> Arc<Vec<String>> {
        // Roles participate in the cache key, so resolution happens before
        // key construction.
        let roles = self.roles.resolve().await;
        self.word_list_with_roles(seed, tags, &roles, fields, excludes)
            .await
    }

    /// Popular words scoped by an explicit role set, bypassing resolution.
    pub async fn word_list_with_roles(
        &self,
        seed: Option<&str>,
        tags: &[String],
        roles: &[String],
        fields: &[String],
        excludes: &[String],
    ) -> Arc<Vec<String>> {
        let key = cache_key(seed, tags, roles, fields, excludes);
        let query = PopularWordQuery {
            seed: seed.map(str::to_owned),
            tags: tags.to_vec(),
            roles: roles.to_vec(),
            fields: fields.to_vec(),
            excludes: excludes.to_vec(),
            size: self.limits.size,
            window_size: self.limits.window_size,
        };
        let client = self.client.clone();
        self.cache
            .get_or_load(&key, move || async move {
                let start = Instant::now();
                let items = client.popular_words(&query).await?;
                debug!(
                    terms = items.len(),
                    elapsed = fmt_duration(start.elapsed()),
                    "Popular word query completed"
                );
                Ok(items.into_iter().map(|item| item.text).collect())
            })
            .await
    }
}
