use std::collections::BTreeMap;

use super::ResourceMediatorConfig;

/// Tag tokens produced this turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourcePool {
    tokens: BTreeMap<String, u32>,
}

impl ResourcePool {
    pub fn tokens(&self, tag: &str) -> u32 {
        self.tokens.get(tag).copied().unwrap_or(0)
    }

    /// Consumes up to the per-tag cap for each tag; returns the capped bonus.
    pub fn consume(&mut self, tags: &[String], config: &ResourceMediatorConfig) -> f32 {
        let mut bonus = 0.0;
        for tag in tags {
            let Some(available) = self.tokens.get_mut(tag) else {
                continue;
            };
            let taken = (*available).min(config.max_tokens_per_tag);
            *available -= taken;
            if *available == 0 {
                self.tokens.remove(tag);
            }
            bonus += taken as f32 * config.bonus_per_token;
        }
        bonus.min(config.max_total_bonus)
    }

    /// Adds one token per tag, capped per tag.
    pub fn produce(&mut self, tags: &[String], config: &ResourceMediatorConfig) {
        for tag in tags {
            let count = self.tokens.entry(tag.clone()).or_insert(0);
            *count = (*count + 1).min(config.max_tokens_per_tag);
        }
    }
}
