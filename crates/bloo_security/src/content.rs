//! Word and pattern filtering for command arguments.

use crate::{SecurityError, SecurityErrorKind, SecurityResult};
use async_trait::async_trait;
use bloo_core::{FilterVerdict, GuildId, Invoker, PermissionTier};
use bloo_interface::{AuthorityResolver, FilterEngine};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A prohibited word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterWord {
    /// Phrase to match, case-insensitively
    pub phrase: String,

    /// Invokers at or above this tier are never filtered by this word
    #[serde(default = "default_bypass")]
    pub bypass: PermissionTier,

    /// Only match as a whole word, for phrases that commonly appear inside
    /// harmless words
    #[serde(default)]
    pub false_positive: bool,

    /// Log a moderator notification when this word triggers
    #[serde(default)]
    pub notify: bool,
}

/// A prohibited regex pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPattern {
    /// Regex source
    pub pattern: String,

    /// Invokers at or above this tier are never filtered by this pattern
    #[serde(default = "default_bypass")]
    pub bypass: PermissionTier,
}

fn default_bypass() -> PermissionTier {
    PermissionTier::MODERATOR
}

/// Content filter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Prohibited words and phrases
    #[serde(default)]
    pub words: Vec<FilterWord>,

    /// Prohibited regex patterns
    #[serde(default)]
    pub patterns: Vec<FilterPattern>,
}

/// Filter engine matching words and patterns, scoped by invoker tier.
pub struct WordFilter {
    config: FilterConfig,
    patterns: Vec<Regex>,
    symbol_regex: Regex,
    resolver: Arc<dyn AuthorityResolver>,
}

impl WordFilter {
    /// Create a new word filter.
    ///
    /// `resolver` decides whether an invoker bypasses a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regex.
    pub fn new(config: FilterConfig, resolver: Arc<dyn AuthorityResolver>) -> SecurityResult<Self> {
        let mut patterns = Vec::with_capacity(config.patterns.len());
        for rule in &config.patterns {
            match Regex::new(&rule.pattern) {
                Ok(regex) => patterns.push(regex),
                Err(e) => {
                    return Err(SecurityError::new(SecurityErrorKind::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        reason: e.to_string(),
                    }));
                }
            }
        }

        let symbol_regex = Regex::new(r"[^\w\s]").map_err(|e| {
            SecurityError::new(SecurityErrorKind::Configuration(format!(
                "Failed to build symbol regex: {}",
                e
            )))
        })?;

        Ok(Self {
            config,
            patterns,
            symbol_regex,
            resolver,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Match `text` against every rule the given tier does not bypass.
    ///
    /// An unknown tier (`None`) bypasses nothing.
    pub fn matches(&self, text: &str, tier: Option<PermissionTier>) -> FilterVerdict {
        let bypasses = |required: PermissionTier| tier.is_some_and(|tier| tier.meets(required));
        let mut verdict = FilterVerdict::clean();
        if text.is_empty() {
            return verdict;
        }

        let lowered = text.to_lowercase();
        let stripped = self.symbol_regex.replace_all(&lowered, "");

        for word in &self.config.words {
            if bypasses(word.bypass) {
                continue;
            }
            let phrase = word.phrase.to_lowercase();
            if phrase.is_empty() {
                continue;
            }

            let triggered = if word.false_positive {
                lowered
                    .split_whitespace()
                    .chain(stripped.split_whitespace())
                    .any(|token| token == phrase)
            } else {
                lowered.contains(&phrase) || stripped.contains(&phrase)
            };

            if triggered {
                if word.notify {
                    info!(phrase = %word.phrase, "Notify word triggered");
                }
                verdict.insert(word.phrase.clone());
            }
        }

        for (rule, regex) in self.config.patterns.iter().zip(&self.patterns) {
            if !bypasses(rule.bypass) && regex.is_match(text) {
                verdict.insert(rule.pattern.clone());
            }
        }

        verdict
    }
}

#[async_trait]
impl FilterEngine for WordFilter {
    #[instrument(skip(self, text, invoker), fields(text_len = text.len(), user_id = %invoker.user_id()))]
    async fn scan(&self, text: &str, guild: GuildId, invoker: &Invoker) -> FilterVerdict {
        if text.is_empty() || (self.config.words.is_empty() && self.patterns.is_empty()) {
            return FilterVerdict::clean();
        }

        let tier = match self.resolver.resolve_tier(guild, invoker).await {
            Ok(tier) => Some(tier),
            Err(e) => {
                warn!(error = %e, "Tier resolution failed, applying every rule");
                None
            }
        };

        let verdict = self.matches(text, tier);
        debug!(triggered = verdict.triggered().len(), "Scanned text");
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PermissionConfig, RoleTierResolver};

    fn word(phrase: &str, bypass: u8, false_positive: bool) -> FilterWord {
        FilterWord {
            phrase: phrase.to_string(),
            bypass: PermissionTier::new(bypass),
            false_positive,
            notify: false,
        }
    }

    fn create_test_filter(config: FilterConfig) -> WordFilter {
        let resolver = Arc::new(RoleTierResolver::new(PermissionConfig::default()));
        WordFilter::new(config, resolver).unwrap()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let filter = create_test_filter(FilterConfig {
            words: vec![word("badword", 5, false)],
            ..Default::default()
        });

        assert!(filter.matches("hello world", Some(PermissionTier::EVERYONE)).is_clean());
        assert!(!filter.matches("a BadWord here", Some(PermissionTier::EVERYONE)).is_clean());
        assert!(!filter.matches("xxbadwordxx", Some(PermissionTier::EVERYONE)).is_clean());
    }

    #[test]
    fn test_symbols_are_stripped() {
        let filter = create_test_filter(FilterConfig {
            words: vec![word("badword", 5, false)],
            ..Default::default()
        });

        let verdict = filter.matches("b.a.d-w*o*r*d", Some(PermissionTier::EVERYONE));
        assert_eq!(verdict.triggered().len(), 1);
        assert!(verdict.triggered().contains("badword"));
    }

    #[test]
    fn test_false_positive_requires_whole_word() {
        let filter = create_test_filter(FilterConfig {
            words: vec![word("ass", 5, true)],
            ..Default::default()
        });

        assert!(filter.matches("pass the class", Some(PermissionTier::EVERYONE)).is_clean());
        assert!(!filter.matches("what an ass", Some(PermissionTier::EVERYONE)).is_clean());
        assert!(!filter.matches("what an ass!", Some(PermissionTier::EVERYONE)).is_clean());
    }

    #[test]
    fn test_bypass_tier() {
        let filter = create_test_filter(FilterConfig {
            words: vec![word("badword", 5, false)],
            ..Default::default()
        });

        assert!(!filter.matches("badword", Some(PermissionTier::GENIUS)).is_clean());
        assert!(filter.matches("badword", Some(PermissionTier::MODERATOR)).is_clean());
    }

    #[test]
    fn test_prohibited_patterns() {
        let filter = create_test_filter(FilterConfig {
            patterns: vec![FilterPattern {
                pattern: r"(?i)discord\.gg/\w+".to_string(),
                bypass: PermissionTier::MODERATOR,
            }],
            ..Default::default()
        });

        assert!(filter.matches("join us", Some(PermissionTier::EVERYONE)).is_clean());
        assert!(
            !filter
                .matches("join discord.gg/abc", Some(PermissionTier::EVERYONE))
                .is_clean()
        );
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let resolver = Arc::new(RoleTierResolver::new(PermissionConfig::default()));
        let result = WordFilter::new(
            FilterConfig {
                patterns: vec![FilterPattern {
                    pattern: "(unclosed".to_string(),
                    bypass: PermissionTier::MODERATOR,
                }],
                ..Default::default()
            },
            resolver,
        );
        assert!(matches!(
            result.map(|_| ()).unwrap_err().kind(),
            SecurityErrorKind::InvalidPattern { .. }
        ));
    }

    #[tokio::test]
    async fn test_scan_without_member_data_applies_every_rule() {
        let filter = create_test_filter(FilterConfig {
            words: vec![word("badword", 0, false)],
            ..Default::default()
        });
        let invoker = Invoker::user(bloo_core::UserId::new(1));

        // A tier 0 bypass exempts every member, but resolution fails first.
        let verdict = filter.scan("badword", GuildId::new(1), &invoker).await;
        assert!(!verdict.is_clean());
    }
}
