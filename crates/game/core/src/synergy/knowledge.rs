use super::KnowledgeResonanceConfig;
use crate::env::ProficiencyLevel;

/// Rewards offered once enough insight accumulates in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsightReward {
    pub damage: u32,
    pub block: u32,
    pub draw: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeResonance {
    previous_high: bool,
    insight_tokens: u32,
}

impl KnowledgeResonance {
    pub fn insight_tokens(&self) -> u32 {
        self.insight_tokens
    }

    /// Records a card's proficiency and returns its contrast bonus.
    ///
    /// A card without a learning record breaks the high/low sequence.
    pub fn record(
        &mut self,
        level: Option<ProficiencyLevel>,
        config: &KnowledgeResonanceConfig,
    ) -> f32 {
        let Some(level) = level else {
            self.previous_high = false;
            return 0.0;
        };
        let high = level >= config.high_level;
        let bonus = if !high && self.previous_high {
            config.low_level_bonus
        } else {
            0.0
        };
        if high {
            self.insight_tokens += 1;
        }
        self.previous_high = high;
        bonus
    }

    /// Resets the token count when it reached the threshold.
    pub fn take_reward(&mut self, config: &KnowledgeResonanceConfig) -> Option<InsightReward> {
        if config.insight_threshold == 0 || self.insight_tokens < config.insight_threshold {
            return None;
        }
        self.insight_tokens = 0;
        Some(InsightReward {
            damage: config.insight_reward_damage,
            block: config.insight_reward_block,
            draw: config.insight_reward_draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_after_high_gets_bonus() {
        let config = KnowledgeResonanceConfig::default();
        let mut knowledge = KnowledgeResonance::default();
        assert_eq!(
            knowledge.record(Some(ProficiencyLevel::Mastered), &config),
            0.0
        );
        assert_eq!(knowledge.record(Some(ProficiencyLevel::New), &config), 0.3);
        assert_eq!(knowledge.record(Some(ProficiencyLevel::New), &config), 0.0);
    }

    #[test]
    fn missing_record_breaks_the_sequence() {
        let config = KnowledgeResonanceConfig::default();
        let mut knowledge = KnowledgeResonance::default();
        knowledge.record(Some(ProficiencyLevel::Proficient), &config);
        knowledge.record(None, &config);
        assert_eq!(knowledge.record(Some(ProficiencyLevel::Known), &config), 0.0);
    }

    #[test]
    fn insight_reward_at_threshold() {
        let config = KnowledgeResonanceConfig::default();
        let mut knowledge = KnowledgeResonance::default();
        for _ in 0..2 {
            knowledge.record(Some(ProficiencyLevel::Remembered), &config);
        }
        assert!(knowledge.take_reward(&config).is_none());
        knowledge.record(Some(ProficiencyLevel::Remembered), &config);
        assert_eq!(
            knowledge.take_reward(&config),
            Some(InsightReward {
                damage: 3,
                block: 3,
                draw: 1
            })
        );
        assert_eq!(knowledge.insight_tokens(), 0);
    }
}
