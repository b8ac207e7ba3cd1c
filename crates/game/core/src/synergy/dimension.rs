use strum::EnumCount;

use super::DimensionChainConfig;
use crate::state::Dimension;

/// Draw and energy granted for covering several dimensions in one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoverageReward {
    pub draw: u32,
    pub energy: u32,
}

impl CoverageReward {
    pub fn is_empty(&self) -> bool {
        self.draw == 0 && self.energy == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DimensionChain {
    counts: [u32; Dimension::COUNT],
    draw_rewarded: bool,
    energy_rewarded: bool,
}

impl DimensionChain {
    pub fn count(&self, dimension: Dimension) -> u32 {
        self.counts[dimension.index()]
    }

    /// Distinct dimensions played this turn.
    pub fn coverage(&self) -> u32 {
        self.counts.iter().filter(|&&c| c > 0).count() as u32
    }

    /// Records a play and returns its chain bonus. Only the second and third
    /// card of a dimension earn one.
    pub fn record(&mut self, dimension: Dimension, config: &DimensionChainConfig) -> f32 {
        let count = &mut self.counts[dimension.index()];
        *count += 1;
        match *count {
            2 => config.second_card_bonus,
            3 => config.third_card_bonus,
            _ => 0.0,
        }
    }

    /// Each coverage reward fires at most once per turn.
    pub fn check_coverage(&mut self, config: &DimensionChainConfig) -> CoverageReward {
        let coverage = self.coverage();
        let mut reward = CoverageReward::default();
        if coverage >= config.coverage_draw_at && !self.draw_rewarded {
            self.draw_rewarded = true;
            reward.draw += 1;
        }
        if coverage >= config.coverage_draw_and_energy_at && !self.energy_rewarded {
            self.energy_rewarded = true;
            reward.draw += 1;
            reward.energy += 1;
        }
        reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_bonus_grows_with_repeats() {
        let config = DimensionChainConfig::default();
        let mut chain = DimensionChain::default();
        assert_eq!(chain.record(Dimension::Strike, &config), 0.0);
        assert_eq!(chain.record(Dimension::Strike, &config), 0.2);
        assert_eq!(chain.record(Dimension::Strike, &config), 0.4);
        assert_eq!(chain.record(Dimension::Strike, &config), 0.0);
        assert_eq!(chain.record(Dimension::Guard, &config), 0.0);
    }

    #[test]
    fn coverage_rewards_fire_once_per_turn() {
        let config = DimensionChainConfig::default();
        let mut chain = DimensionChain::default();
        for dimension in [Dimension::Strike, Dimension::Guard] {
            chain.record(dimension, &config);
        }
        assert!(chain.check_coverage(&config).is_empty());

        chain.record(Dimension::Boost, &config);
        assert_eq!(
            chain.check_coverage(&config),
            CoverageReward { draw: 1, energy: 0 }
        );
        chain.record(Dimension::Boost, &config);
        assert!(chain.check_coverage(&config).is_empty());

        chain.record(Dimension::Warp, &config);
        assert_eq!(
            chain.check_coverage(&config),
            CoverageReward { draw: 1, energy: 1 }
        );
        chain.record(Dimension::Warp, &config);
        assert!(chain.check_coverage(&config).is_empty());
    }
}
