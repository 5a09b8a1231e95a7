use crate::history::PriceHistory;
use crate::model::Trend;

/// Trait defining the interface for a trend analyzer.
pub trait TrendAnalyzer {
    fn classify(&self, history: &PriceHistory) -> Trend;
}

/// Sign comparison of the last two consecutive deltas. No smoothing, no
/// magnitude weighting; a zero delta always falls to neutral.
pub struct ThreePointAnalyzer;

impl ThreePointAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreePointAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer for ThreePointAnalyzer {
    fn classify(&self, history: &PriceHistory) -> Trend {
        let tail = history.tail_prices(3);
        if tail.len() < 3 {
            return Trend::Collecting;
        }

        let delta1 = tail[2] - tail[1];
        let delta2 = tail[1] - tail[0];

        if delta1 > 0.0 && delta2 > 0.0 {
            Trend::Up
        } else if delta1 < 0.0 && delta2 < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceSample;

    fn history_of(prices: &[f64]) -> PriceHistory {
        let mut history = PriceHistory::new(16);
        for &p in prices {
            history.push(PriceSample::new(p));
        }
        history
    }

    fn classify(prices: &[f64]) -> Trend {
        ThreePointAnalyzer::new().classify(&history_of(prices))
    }

    #[test]
    fn short_history_is_collecting_regardless_of_values() {
        assert_eq!(classify(&[]), Trend::Collecting);
        assert_eq!(classify(&[42.0]), Trend::Collecting);
        assert_eq!(classify(&[100.0, 1.0]), Trend::Collecting);
    }

    #[test]
    fn two_positive_deltas_is_uptrend() {
        assert_eq!(classify(&[1.0, 2.0, 3.0]), Trend::Up);
    }

    #[test]
    fn two_negative_deltas_is_downtrend() {
        assert_eq!(classify(&[3.0, 2.0, 1.0]), Trend::Down);
    }

    #[test]
    fn mixed_signs_is_neutral() {
        assert_eq!(classify(&[1.0, 3.0, 2.0]), Trend::Neutral);
    }

    #[test]
    fn zero_delta_is_neutral_never_a_trend() {
        assert_eq!(classify(&[2.0, 2.0, 3.0]), Trend::Neutral);
        assert_eq!(classify(&[3.0, 2.0, 2.0]), Trend::Neutral);
    }

    #[test]
    fn only_the_last_three_samples_matter() {
        assert_eq!(classify(&[9.0, 1.0, 2.0, 3.0]), Trend::Up);
    }
}
