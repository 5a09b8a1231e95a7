use crate::model::PriceSample;
use std::collections::VecDeque;

/// Bounded ring buffer of price samples, insertion order = chronological order.
/// Once at capacity, pushing evicts the oldest sample. The analyzer only ever
/// reads the tail; the rest of the window is kept for future surfaces.
#[derive(Debug)]
pub struct PriceHistory {
    samples: VecDeque<PriceSample>,
    capacity: usize,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, sample: PriceSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Last `n` prices, oldest first.
    pub fn tail_prices(&self, n: usize) -> Vec<f64> {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip).map(|s| s.price).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_prices(history: &mut PriceHistory, prices: &[f64]) {
        for &p in prices {
            history.push(PriceSample::new(p));
        }
    }

    #[test]
    fn tail_is_oldest_first() {
        let mut history = PriceHistory::new(10);
        push_prices(&mut history, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(history.tail_prices(3), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn tail_shorter_than_requested_returns_everything() {
        let mut history = PriceHistory::new(10);
        push_prices(&mut history, &[5.0, 6.0]);
        assert_eq!(history.tail_prices(3), vec![5.0, 6.0]);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = PriceHistory::new(3);
        push_prices(&mut history, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.tail_prices(3), vec![3.0, 4.0, 5.0]);
    }
}
