//! Bounded chart series backing the quality chart.

use std::collections::VecDeque;

/// Default number of points kept on screen.
pub const DEFAULT_CAPACITY: usize = 15;

/// Rolling window of `(label, value)` points. Oldest points are evicted first
/// once `capacity` is exceeded; labels and values always stay paired.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    capacity: usize,
    labels: VecDeque<String>,
    values: VecDeque<f64>,
}

impl ChartSeries {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            labels: VecDeque::with_capacity(capacity + 1),
            values: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Push a point, evicting the oldest one when the window overflows.
    pub fn append(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push_back(label.into());
        self.values.push_back(value);
        while self.labels.len() > self.capacity {
            self.labels.pop_front();
            self.values.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels().zip(self.values())
    }

    pub fn latest(&self) -> Option<(&str, f64)> {
        self.labels
            .back()
            .zip(self.values.back())
            .map(|(label, value)| (label.as_str(), *value))
    }
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let series = ChartSeries::default();
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut series = ChartSeries::default();
        for i in 0..40 {
            series.append(format!("t{i}"), i as f64);
            assert!(series.len() <= 15);
        }
    }

    #[test]
    fn keeps_last_fifteen_in_order_after_twenty_appends() {
        let mut series = ChartSeries::default();
        for i in 0..20 {
            series.append(format!("t{i}"), i as f64);
        }
        let values: Vec<f64> = series.values().collect();
        let expected: Vec<f64> = (5..20).map(|i| i as f64).collect();
        assert_eq!(values, expected);

        let labels: Vec<&str> = series.labels().collect();
        assert_eq!(labels.first(), Some(&"t5"));
        assert_eq!(labels.last(), Some(&"t19"));
        assert_eq!(series.latest(), Some(("t19", 19.0)));
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut series = ChartSeries::new(0);
        series.append("a", 1.0);
        series.append("b", 2.0);
        assert_eq!(series.points().collect::<Vec<_>>(), vec![("b", 2.0)]);
    }
}
