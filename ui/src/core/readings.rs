//! Logged readings. The log lives for the process lifetime only and is never
//! trimmed, so exports always carry the full session history.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingSource {
    Manual,
    Simulated,
}

impl ReadingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Simulated => "Simulated",
        }
    }
}

impl std::fmt::Display for ReadingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measurement event with its computed index.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub source: ReadingSource,
    pub weight: f64,
    pub size: f64,
    pub quality_index: f64,
    pub timestamp: String,
}

/// Append-only, insertion-ordered reading log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogStore {
    entries: Vec<Reading>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, reading: Reading) {
        self.entries.push(reading);
    }

    pub fn entries(&self) -> &[Reading] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_by(&self, source: ReadingSource) -> usize {
        self.entries.iter().filter(|r| r.source == source).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(source: ReadingSource, index: f64) -> Reading {
        Reading {
            source,
            weight: 2.5,
            size: 7.0,
            quality_index: index,
            timestamp: "10/19/2026 09:00:00".into(),
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut log = LogStore::new();
        log.append(reading(ReadingSource::Manual, 10.0));
        log.append(reading(ReadingSource::Simulated, 20.0));
        log.append(reading(ReadingSource::Manual, 30.0));

        let indices: Vec<f64> = log.entries().iter().map(|r| r.quality_index).collect();
        assert_eq!(indices, vec![10.0, 20.0, 30.0]);
        assert_eq!(log.count_by(ReadingSource::Manual), 2);
        assert_eq!(log.count_by(ReadingSource::Simulated), 1);
    }

    #[test]
    fn grows_past_chart_window() {
        let mut log = LogStore::new();
        for i in 0..50 {
            log.append(reading(ReadingSource::Simulated, i as f64));
        }
        assert_eq!(log.len(), 50);
    }

    #[test]
    fn source_display_matches_csv_type_column() {
        assert_eq!(ReadingSource::Manual.to_string(), "Manual");
        assert_eq!(ReadingSource::Simulated.to_string(), "Simulated");
    }
}
