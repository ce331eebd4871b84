//! Value frequency tables.

/// Frequency of each channel value `0..=max_value` across an image.
///
/// Values above `max_value` (the pixel type does not forbid them) are
/// counted in the top bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    pub(crate) fn from_values(max_value: u16, values: impl Iterator<Item = u16>) -> Self {
        let mut counts = vec![0u32; usize::from(max_value) + 1];
        let top = counts.len() - 1;
        for value in values {
            counts[usize::from(value).min(top)] += 1;
        }
        Self { counts }
    }

    /// Counts indexed by value.
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Count for a single value; zero outside the range.
    #[inline]
    pub fn count(&self, value: u16) -> u32 {
        self.counts.get(usize::from(value)).copied().unwrap_or(0)
    }

    /// Number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// The most frequent value, lowest on ties. `None` when empty.
    pub fn peak(&self) -> Option<u16> {
        let mut best: Option<(usize, u32)> = None;
        for (value, &count) in self.counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value as u16)
    }
}
