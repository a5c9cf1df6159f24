// River discharge series domain model
use super::reading::Reading;

/// Chart labels, oldest first. Positionally bound to the series samples.
pub const DAY_LABELS: [&str; 7] = [
    "6 Days Ago",
    "5 Days Ago",
    "4 Days Ago",
    "3 Days Ago",
    "2 Days Ago",
    "Yesterday",
    "Today",
];

pub const SERIES_LEN: usize = DAY_LABELS.len();

/// How a backend sample list was fitted onto the fixed label window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Exact,
    /// Oldest slots filled with the sentinel.
    Padded { missing: usize },
    /// Oldest surplus samples dropped.
    Truncated { dropped: usize },
}

/// Seven days of discharge readings, oldest first. The last slot is always `Today`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DischargeSeries {
    samples: [Reading; SERIES_LEN],
}

impl DischargeSeries {
    /// Right-align `samples` against [`DAY_LABELS`] so the newest sample lands on `Today`.
    pub fn align(samples: &[Option<f64>]) -> (Self, Alignment) {
        let mut aligned = [Reading::not_available(); SERIES_LEN];

        let alignment = match samples.len() {
            SERIES_LEN => Alignment::Exact,
            n if n < SERIES_LEN => Alignment::Padded {
                missing: SERIES_LEN - n,
            },
            n => Alignment::Truncated {
                dropped: n - SERIES_LEN,
            },
        };

        let kept = &samples[samples.len().saturating_sub(SERIES_LEN)..];
        let offset = SERIES_LEN - kept.len();
        for (slot, sample) in aligned[offset..].iter_mut().zip(kept) {
            *slot = Reading::from(*sample);
        }

        (Self { samples: aligned }, alignment)
    }

    pub const fn samples(&self) -> &[Reading; SERIES_LEN] {
        &self.samples
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.samples.iter().map(Reading::value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_exact_series_keeps_order() {
        let raw = some(&[100.0, 105.0, 110.0, 108.0, 115.0, 118.0, 120.0]);
        let (series, alignment) = DischargeSeries::align(&raw);

        assert_eq!(alignment, Alignment::Exact);
        assert_eq!(series.values(), raw);
        assert_eq!(series.samples()[SERIES_LEN - 1], Reading::new(120.0));
    }

    #[test]
    fn test_short_series_is_padded_at_oldest_end() {
        let (series, alignment) = DischargeSeries::align(&some(&[110.0, 115.0, 120.0]));

        assert_eq!(alignment, Alignment::Padded { missing: 4 });
        assert_eq!(
            series.values(),
            vec![None, None, None, None, Some(110.0), Some(115.0), Some(120.0)]
        );
    }

    #[test]
    fn test_empty_series_is_all_sentinels() {
        let (series, alignment) = DischargeSeries::align(&[]);

        assert_eq!(alignment, Alignment::Padded { missing: 7 });
        assert!(series.samples().iter().all(|r| !r.is_available()));
    }

    #[test]
    fn test_long_series_drops_oldest() {
        let raw = some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let (series, alignment) = DischargeSeries::align(&raw);

        assert_eq!(alignment, Alignment::Truncated { dropped: 2 });
        assert_eq!(series.values(), some(&[3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]));
    }

    #[test]
    fn test_missing_sample_stays_in_place() {
        let raw = vec![Some(1.0), None, Some(3.0), Some(4.0), Some(5.0), Some(6.0), Some(7.0)];
        let (series, _) = DischargeSeries::align(&raw);

        assert_eq!(series.samples()[1], Reading::not_available());
    }
}
