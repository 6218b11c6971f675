use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::primitives::{DomainValue, datetime_to_unix_millis};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Ordinal,
    Linear,
    Time,
}

/// Mapping between data space and pixel space.
///
/// The geometry functions only consume this contract. `scale` returns `None`
/// for values a scale cannot place (unknown categories, text on a numeric
/// scale, NaN); callers never see a NaN pixel.
pub trait Scale: Send + Sync {
    fn scale_type(&self) -> ScaleType;

    fn scale(&self, value: &DomainValue) -> Option<f64>;

    fn invert(&self, pixel: f64) -> Option<DomainValue>;

    /// Inverts `pixel` and snaps the result onto one of `data` (sorted).
    fn invert_with_step(&self, pixel: f64, data: &[DomainValue]) -> Option<DomainValue>;

    /// Pixel width of one band, `0` for continuous scales.
    fn bandwidth(&self) -> f64;

    /// Fraction of a band step left empty, in `[0, 1)`.
    fn bars_padding(&self) -> f64;

    fn domain(&self) -> &[DomainValue];

    fn is_continuous(&self) -> bool {
        self.scale_type() != ScaleType::Ordinal
    }

    /// Whether a value lies inside the domain extent of a continuous scale.
    ///
    /// Ordinal scales accept everything here and reject unknown categories
    /// through `scale` instead.
    fn is_within_domain(&self, value: &DomainValue) -> bool {
        if !self.is_continuous() {
            return true;
        }
        let Some(value) = value.as_number() else {
            return false;
        };
        let bounds = self.domain();
        let (Some(first), Some(last)) = (
            bounds.first().and_then(DomainValue::as_number),
            bounds.last().and_then(DomainValue::as_number),
        ) else {
            return false;
        };
        value >= first.min(last) && value <= first.max(last)
    }
}

fn validate_bars_padding(bars_padding: f64) -> ChartResult<()> {
    if !bars_padding.is_finite() || !(0.0..1.0).contains(&bars_padding) {
        return Err(ChartError::InvalidScale(format!(
            "bars padding must be in [0, 1), got {bars_padding}"
        )));
    }
    Ok(())
}

fn validate_range(range_start: f64, range_end: f64) -> ChartResult<()> {
    if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
        return Err(ChartError::InvalidScale(
            "scale range must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

/// Smallest positive gap between neighbouring numeric values of sorted data.
fn smallest_step(data: &[DomainValue]) -> Option<f64> {
    data.windows(2)
        .filter_map(|pair| Some(pair[1].as_number()? - pair[0].as_number()?))
        .filter(|gap| *gap > 0.0)
        .min_by_key(|gap| OrderedFloat(*gap))
}

/// Continuous numeric (or time) scale.
///
/// A linear scale used by bar series carries a bandwidth: bars are drawn
/// starting at the scaled value and `min_interval` is the data step used to
/// snap the cursor onto the bar it hovers. Without an explicit interval the
/// smallest gap of the snapped data is used.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    scale_type: ScaleType,
    domain: [DomainValue; 2],
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    bandwidth: f64,
    bars_padding: f64,
    min_interval: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidScale(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            scale_type: ScaleType::Linear,
            domain: [
                DomainValue::Number(domain_start),
                DomainValue::Number(domain_end),
            ],
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
            bandwidth: 0.0,
            bars_padding: 0.0,
            min_interval: 0.0,
        })
    }

    /// Time scale over `[start, end]`, values expressed in unix milliseconds.
    pub fn time(start: DateTime<Utc>, end: DateTime<Utc>) -> ChartResult<Self> {
        let mut scale = Self::new(datetime_to_unix_millis(start), datetime_to_unix_millis(end))?;
        scale.scale_type = ScaleType::Time;
        Ok(scale)
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        validate_range(range_start, range_end)?;
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    /// Gives the scale a bar band: `raw_bandwidth` is the full slot width,
    /// of which `bars_padding` is left empty.
    pub fn with_bandwidth(mut self, raw_bandwidth: f64, bars_padding: f64) -> ChartResult<Self> {
        validate_bars_padding(bars_padding)?;
        if !raw_bandwidth.is_finite() || raw_bandwidth < 0.0 {
            return Err(ChartError::InvalidScale(format!(
                "bandwidth must be finite and non-negative, got {raw_bandwidth}"
            )));
        }
        self.bandwidth = raw_bandwidth * (1.0 - bars_padding);
        self.bars_padding = bars_padding;
        Ok(self)
    }

    pub fn with_min_interval(mut self, min_interval: f64) -> ChartResult<Self> {
        if !min_interval.is_finite() || min_interval < 0.0 {
            return Err(ChartError::InvalidScale(format!(
                "min interval must be finite and non-negative, got {min_interval}"
            )));
        }
        self.min_interval = min_interval;
        Ok(self)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }

    fn invert_number(&self, pixel: f64) -> Option<f64> {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        let value = self.domain_start + normalized * (self.domain_end - self.domain_start);
        value.is_finite().then_some(value)
    }
}

impl Scale for LinearScale {
    fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    fn scale(&self, value: &DomainValue) -> Option<f64> {
        let value = value.as_number().filter(|v| v.is_finite())?;
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Some(self.range_start + normalized * (self.range_end - self.range_start))
    }

    fn invert(&self, pixel: f64) -> Option<DomainValue> {
        self.invert_number(pixel).map(DomainValue::Number)
    }

    fn invert_with_step(&self, pixel: f64, data: &[DomainValue]) -> Option<DomainValue> {
        let inverted = self.invert_number(pixel)?;
        let number_at = |index: usize| data.get(index).and_then(DomainValue::as_number);
        let last_index = data.len().saturating_sub(1);
        let (Some(first), Some(last)) = (number_at(0), number_at(last_index)) else {
            return Some(DomainValue::Number(inverted));
        };

        let index = data.partition_point(|v| v.as_number().is_some_and(|v| v < inverted));
        let snapped = if index == data.len() {
            last
        } else if index > 0 && self.bandwidth > 0.0 {
            let (Some(previous), Some(next)) = (number_at(index - 1), number_at(index)) else {
                return None;
            };
            let min_interval = if self.min_interval > 0.0 {
                self.min_interval
            } else {
                smallest_step(data).unwrap_or(next - previous)
            };
            if inverted - previous < min_interval {
                previous
            } else {
                next
            }
        } else {
            // Neighbours of the insertion point, later one first so it wins ties.
            let candidates: SmallVec<[f64; 2]> = (index.saturating_sub(1)..=index.max(1))
                .rev()
                .filter_map(number_at)
                .collect();
            candidates
                .into_iter()
                .min_by_key(|v| OrderedFloat((v - inverted).abs()))
                .unwrap_or(first)
        };
        Some(DomainValue::Number(snapped))
    }

    fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    fn bars_padding(&self) -> f64 {
        self.bars_padding
    }

    fn domain(&self) -> &[DomainValue] {
        &self.domain
    }
}

/// Ordinal scale splitting its range into one equal step per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: IndexSet<DomainValue>,
    domain: Vec<DomainValue>,
    range_start: f64,
    range_end: f64,
    bars_padding: f64,
}

impl BandScale {
    /// Duplicate categories keep their first position.
    pub fn new<I, V>(categories: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<DomainValue>,
    {
        let categories: IndexSet<DomainValue> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(ChartError::InvalidScale(
                "band scale requires at least one category".to_owned(),
            ));
        }
        let domain = categories.iter().cloned().collect();
        Ok(Self {
            categories,
            domain,
            range_start: 0.0,
            range_end: 1.0,
            bars_padding: 0.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        validate_range(range_start, range_end)?;
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    pub fn with_bars_padding(mut self, bars_padding: f64) -> ChartResult<Self> {
        validate_bars_padding(bars_padding)?;
        self.bars_padding = bars_padding;
        Ok(self)
    }

    /// Pixel size of one category slot, always positive.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.range_end - self.range_start).abs() / self.categories.len() as f64
    }

    fn is_reversed(&self) -> bool {
        self.range_end < self.range_start
    }

    /// Slots run from the lower range end; a reversed range lists the
    /// categories from the last one.
    fn slot_of(&self, index: usize) -> usize {
        if self.is_reversed() {
            self.categories.len() - 1 - index
        } else {
            index
        }
    }
}

impl Scale for BandScale {
    fn scale_type(&self) -> ScaleType {
        ScaleType::Ordinal
    }

    fn scale(&self, value: &DomainValue) -> Option<f64> {
        let index = self.categories.get_index_of(value)?;
        let step = self.step();
        let lower = self.range_start.min(self.range_end);
        Some(lower + self.slot_of(index) as f64 * step + step * self.bars_padding / 2.0)
    }

    fn invert(&self, pixel: f64) -> Option<DomainValue> {
        let lower = self.range_start.min(self.range_end);
        let slot = ((pixel - lower) / self.step()).floor();
        if !slot.is_finite() {
            return None;
        }
        let last = self.categories.len() - 1;
        let slot = if slot <= 0.0 {
            0
        } else {
            (slot as usize).min(last)
        };
        self.categories.get_index(self.slot_of(slot)).cloned()
    }

    fn invert_with_step(&self, pixel: f64, _data: &[DomainValue]) -> Option<DomainValue> {
        self.invert(pixel)
    }

    fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.bars_padding)
    }

    fn bars_padding(&self) -> f64 {
        self.bars_padding
    }

    fn domain(&self) -> &[DomainValue] {
        &self.domain
    }
}
