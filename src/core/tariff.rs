use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{
    core::{HOURS_PER_DAY, appliance::Mode, error::ScheduleError},
    quantity::rate::KilowattHourRate,
};

/// One tariff period of the request document.
///
/// `from` and `to` are hours of the day; `from > to` wraps past midnight.
/// A span whose `from` equals its `to` covers the whole day in one
/// wraparound walk. Callers depend on this, do not "fix" it to mean
/// zero hours.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct RateSpan {
    pub from: usize,
    pub to: usize,
    pub value: KilowattHourRate,
}

/// Dense hourly price table, index = hour of day.
///
/// Derived once per run and immutable thereafter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HourlyRates([KilowattHourRate; HOURS_PER_DAY]);

impl HourlyRates {
    /// Expand tariff spans into the dense table.
    ///
    /// Later spans overwrite earlier ones for any hour they touch. After all
    /// spans are applied, every hour must carry a strictly positive rate.
    pub fn expand(spans: &[RateSpan]) -> Result<Self, ScheduleError> {
        if spans.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        let mut table = [None; HOURS_PER_DAY];
        for span in spans {
            if span.from >= HOURS_PER_DAY || span.to > HOURS_PER_DAY {
                return Err(ScheduleError::InvalidSpan { from: span.from, to: span.to });
            }
            let mut hour = span.from;
            loop {
                table[hour] = Some(span.value);
                hour += 1;
                if hour == HOURS_PER_DAY {
                    if span.to == HOURS_PER_DAY {
                        break;
                    }
                    hour = 0;
                }
                if hour == span.to {
                    break;
                }
            }
        }

        let mut rates = [KilowattHourRate::ZERO; HOURS_PER_DAY];
        for (hour, slot) in table.into_iter().enumerate() {
            match slot {
                Some(value) if value > KilowattHourRate::ZERO => rates[hour] = value,
                _ => return Err(ScheduleError::InvalidCoverage { hour }),
            }
        }
        Ok(Self(rates))
    }

    /// Price table for a restricted mode: ineligible hours become infinitely
    /// expensive, so the minimum-cost search never routes a window through
    /// them.
    #[must_use]
    pub fn restricted_to(&self, mode: Mode) -> Self {
        let mut rates = self.0;
        for (hour, rate) in rates.iter_mut().enumerate() {
            if !mode.admits(hour) {
                *rate = KilowattHourRate::INFINITY;
            }
        }
        Self(rates)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, KilowattHourRate)> {
        self.0.into_iter().enumerate()
    }
}

impl Index<usize> for HourlyRates {
    type Output = KilowattHourRate;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.0[hour]
    }
}
