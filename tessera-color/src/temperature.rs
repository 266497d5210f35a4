//! Color temperature theory.
//!
//! Warm colors sit around orange and cool colors around blue. Temperature
//! gives a perceptual notion of "opposite" and "neighboring" hues that
//! works better than rotating the hue wheel by fixed angles.

use std::sync::OnceLock;

use crate::{Hct, cie, utils};

/// Lazily computed temperature data for one input color.
///
/// Every table is built on first use and kept for the life of the cache.
/// The cache is `Sync`, so one instance can serve several threads.
#[derive(Debug)]
pub struct TemperatureCache {
    input: Hct,
    hcts_by_hue: OnceLock<Vec<Hct>>,
    sorted: OnceLock<SortedByTemperature>,
    complement: OnceLock<Hct>,
}

#[derive(Debug)]
struct SortedByTemperature {
    hcts: Vec<Hct>,
    coldest_temp: f64,
    warmest_temp: f64,
}

impl TemperatureCache {
    /// Creates a cache for `input`. Nothing is computed yet.
    pub fn new(input: Hct) -> Self {
        Self {
            input,
            hcts_by_hue: OnceLock::new(),
            sorted: OnceLock::new(),
            complement: OnceLock::new(),
        }
    }

    /// The color this cache was built for.
    pub fn input(&self) -> Hct {
        self.input
    }

    /// Raw temperature of a color.
    ///
    /// Derived from L*a*b* polar coordinates: warmth peaks around a hue of
    /// 50 degrees and scales with chroma. Values run from about -0.5 for
    /// gray to roughly 3 for the most saturated oranges.
    pub fn raw_temperature(color: &Hct) -> f64 {
        let lab = cie::lab_from_argb(color.to_argb());
        let hue = utils::sanitize_degrees(lab[2].atan2(lab[1]).to_degrees());
        let chroma = lab[1].hypot(lab[2]);
        -0.5 + 0.02 * chroma.powf(1.07) * utils::sanitize_degrees(hue - 50.0).to_radians().cos()
    }

    /// The input's chroma and tone at every integral hue from 0 to 360
    /// inclusive.
    pub fn hcts_by_hue(&self) -> &[Hct] {
        self.hcts_by_hue.get_or_init(|| {
            (0..=360)
                .map(|hue| Hct::new(f64::from(hue), self.input.chroma(), self.input.tone()))
                .collect()
        })
    }

    /// [`hcts_by_hue`](Self::hcts_by_hue) plus the input itself, ordered
    /// from coldest to warmest.
    pub fn hcts_by_temp(&self) -> &[Hct] {
        &self.sorted().hcts
    }

    /// The coldest color with the input's chroma and tone.
    pub fn coldest(&self) -> Hct {
        self.sorted().hcts[0]
    }

    /// The warmest color with the input's chroma and tone.
    pub fn warmest(&self) -> Hct {
        let hcts = &self.sorted().hcts;
        hcts[hcts.len() - 1]
    }

    /// Temperature of `color` scaled so the coldest color with the input's
    /// chroma and tone is 0 and the warmest is 1.
    ///
    /// Returns 0.5 when every hue has the same temperature.
    pub fn relative_temperature(&self, color: &Hct) -> f64 {
        let sorted = self.sorted();
        let range = sorted.warmest_temp - sorted.coldest_temp;
        if range == 0.0 {
            return 0.5;
        }
        (Self::raw_temperature(color) - sorted.coldest_temp) / range
    }

    /// The color whose temperature is opposite to the input's.
    ///
    /// Hues are searched along the arc between the coldest and warmest
    /// colors that does not contain the input.
    pub fn complement(&self) -> Hct {
        *self.complement.get_or_init(|| self.compute_complement())
    }

    fn compute_complement(&self) -> Hct {
        let sorted = self.sorted();
        let coldest_hue = self.coldest().hue();
        let coldest_temp = sorted.coldest_temp;
        let warmest_hue = self.warmest().hue();
        let range = sorted.warmest_temp - coldest_temp;
        let by_hue = self.hcts_by_hue();

        let input_is_coldest_to_warmest =
            is_between(self.input.hue(), coldest_hue, warmest_hue);
        let (start_hue, end_hue) = if input_is_coldest_to_warmest {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let mut smallest_error = 1000.0;
        let mut answer = by_hue[self.input.hue().round() as usize];
        let complement_relative_temp = 1.0 - self.relative_temperature(&self.input);

        // Walk every hue in one-degree steps from start to end.
        for hue_addend in 0..=360 {
            let hue = utils::sanitize_degrees(start_hue + f64::from(hue_addend));
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }
            let possible_answer = by_hue[hue.round() as usize];
            let relative_temp = (Self::raw_temperature(&possible_answer) - coldest_temp) / range;
            let error = (complement_relative_temp - relative_temp).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = possible_answer;
            }
        }
        answer
    }

    /// Five colors evenly spaced by temperature around the input, split
    /// into twelve divisions.
    pub fn analogous_default(&self) -> Vec<Hct> {
        self.analogous(5, 12)
    }

    /// `count` colors with the input in the middle, taken from `divisions`
    /// slices of the hue wheel that are equal in temperature change.
    ///
    /// Colors before the input are counter-clockwise from it.
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let by_hue = self.hcts_by_hue();
        let start_hue = self.input.hue().round() as usize;
        let start_hct = by_hue[start_hue];
        let mut last_temp = self.relative_temperature(&start_hct);

        let mut all_colors = vec![start_hct];

        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hue = (start_hue + i) % 360;
            let temp = self.relative_temperature(&by_hue[hue]);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }

        let mut hue_addend = 1;
        let temp_step = absolute_total_temp_delta / divisions as f64;
        let mut total_temp_delta = 0.0;
        last_temp = self.relative_temperature(&start_hct);
        while all_colors.len() < divisions {
            let hue = (start_hue + hue_addend) % 360;
            let hct = by_hue[hue];
            let temp = self.relative_temperature(&hct);
            total_temp_delta += (temp - last_temp).abs();

            let mut desired_total_temp_delta = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired_total_temp_delta;
            let mut index_addend = 1;
            // A large jump in temperature can cover several divisions at once.
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired_total_temp_delta = (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired_total_temp_delta;
                index_addend += 1;
            }
            last_temp = temp;
            hue_addend += 1;

            if hue_addend > 360 {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let len = all_colors.len();
        let ccw_count = (count.saturating_sub(1)) / 2;
        let mut answers = Vec::with_capacity(count);
        for i in (1..=ccw_count).rev() {
            answers.push(all_colors[(len - i % len) % len]);
        }
        answers.push(self.input);
        for i in 1..count.saturating_sub(ccw_count) {
            answers.push(all_colors[i % len]);
        }
        answers
    }

    fn sorted(&self) -> &SortedByTemperature {
        self.sorted.get_or_init(|| {
            let mut scored: Vec<(Hct, f64)> = self
                .hcts_by_hue()
                .iter()
                .copied()
                .chain(std::iter::once(self.input))
                .map(|hct| (hct, Self::raw_temperature(&hct)))
                .collect();
            scored.sort_by(|a, b| a.1.total_cmp(&b.1));
            let coldest_temp = scored[0].1;
            let warmest_temp = scored[scored.len() - 1].1;
            SortedByTemperature {
                hcts: scored.into_iter().map(|(hct, _)| hct).collect(),
                coldest_temp,
                warmest_temp,
            }
        })
    }
}

/// Whether `angle` lies on the arc running clockwise from `a` to `b`.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}
