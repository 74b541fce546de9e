use serde::{Deserialize, Serialize};

/// Bounds of the area control, in whole units of area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Default for AreaRange {
    fn default() -> Self {
        Self {
            min: 100,
            max: 3000,
            step: 50,
            default: 1000,
        }
    }
}

impl AreaRange {
    /// Clamps `area` into `[min, max]`. An inverted range yields `max`.
    pub fn clamp(
        &self,
        area: u32,
    ) -> u32 {
        area.max(self.min).min(self.max)
    }

    /// Snaps `area` to the nearest step counted from `min`, then clamps.
    ///
    /// Halfway values snap upward, like a slider thumb.
    pub fn snap(
        &self,
        area: u32,
    ) -> u32 {
        if self.step == 0 || self.min > self.max {
            return self.clamp(area);
        }
        let clamped = self.clamp(area);
        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        let snapped = self.min.saturating_add(steps.saturating_mul(self.step));

        // the last step may overshoot when the span is not a multiple of the step
        if snapped > self.max {
            self.max - (self.max - self.min) % self.step
        } else {
            snapped
        }
    }

    pub fn contains(
        &self,
        area: u32,
    ) -> bool {
        (self.min..=self.max).contains(&area)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamp_raises_values_below_min() {
        assert_eq!(AreaRange::default().clamp(0), 100);
    }

    #[test]
    fn clamp_lowers_values_above_max() {
        assert_eq!(AreaRange::default().clamp(10_000), 3000);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        let range = AreaRange::default();

        assert_eq!(range.snap(1010), 1000);
        assert_eq!(range.snap(1024), 1000);
        assert_eq!(range.snap(1025), 1050);
        assert_eq!(range.snap(1049), 1050);
    }

    #[test]
    fn snap_keeps_bounds() {
        let range = AreaRange::default();

        assert_eq!(range.snap(50), 100);
        assert_eq!(range.snap(4000), 3000);
    }

    #[test]
    fn snap_never_exceeds_max_on_uneven_span() {
        let range = AreaRange {
            min: 100,
            max: 320,
            step: 100,
            default: 200,
        };

        assert_eq!(range.snap(310), 300);
    }

    #[test]
    fn snap_with_zero_step_only_clamps() {
        let range = AreaRange {
            step: 0,
            ..AreaRange::default()
        };

        assert_eq!(range.snap(1234), 1234);
    }

    #[test]
    fn inverted_range_clamps_to_max_without_panicking() {
        let range = AreaRange {
            min: 3000,
            max: 100,
            step: 50,
            default: 1000,
        };

        assert_eq!(range.clamp(1000), 100);
        assert_eq!(range.snap(1000), 100);
    }
}
