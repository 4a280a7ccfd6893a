//! Step tables mapping a measured value to a fraction of a criterion budget.
//!
//! Unlike a continuous curve, a step table yields the fraction of the first
//! step whose bound the value satisfies. Tables are declared best step first.

/// One step: values satisfying `bound` earn `fraction` of the budget.
pub(super) struct Step {
    pub bound: f64,
    pub fraction: f64,
}

/// Rate-based table shared by the declination and correspondence halves of
/// keyword usage: ≥80% full, ≥60% 83%, ≥40% 67%, ≥20% half, anything else a third.
pub(super) const USAGE_STEPS: &[Step] = &[
    Step {
        bound: 0.8,
        fraction: 1.0,
    },
    Step {
        bound: 0.6,
        fraction: 0.83,
    },
    Step {
        bound: 0.4,
        fraction: 0.67,
    },
    Step {
        bound: 0.2,
        fraction: 0.5,
    },
    Step {
        bound: 0.0,
        fraction: 0.33,
    },
];

/// Rate-based table for keyword placement: 1, .8, .6, .4, .2.
pub(super) const POSITION_STEPS: &[Step] = &[
    Step {
        bound: 0.8,
        fraction: 1.0,
    },
    Step {
        bound: 0.6,
        fraction: 0.8,
    },
    Step {
        bound: 0.4,
        fraction: 0.6,
    },
    Step {
        bound: 0.2,
        fraction: 0.4,
    },
    Step {
        bound: 0.0,
        fraction: 0.2,
    },
];

/// Fraction of the first step with `value >= bound`. Non-positive values
/// earn nothing, whatever the table says.
pub(super) fn at_least(value: f64, table: &[Step]) -> f64 {
    debug_assert!(
        table.windows(2).all(|w| w[0].bound >= w[1].bound),
        "at_least steps must be sorted by bound, descending"
    );
    if value <= 0.0 {
        return 0.0;
    }
    table
        .iter()
        .find(|s| value >= s.bound)
        .map_or(0.0, |s| s.fraction)
}

/// Fraction of the first step with `value <= bound`; values above every
/// bound earn nothing.
pub(super) fn at_most(value: f64, table: &[Step]) -> f64 {
    debug_assert!(
        table.windows(2).all(|w| w[0].bound <= w[1].bound),
        "at_most steps must be sorted by bound, ascending"
    );
    table
        .iter()
        .find(|s| value <= s.bound)
        .map_or(0.0, |s| s.fraction)
}

#[cfg(test)]
#[path = "steps_test.rs"]
mod tests;
