use crate::config::Rules;

/// Free meals earned by walking `steps`.
#[must_use]
pub fn bonus_meals(steps: u64, rules: &Rules) -> u64 {
    steps
        .checked_div(rules.steps.steps_per_bonus_meal)
        .unwrap_or(0)
}
