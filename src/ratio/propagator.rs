//! Ratio Propagator
//!
//! Keeps fresh weight, dried weight and the fresh:dry ratio consistent.
//! Each edit drives one field and recomputes one other from the stored third:
//!
//! | edited      | recomputed | kept        |
//! |-------------|------------|-------------|
//! | fresh       | dried      | ratio       |
//! | ratio text  | dried      | fresh       |
//! | dried       | ratio      | fresh       |
//!
//! Undefined ratio: dried > 0 with fresh = 0 has no finite ratio. The next
//! positive fresh edit resolves it from the stored dried weight, and a
//! dried edit to 0 falls back to the last ratio text.

use super::parse::parse_ratio_input;
use super::state::{Ratio, RatioState};
use crate::utils::{format_ratio, non_negative, parse_non_negative};

/// Single-field edit on a ratio row
#[derive(Debug, Clone, PartialEq)]
pub enum RatioCommand {
    SetFreshWeight(f64),
    SetRatioInput(String),
    SetDriedWeight(f64),
}

impl RatioCommand {
    /// Fresh-weight edit from the raw field text
    pub fn fresh_from_text(raw: &str) -> Self {
        RatioCommand::SetFreshWeight(parse_non_negative(raw))
    }

    /// Dried-weight edit from the raw field text
    pub fn dried_from_text(raw: &str) -> Self {
        RatioCommand::SetDriedWeight(parse_non_negative(raw))
    }
}

impl RatioState {
    pub fn apply(self, command: RatioCommand) -> RatioState {
        match command {
            RatioCommand::SetFreshWeight(fresh) => self.on_fresh_weight_change(fresh),
            RatioCommand::SetRatioInput(text) => self.on_ratio_input_change(&text),
            RatioCommand::SetDriedWeight(dried) => self.on_dried_weight_change(dried),
        }
    }

    /// Fresh weight edited: dried = fresh / ratio, ratio unchanged
    pub fn on_fresh_weight_change(self, new_fresh: f64) -> RatioState {
        let fresh = non_negative(new_fresh);
        if fresh == self.fresh_weight {
            return self;
        }

        match self.ratio {
            Ratio::Defined(r) => RatioState {
                fresh_weight: fresh,
                dried_weight: finite_quotient(fresh, r).unwrap_or(0.0),
                ..self
            },
            Ratio::Undefined if fresh > 0.0 && self.dried_weight > 0.0 => {
                match finite_quotient(fresh, self.dried_weight) {
                    Some(r) => RatioState {
                        fresh_weight: fresh,
                        ratio: Ratio::Defined(r),
                        ratio_text: format_ratio(r),
                        ..self
                    },
                    None => RatioState { fresh_weight: fresh, ..self },
                }
            }
            Ratio::Undefined => RatioState { fresh_weight: fresh, ..self },
        }
    }

    /// Ratio text edited: ratio parsed (default 1), dried = fresh / ratio
    pub fn on_ratio_input_change(self, raw_input: &str) -> RatioState {
        let r = parse_ratio_input(raw_input);
        RatioState {
            dried_weight: finite_quotient(self.fresh_weight, r).unwrap_or(0.0),
            ratio: Ratio::Defined(r),
            ratio_text: raw_input.trim().to_string(),
            ..self
        }
    }

    /// Dried weight edited: ratio = fresh / dried when both are positive
    ///
    /// A quotient too large to represent leaves the ratio undefined.
    /// Dried set to 0 keeps the previous ratio; if there was none, the
    /// ratio is re-read from the stored ratio text. That text is the
    /// displayed form (rounded to 2 decimals after a dried edit), so the
    /// re-read ratio can differ slightly from the one last computed.
    pub fn on_dried_weight_change(self, new_dried: f64) -> RatioState {
        let dried = non_negative(new_dried);

        if dried > 0.0 && self.fresh_weight > 0.0 {
            return match finite_quotient(self.fresh_weight, dried) {
                Some(r) => RatioState {
                    dried_weight: dried,
                    ratio: Ratio::Defined(r),
                    ratio_text: format_ratio(r),
                    ..self
                },
                None => {
                    tracing::debug!("Ratio {} / {} out of range, ratio undefined", self.fresh_weight, dried);
                    RatioState {
                        dried_weight: dried,
                        ratio: Ratio::Undefined,
                        ..self
                    }
                }
            };
        }

        if dried > 0.0 {
            tracing::debug!("Dried weight {} with no fresh weight, ratio undefined", dried);
            return RatioState {
                dried_weight: dried,
                ratio: Ratio::Undefined,
                ..self
            };
        }

        let ratio = match self.ratio {
            Ratio::Defined(r) => Ratio::Defined(r),
            Ratio::Undefined => Ratio::Defined(self.ratio_from_text()),
        };
        RatioState {
            dried_weight: 0.0,
            ratio,
            ..self
        }
    }
}

/// `num / den` when `den > 0` and the result is finite
fn finite_quotient(num: f64, den: f64) -> Option<f64> {
    if den > 0.0 {
        Some(num / den).filter(|q| q.is_finite())
    } else {
        None
    }
}

/// Free-function form of [`RatioState::on_fresh_weight_change`]
pub fn on_fresh_weight_change(state: RatioState, new_fresh: f64) -> RatioState {
    state.on_fresh_weight_change(new_fresh)
}

/// Free-function form of [`RatioState::on_ratio_input_change`]
pub fn on_ratio_input_change(state: RatioState, raw_input: &str) -> RatioState {
    state.on_ratio_input_change(raw_input)
}

/// Free-function form of [`RatioState::on_dried_weight_change`]
pub fn on_dried_weight_change(state: RatioState, new_dried: f64) -> RatioState {
    state.on_dried_weight_change(new_dried)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_then_fresh() {
        let state = RatioState::new().on_ratio_input_change("7:1");
        assert_eq!(state.ratio(), Ratio::Defined(7.0));
        assert_eq!(state.ratio_text(), "7:1");

        let state = state.on_fresh_weight_change(35.0);
        assert_relative_eq!(state.dried_weight(), 5.0);
        assert_eq!(state.ratio(), Ratio::Defined(7.0));
    }

    #[test]
    fn test_fresh_ratio_dried_scenario() {
        let state = RatioState::new()
            .on_fresh_weight_change(100.0)
            .on_ratio_input_change("5");
        assert_relative_eq!(state.dried_weight(), 20.0);

        let state = state.on_dried_weight_change(25.0);
        assert_eq!(state.ratio(), Ratio::Defined(4.0));
        assert_eq!(state.ratio_text(), "4:1");
        assert_eq!(state.fresh_weight(), 100.0);
    }

    #[test]
    fn test_fresh_edit_with_same_value_is_noop() {
        let state = RatioState::with_fresh_and_ratio(90.0, "7")
            .on_dried_weight_change(13.0);
        let again = state.clone().on_fresh_weight_change(state.fresh_weight());
        assert_eq!(again, state);
    }

    #[test]
    fn test_dried_zero_keeps_ratio() {
        let state = RatioState::with_fresh_and_ratio(60.0, "6:1")
            .on_dried_weight_change(0.0);
        assert_eq!(state.dried_weight(), 0.0);
        assert_eq!(state.ratio(), Ratio::Defined(6.0));
        assert!(state.ratio().value().is_some_and(|r| !r.is_nan()));
    }

    #[test]
    fn test_dried_without_fresh_is_undefined() {
        let state = RatioState::new().on_dried_weight_change(10.0);
        assert_eq!(state.ratio(), Ratio::Undefined);
        assert_eq!(state.ratio().display(), "N/A");
        assert_eq!(state.dried_weight(), 10.0);
    }

    #[test]
    fn test_undefined_resolved_by_fresh_edit() {
        let state = RatioState::new()
            .on_dried_weight_change(10.0)
            .on_fresh_weight_change(80.0);
        assert_eq!(state.ratio(), Ratio::Defined(8.0));
        assert_eq!(state.dried_weight(), 10.0);
        assert_eq!(state.ratio_text(), "8:1");
    }

    #[test]
    fn test_undefined_then_dried_zero_uses_text() {
        let state = RatioState::new()
            .on_ratio_input_change("3:1")
            .on_dried_weight_change(10.0);
        assert_eq!(state.ratio(), Ratio::Undefined);

        let state = state.on_dried_weight_change(0.0);
        assert_eq!(state.ratio(), Ratio::Defined(3.0));
    }

    #[test]
    fn test_dried_zero_rereads_rounded_text() {
        let state = RatioState::new()
            .on_fresh_weight_change(20.0)
            .on_dried_weight_change(3.0);
        assert_eq!(state.ratio_text(), "6.67:1");

        let state = state
            .on_fresh_weight_change(0.0)
            .on_dried_weight_change(5.0);
        assert_eq!(state.ratio(), Ratio::Undefined);

        let state = state.on_dried_weight_change(0.0);
        assert_eq!(state.ratio(), Ratio::Defined(6.67));
    }

    #[test]
    fn test_zero_ratio_guards_division() {
        let state = RatioState::with_fresh_and_ratio(50.0, "0:1");
        assert_eq!(state.ratio(), Ratio::Defined(0.0));
        assert_eq!(state.dried_weight(), 0.0);

        let state = state.on_fresh_weight_change(70.0);
        assert_eq!(state.dried_weight(), 0.0);
    }

    #[test]
    fn test_invalid_ratio_text_defaults_to_one() {
        let state = RatioState::with_fresh_and_ratio(40.0, "abc");
        assert_eq!(state.ratio(), Ratio::Defined(1.0));
        assert_eq!(state.dried_weight(), 40.0);
    }

    #[test]
    fn test_negative_and_nan_weights_normalized() {
        let state = RatioState::with_fresh_and_ratio(-5.0, "5");
        assert_eq!(state.fresh_weight(), 0.0);

        let state = state.on_dried_weight_change(f64::NAN);
        assert_eq!(state.dried_weight(), 0.0);
        assert!(state.ratio().is_defined());
    }

    #[test]
    fn test_command_dispatch() {
        let commands = vec![
            RatioCommand::SetFreshWeight(100.0),
            RatioCommand::SetRatioInput("5".to_string()),
            RatioCommand::SetDriedWeight(25.0),
        ];
        let state = commands.into_iter().fold(RatioState::new(), RatioState::apply);
        assert_eq!(state.ratio(), Ratio::Defined(4.0));
        assert_eq!(state.dried_weight(), 25.0);
    }

    #[test]
    fn test_weights_and_ratio_stay_finite() {
        let state = RatioState::with_fresh_and_ratio(100.0, "1e300:1e-300");
        assert_eq!(state.ratio(), Ratio::Defined(1.0));
        assert_eq!(state.dried_weight(), 100.0);

        let state = RatioState::with_fresh_and_ratio(100.0, "1e-310");
        assert_eq!(state.ratio(), Ratio::Defined(1.0));
        assert!(state.dried_weight().is_finite());

        // normal ratio, but fresh / ratio overflows
        let state = RatioState::with_fresh_and_ratio(1e300, "1e-300");
        assert_eq!(state.ratio(), Ratio::Defined(1e-300));
        assert_eq!(state.dried_weight(), 0.0);

        let state = RatioState::with_fresh_and_ratio(1000.0, "5")
            .on_dried_weight_change(1e-310);
        assert_eq!(state.ratio(), Ratio::Undefined);
        assert_eq!(state.ratio_text(), "5");
        assert_eq!(state.dried_weight(), 1e-310);

        let state = RatioState::new()
            .on_dried_weight_change(1e-310)
            .on_fresh_weight_change(1000.0);
        assert_eq!(state.ratio(), Ratio::Undefined);
        assert_eq!(state.fresh_weight(), 1000.0);
    }

    #[test]
    fn test_commands_from_field_text() {
        let state = RatioState::new()
            .apply(RatioCommand::fresh_from_text("120"))
            .apply(RatioCommand::SetRatioInput("6:1".to_string()))
            .apply(RatioCommand::dried_from_text("abc"));
        assert_eq!(state.fresh_weight(), 120.0);
        assert_eq!(state.dried_weight(), 0.0);
        assert_eq!(state.ratio(), Ratio::Defined(6.0));
    }

    #[test]
    fn test_free_functions_match_methods() {
        let state = on_fresh_weight_change(RatioState::new(), 21.0);
        let state = on_ratio_input_change(state, "7:1");
        assert_relative_eq!(state.dried_weight(), 3.0);
        let state = on_dried_weight_change(state, 7.0);
        assert_eq!(state.ratio(), Ratio::Defined(3.0));
    }
}
