//! Raw form input: set values typed as strings and exercise fields.
//!
//! `"-"`, blank, or missing values mean "absent". Both numbers are read from
//! the leading numeric prefix of the input; input with no such prefix is
//! treated as absent rather than rejected.

use super::document::{clamp_sets, Exercise, SetResult, TargetReps};
use super::ExerciseId;

/// Sets given to a new exercise when the caller supplies none.
pub const DEFAULT_SETS: u32 = 3;

fn is_absent(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw == "-"
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run.
fn decimal_prefix_len(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa |= frac_end > end + 1;
        end = frac_end;
    }
    if !mantissa {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Parse a weight from the leading decimal of the input, so `"12kg"` is 12.
/// Non-finite values are absent.
pub fn parse_weight(raw: Option<&str>) -> Option<f64> {
    let raw = raw.filter(|r| !is_absent(r))?.trim();
    let len = decimal_prefix_len(raw);
    if len == 0 {
        return None;
    }
    raw[..len].parse::<f64>().ok().filter(|w| w.is_finite())
}

/// Parse a rep count from the leading integer of the input, so `"8.5"` is 8.
pub fn parse_reps(raw: Option<&str>) -> Option<i64> {
    let raw = raw.filter(|r| !is_absent(r))?.trim();
    let digits_end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    raw[..digits_end].parse::<i64>().ok()
}

/// A set as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSet {
    pub weight: Option<String>,
    pub reps: Option<String>,
}

impl RawSet {
    pub fn new(weight: impl Into<String>, reps: impl Into<String>) -> Self {
        Self {
            weight: Some(weight.into()),
            reps: Some(reps.into()),
        }
    }

    /// The skip marker for both fields.
    pub fn skipped() -> Self {
        Self::new("-", "-")
    }

    pub fn parse(&self) -> SetResult {
        SetResult::new(
            parse_weight(self.weight.as_deref()),
            parse_reps(self.reps.as_deref()),
        )
    }
}

/// Exercise fields from an add or edit form. Unset fields fall back to
/// defaults (add) or the current values (edit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub notes: Option<String>,
}

impl ExerciseSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn reps(mut self, min: u32, max: u32) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn trimmed_notes(&self) -> String {
        self.notes.as_deref().unwrap_or("").trim().to_string()
    }

    /// Build a new exercise.
    pub fn build(&self, id: ExerciseId) -> Exercise {
        let min = self.min.unwrap_or(1);
        let max = self.max.unwrap_or(min);
        Exercise {
            id,
            name: self.name.trim().to_string(),
            sets: clamp_sets(self.sets.unwrap_or(DEFAULT_SETS) as i64),
            target_reps: TargetReps::new(min, max),
            notes: self.trimmed_notes(),
        }
    }

    /// Overwrite an existing exercise's fields.
    pub fn apply(&self, exercise: &mut Exercise) {
        let min = self.min.unwrap_or(exercise.target_reps.min);
        let max = self
            .max
            .or(self.min)
            .unwrap_or(exercise.target_reps.max);
        exercise.name = self.name.trim().to_string();
        exercise.sets = clamp_sets(self.sets.unwrap_or(exercise.sets) as i64);
        exercise.target_reps = TargetReps::new(min, max);
        exercise.notes = self.trimmed_notes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_markers() {
        assert_eq!(parse_weight(None), None);
        assert_eq!(parse_weight(Some("")), None);
        assert_eq!(parse_weight(Some("-")), None);
        assert_eq!(parse_reps(Some("  ")), None);
        assert_eq!(parse_reps(Some("-")), None);
    }

    #[test]
    fn weight_parses_decimals() {
        assert_eq!(parse_weight(Some("135")), Some(135.0));
        assert_eq!(parse_weight(Some("62.5")), Some(62.5));
        assert_eq!(parse_weight(Some(" 20 ")), Some(20.0));
    }

    #[test]
    fn weight_takes_leading_decimal() {
        assert_eq!(parse_weight(Some("12kg")), Some(12.0));
        assert_eq!(parse_weight(Some("62.5 lb")), Some(62.5));
        assert_eq!(parse_weight(Some(".5")), Some(0.5));
        assert_eq!(parse_weight(Some("-2.5x")), Some(-2.5));
        assert_eq!(parse_weight(Some("1e2")), Some(100.0));
        assert_eq!(parse_weight(Some("3e")), Some(3.0));
        assert_eq!(parse_weight(Some("kg12")), None);
        assert_eq!(parse_weight(Some("+.")), None);
    }

    #[test]
    fn invalid_numbers_become_absent() {
        assert_eq!(parse_weight(Some("heavy")), None);
        assert_eq!(parse_weight(Some("inf")), None);
        assert_eq!(parse_reps(Some("five")), None);
    }

    #[test]
    fn reps_take_leading_integer() {
        assert_eq!(parse_reps(Some("8")), Some(8));
        assert_eq!(parse_reps(Some("8.5")), Some(8));
        assert_eq!(parse_reps(Some("10x")), Some(10));
        assert_eq!(parse_reps(Some("-3")), Some(-3));
    }

    #[test]
    fn raw_set_skip_parses_to_absent() {
        assert!(RawSet::skipped().parse().is_skipped());
        let set = RawSet::new("135", "5").parse();
        assert_eq!(set, SetResult::new(Some(135.0), Some(5)));
    }

    #[test]
    fn build_clamps_and_coerces() {
        let ex = ExerciseSpec::new("  Squat ").sets(0).reps(8, 5).build("e1".into());
        assert_eq!(ex.name, "Squat");
        assert_eq!(ex.sets, 1);
        assert_eq!(ex.target_reps, TargetReps { min: 8, max: 8 });

        let ex = ExerciseSpec::new("Curl").sets(99).build("e2".into());
        assert_eq!(ex.sets, 20);
    }

    #[test]
    fn build_defaults() {
        let ex = ExerciseSpec::new("Row").build("e1".into());
        assert_eq!(ex.sets, DEFAULT_SETS);
        assert_eq!(ex.target_reps, TargetReps { min: 1, max: 1 });
        assert_eq!(ex.notes, "");

        let ex = ExerciseSpec {
            name: "Row".into(),
            min: Some(6),
            ..Default::default()
        }
        .build("e2".into());
        assert_eq!(ex.target_reps, TargetReps { min: 6, max: 6 });
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let mut ex = ExerciseSpec::new("Bench").sets(4).reps(5, 8).notes("pause").build("e1".into());
        ExerciseSpec::new("Bench Press").apply(&mut ex);
        assert_eq!(ex.name, "Bench Press");
        assert_eq!(ex.sets, 4);
        assert_eq!(ex.target_reps, TargetReps { min: 5, max: 8 });
        assert_eq!(ex.notes, "");
    }

    #[test]
    fn apply_max_follows_new_min() {
        let mut ex = ExerciseSpec::new("Bench").reps(5, 8).build("e1".into());
        ExerciseSpec {
            name: "Bench".into(),
            min: Some(10),
            ..Default::default()
        }
        .apply(&mut ex);
        assert_eq!(ex.target_reps, TargetReps { min: 10, max: 10 });
    }
}
