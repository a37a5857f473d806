// web_app/listing/commit.rs - Draft to committed range resolution
//
// One algorithm for every range dimension:
//   1. parse each side; unparseable text is "missing", not zero
//   2. a missing side commits as None (unbounded)
//   3. clamp each present side into the absolute range
//   4. if min > max, min is pulled up to max
//
// Nothing here fails. Bad input is normalized, never reported.

use super::draft::DraftPair;
use super::range::{CommittedRange, Dimension, Range};

/// Parses one side of a draft.
///
/// Whitespace is ignored, non-finite values count as missing, and integral
/// dimensions truncate toward zero. Negative zero is folded into zero.
pub fn parse_draft(text: &str, dimension: Dimension) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let value = if dimension.is_integral() { value.trunc() } else { value };
    Some(value + 0.0)
}

/// Resolves a draft pair into the range it commits to.
pub fn resolve(draft: &DraftPair, range: Range, dimension: Dimension) -> CommittedRange {
    let min = parse_draft(&draft[0], dimension).map(|v| range.clamp(v));
    let max = parse_draft(&draft[1], dimension).map(|v| range.clamp(v));

    let min = match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => Some(hi),
        _ => min,
    };

    CommittedRange { min, max }
}

/// Slider thumb positions for a draft. Missing sides sit on the absolute
/// bound; this is display only and never committed.
pub fn slider_values(draft: &DraftPair, range: Range, dimension: Dimension) -> (f64, f64) {
    let lo = parse_draft(&draft[0], dimension).map_or(range.min, |v| range.clamp(v));
    let hi = parse_draft(&draft[1], dimension).map_or(range.max, |v| range.clamp(v));
    (lo, hi)
}

/// Result of committing one dimension
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommitOutcome {
    pub committed: CommittedRange,
    /// The committed range differs from before
    pub changed: bool,
    /// The draft text was normalized to the committed values
    pub draft_rewritten: bool,
}

impl CommitOutcome {
    pub(crate) fn unchanged(committed: CommittedRange) -> Self {
        CommitOutcome {
            committed,
            changed: false,
            draft_rewritten: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(min: &str, max: &str) -> DraftPair {
        [min.to_string(), max.to_string()]
    }

    const PRICE: Range = Range { min: 100000.0, max: 900000.0 };

    #[test]
    fn test_parse_draft_rejects_garbage() {
        assert_eq!(parse_draft("", Dimension::Price), None);
        assert_eq!(parse_draft("abc", Dimension::Price), None);
        assert_eq!(parse_draft("NaN", Dimension::Price), None);
        assert_eq!(parse_draft("inf", Dimension::Area), None);
        assert_eq!(parse_draft(" 42.5 ", Dimension::Area), Some(42.5));
    }

    #[test]
    fn test_parse_draft_truncates_integral_dimensions() {
        assert_eq!(parse_draft("7.9", Dimension::Floor), Some(7.0));
        assert_eq!(parse_draft("-1.5", Dimension::Parking), Some(-1.0));
        assert_eq!(parse_draft("7.9", Dimension::Price), Some(7.9));
    }

    #[test]
    fn test_negative_fraction_truncates_to_plain_zero() {
        let resolved = resolve(&pair("-0.5", "20"), Range::new(0.0, 30.0), Dimension::Floor);
        let min = resolved.min.unwrap();

        assert_eq!(min, 0.0);
        assert!(min.is_sign_positive());
        assert_eq!(resolved.to_draft(), pair("0", "20"));
        assert!(parse_draft("-0", Dimension::Price).unwrap().is_sign_positive());
    }

    #[test]
    fn test_zero_is_not_missing() {
        let resolved = resolve(&pair("0", ""), Range::new(0.0, 30.0), Dimension::Floor);
        assert_eq!(resolved, CommittedRange::new(Some(0.0), None));
    }

    #[test]
    fn test_min_below_range_clamps_up() {
        let resolved = resolve(&pair("50000", "900000"), PRICE, Dimension::Price);
        assert_eq!(resolved, CommittedRange::new(Some(100000.0), Some(900000.0)));
    }

    #[test]
    fn test_min_above_range_collapses_onto_max() {
        let resolved = resolve(&pair("950000", "900000"), PRICE, Dimension::Price);
        assert_eq!(resolved, CommittedRange::new(Some(900000.0), Some(900000.0)));
    }

    #[test]
    fn test_inversion_pulls_min_up() {
        let resolved = resolve(&pair("500000", "300000"), PRICE, Dimension::Price);
        assert_eq!(resolved, CommittedRange::new(Some(300000.0), Some(300000.0)));
    }

    #[test]
    fn test_missing_side_is_unbounded() {
        let resolved = resolve(&pair("abc", "400000"), PRICE, Dimension::Price);
        assert_eq!(resolved, CommittedRange::new(None, Some(400000.0)));

        let resolved = resolve(&pair("", ""), PRICE, Dimension::Price);
        assert_eq!(resolved, CommittedRange::UNBOUNDED);
    }

    #[test]
    fn test_slider_values_fall_back_to_bounds() {
        assert_eq!(
            slider_values(&pair("", "abc"), PRICE, Dimension::Price),
            (100000.0, 900000.0)
        );
        assert_eq!(
            slider_values(&pair("200000", "2000000"), PRICE, Dimension::Price),
            (200000.0, 900000.0)
        );
    }

    #[test]
    fn test_resolved_values_stay_in_range() {
        let range = Range::new(0.0, 30.0);
        let inputs = [
            ("-5", "50"),
            ("40", "-2"),
            ("12", "3"),
            ("3.7", "3.2"),
            ("x", "31"),
            ("29", ""),
        ];

        for (lo, hi) in inputs {
            let resolved = resolve(&pair(lo, hi), range, Dimension::Floor);
            if let Some(min) = resolved.min {
                assert!(range.contains(min), "min {min} out of range for {lo:?}/{hi:?}");
            }
            if let Some(max) = resolved.max {
                assert!(range.contains(max), "max {max} out of range for {lo:?}/{hi:?}");
            }
            if let (Some(min), Some(max)) = (resolved.min, resolved.max) {
                assert!(min <= max, "inverted {min} > {max} for {lo:?}/{hi:?}");
            }
        }
    }
}
