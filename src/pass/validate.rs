//! Form field validation.

use crate::error::{PassError, Result};

use super::charset::CharClass;

pub const MIN_LENGTH: u64 = 4;
/// Upper bound on the generated length; the form shows the whole password.
pub const MAX_LENGTH: u64 = 4096;

/// Validated per-class counts. Lowercase fills whatever the other classes leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub length: usize,
    pub uppercase: usize,
    pub special: usize,
    pub digits: usize,
}

impl Composition {
    /// Parse the four numeric form fields.
    ///
    /// Fields are checked in form order for parse errors, then for negative
    /// values, then the length bounds, then the composition sum.
    pub fn parse(length: &str, uppercase: &str, special: &str, digits: &str) -> Result<Self> {
        let fields = [
            ("length", parse_field("length", length)?),
            ("uppercase", parse_field("uppercase", uppercase)?),
            ("special", parse_field("special", special)?),
            ("digits", parse_field("digits", digits)?),
        ];

        if let Some(&(field, value)) = fields.iter().find(|(_, v)| *v < 0) {
            return Err(PassError::NegativeValue { field, value });
        }

        let [length, uppercase, special, digits] = fields.map(|(_, v)| v as u64);

        if length < MIN_LENGTH {
            return Err(PassError::LengthTooShort {
                length,
                min: MIN_LENGTH,
            });
        }
        if length > MAX_LENGTH {
            return Err(PassError::LengthTooLong {
                length,
                max: MAX_LENGTH,
            });
        }

        let requested = uppercase as u128 + special as u128 + digits as u128;
        if requested > length as u128 {
            return Err(PassError::CompositionExceedsLength { requested, length });
        }

        // Every count is bounded by `length` now.
        let length = to_usize("length", length)?;
        Ok(Self {
            length,
            uppercase: uppercase as usize,
            special: special as usize,
            digits: digits as usize,
        })
    }

    pub fn lowercase(&self) -> usize {
        self.length - (self.uppercase + self.special + self.digits)
    }

    pub fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase(),
            CharClass::Digit => self.digits,
            CharClass::Special => self.special,
        }
    }

    /// Bits of entropy of the generation process: the per-class draws plus
    /// the number of distinct arrangements of the classes.
    pub fn entropy_bits(&self) -> f64 {
        let draws: f64 = CharClass::ALL
            .iter()
            .map(|&c| self.count(c) as f64 * (c.alphabet().len() as f64).log2())
            .sum();
        let arrangements = log2_factorial(self.length)
            - CharClass::ALL
                .iter()
                .map(|&c| log2_factorial(self.count(c)))
                .sum::<f64>();
        draws + arrangements
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| PassError::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

fn to_usize(field: &'static str, value: u64) -> Result<usize> {
    usize::try_from(value).map_err(|_| PassError::InvalidInput {
        field,
        value: value.to_string(),
    })
}

fn log2_factorial(n: usize) -> f64 {
    (2..=n).map(|k| (k as f64).log2()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_lowercase_remainder() {
        let c = Composition::parse("10", "2", "2", "2").unwrap();
        assert_eq!(c.length, 10);
        assert_eq!(c.lowercase(), 4);
        assert_eq!(c.count(CharClass::Special), 2);
    }

    #[test]
    fn accepts_surrounding_whitespace_and_zero_counts() {
        let c = Composition::parse(" 4 ", "0", "0\n", "\t0").unwrap();
        assert_eq!(c.lowercase(), 4);
    }

    #[test]
    fn composition_may_fill_the_whole_length() {
        let c = Composition::parse("6", "2", "2", "2").unwrap();
        assert_eq!(c.lowercase(), 0);
    }

    #[test]
    fn non_numeric_field_is_invalid_input() {
        let err = Composition::parse("abc", "1", "1", "1").unwrap_err();
        assert!(matches!(err, PassError::InvalidInput { field: "length", .. }));

        let err = Composition::parse("10", "1", "", "1").unwrap_err();
        assert!(matches!(err, PassError::InvalidInput { field: "special", .. }));

        let err = Composition::parse("10", "1.5", "1", "1").unwrap_err();
        assert!(matches!(err, PassError::InvalidInput { field: "uppercase", .. }));
    }

    #[test]
    fn negative_value_is_rejected() {
        let err = Composition::parse("10", "1", "1", "-1").unwrap_err();
        assert!(matches!(
            err,
            PassError::NegativeValue {
                field: "digits",
                value: -1
            }
        ));

        let err = Composition::parse("-8", "0", "0", "0").unwrap_err();
        assert!(matches!(err, PassError::NegativeValue { field: "length", .. }));
    }

    #[test]
    fn short_length_wins_over_any_composition() {
        for (u, s, d) in [("0", "0", "0"), ("1", "1", "1"), ("2", "2", "2"), ("9", "0", "0")] {
            let err = Composition::parse("3", u, s, d).unwrap_err();
            assert!(
                matches!(err, PassError::LengthTooShort { length: 3, min: 4 }),
                "({u}, {s}, {d}) gave {err:?}"
            );
        }
    }

    #[test]
    fn oversized_length_is_rejected_before_generation() {
        let err = Composition::parse("100000000000000", "0", "0", "0").unwrap_err();
        assert!(matches!(
            err,
            PassError::LengthTooLong {
                length: 100_000_000_000_000,
                max: MAX_LENGTH
            }
        ));

        let err = Composition::parse(&i64::MAX.to_string(), "1", "1", "1").unwrap_err();
        assert!(matches!(err, PassError::LengthTooLong { .. }));

        let c = Composition::parse(&MAX_LENGTH.to_string(), "0", "0", "0").unwrap();
        assert_eq!(c.lowercase(), MAX_LENGTH as usize);
    }

    #[test]
    fn composition_exceeding_length_is_rejected() {
        let err = Composition::parse("5", "2", "2", "2").unwrap_err();
        assert!(matches!(
            err,
            PassError::CompositionExceedsLength {
                requested: 6,
                length: 5
            }
        ));
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let max = i64::MAX.to_string();
        let err = Composition::parse("10", &max, &max, &max).unwrap_err();
        assert!(matches!(err, PassError::CompositionExceedsLength { .. }));
    }

    #[test]
    fn entropy_grows_with_richer_composition() {
        let lower_only = Composition::parse("12", "0", "0", "0").unwrap();
        let mixed = Composition::parse("12", "3", "3", "3").unwrap();
        let expected = 12.0 * 26f64.log2();
        assert!((lower_only.entropy_bits() - expected).abs() < 1e-9);
        assert!(mixed.entropy_bits() > lower_only.entropy_bits());
    }
}
