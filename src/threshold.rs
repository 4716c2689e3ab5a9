//! Nagios style threshold ranges
//!
//! A threshold is written `[@]start:end`. Without the `@` a value violates
//! the threshold when it lies *outside* of `start..=end`, with it the value
//! violates when it lies *inside*. Both ends are inclusive.
//!
//! | spec      | violates when             |
//! |-----------|---------------------------|
//! | `10`      | `v < 0` or `v > 10`       |
//! | `10:`     | `v < 10`                  |
//! | `~:10`    | `v > 10`                  |
//! | `:10`     | `v > 10`                  |
//! | `10:20`   | `v < 10` or `v > 20`      |
//! | `@10:20`  | `10 <= v <= 20`           |

use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("threshold is empty")]
    Empty,
    #[error("could not parse threshold '{spec}': invalid number '{number}'")]
    InvalidNumber { spec: String, number: String },
    #[error("could not parse threshold '{spec}': start is greater than end")]
    StartAfterEnd { spec: String },
}

/// A parsed `[@]start:end` range
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    /// Alert if the value is inside of the range instead of outside
    inside: bool,
    lower: f64,
    upper: f64,
    /// The spec this was parsed from, used when rendering perfdata
    raw: String,
}

impl Threshold {
    /// Parse a threshold spec
    pub fn parse(spec: &str) -> Result<Threshold, ParseError> {
        let raw = spec.trim();
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }
        let (inside, body) = match raw.strip_prefix('@') {
            Some(body) => (true, body),
            None => (false, raw),
        };

        let (lower, upper) = match body.find(':') {
            Some(idx) => {
                let (start, end) = (&body[..idx], &body[idx + 1..]);
                let lower = match start {
                    "" | "~" => f64::NEG_INFINITY,
                    n => parse_number(raw, n)?,
                };
                let upper = match end {
                    "" => f64::INFINITY,
                    n => parse_number(raw, n)?,
                };
                (lower, upper)
            }
            None => (0.0, parse_number(raw, body)?),
        };

        if lower > upper {
            return Err(ParseError::StartAfterEnd {
                spec: raw.to_owned(),
            });
        }

        Ok(Threshold {
            inside,
            lower,
            upper,
            raw: raw.to_owned(),
        })
    }

    /// Check if `value` should alert
    pub fn violates(&self, value: f64) -> bool {
        let in_range = self.lower <= value && value <= self.upper;
        if self.inside {
            in_range
        } else {
            value < self.lower || value > self.upper
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn is_inverted(&self) -> bool {
        self.inside
    }
}

fn parse_number(spec: &str, number: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        spec: spec.to_owned(),
        number: number.to_owned(),
    };
    // f64::from_str is happy with "inf" and "NaN", we are not
    if !number
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e' || c == 'E')
    {
        return Err(invalid());
    }
    number.parse::<f64>().map_err(|_| invalid())
}

impl FromStr for Threshold {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Threshold, ParseError> {
        Threshold::parse(s)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn t(spec: &str) -> Threshold {
        Threshold::parse(spec).unwrap()
    }

    #[test]
    fn bare_number_is_zero_to_number() {
        let thresh = t("10");
        assert_eq!((thresh.lower(), thresh.upper()), (0.0, 10.0));
        assert!(!thresh.violates(0.0));
        assert!(!thresh.violates(10.0));
        assert!(thresh.violates(10.1));
        assert!(thresh.violates(-1.0));
    }

    #[test]
    fn open_ended_ranges() {
        let above = t("10:");
        assert!(above.violates(9.9));
        assert!(!above.violates(1e12));

        let below = t("~:10");
        assert!(!below.violates(-1e12));
        assert!(below.violates(11.0));

        assert_eq!(t(":10"), Threshold { raw: ":10".into(), ..below });
    }

    #[test]
    fn inverted_range() {
        let thresh = t("@10:20");
        assert!(thresh.is_inverted());
        assert!(thresh.violates(10.0));
        assert!(thresh.violates(15.0));
        assert!(thresh.violates(20.0));
        assert!(!thresh.violates(9.0));
        assert!(!thresh.violates(21.0));
    }

    #[test]
    fn negative_and_fractional_bounds() {
        let thresh = t("-5.5:0.25");
        assert!(!thresh.violates(-5.5));
        assert!(thresh.violates(-5.6));
        assert!(thresh.violates(0.3));
    }

    #[test]
    fn renders_as_written() {
        assert_eq!(t("70").to_string(), "70");
        assert_eq!(t(" @1:2 ").to_string(), "@1:2");
        assert_eq!(t("~:3").to_string(), "~:3");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Threshold::parse(""), Err(ParseError::Empty));
        assert_eq!(Threshold::parse("  "), Err(ParseError::Empty));
        assert_eq!(
            Threshold::parse("20:10"),
            Err(ParseError::StartAfterEnd {
                spec: "20:10".into()
            })
        );
        assert_eq!(
            Threshold::parse("foo"),
            Err(ParseError::InvalidNumber {
                spec: "foo".into(),
                number: "foo".into()
            })
        );
        assert!(Threshold::parse("1:bar").is_err());
        assert!(Threshold::parse("inf").is_err());
        assert!(Threshold::parse("1:2:3").is_err());
        assert!(Threshold::parse("@").is_err());
    }

    proptest! {
        #[test]
        fn outside_range_violates(a in -1e6f64..1e6, width in 0f64..1e6, v in -3e6f64..3e6) {
            let b = a + width;
            let thresh = t(&format!("{}:{}", a, b));
            let inverted = t(&format!("@{}:{}", a, b));
            let inside = a <= v && v <= b;
            prop_assert_eq!(thresh.violates(v), !inside);
            prop_assert_eq!(inverted.violates(v), inside);
        }
    }
}
