//! Lenient reading of form values.
//!
//! Form fields arrive as free text. A reading is the longest numeric prefix
//! after leading whitespace, so `"72 bpm"` reads as 72 and `"abc"` reads as
//! nothing. Integer fields drop any fractional part (`"98.7"` reads as 98).

use std::fmt;

/// A raw field value: missing, typed text, or an already numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
}

impl<'a> RawValue<'a> {
    /// Read the value as a decimal number
    pub fn as_decimal(&self) -> Option<f64> {
        let value = match *self {
            RawValue::Missing => None,
            RawValue::Text(text) => decimal_prefix(text).and_then(|prefix| prefix.parse::<f64>().ok()),
            RawValue::Number(number) => Some(number),
        }?;
        value.is_finite().then_some(value)
    }

    /// Read the value as a whole number, truncating toward zero
    pub fn as_integer(&self) -> Option<f64> {
        let value = match *self {
            RawValue::Missing => None,
            RawValue::Text(text) => integer_prefix(text).and_then(|prefix| prefix.parse::<f64>().ok()),
            RawValue::Number(number) => Some(number.trunc()),
        }?;
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Missing => Ok(()),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(text: &'a str) -> Self {
        RawValue::Text(text)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(text: &'a String) -> Self {
        RawValue::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(RawValue::Missing, RawValue::Text)
    }
}

impl<'a> From<&'a Option<String>> for RawValue<'a> {
    fn from(text: &'a Option<String>) -> Self {
        text.as_deref().into()
    }
}

impl From<Option<f64>> for RawValue<'_> {
    fn from(number: Option<f64>) -> Self {
        number.map_or(RawValue::Missing, RawValue::Number)
    }
}

macro_rules! raw_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue<'_> {
                fn from(number: $ty) -> Self {
                    RawValue::Number(f64::from(number))
                }
            }
        )*
    };
}

raw_from_number!(f64, f32, i32, u8, u16, u32);

impl From<i64> for RawValue<'_> {
    fn from(number: i64) -> Self {
        RawValue::Number(number as f64)
    }
}

/// Length of the run of ASCII digits at the start of `bytes`
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Sign and integer digits at the start of the text
fn integer_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = digit_run(&bytes[sign..]);
    (digits > 0).then(|| &text[..sign + digits])
}

/// Sign, digits, fraction and exponent at the start of the text
fn decimal_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));

    let whole = digit_run(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(&bytes[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    // An exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digit_run(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_prefix() {
        assert_eq!(RawValue::from("98.6").as_decimal(), Some(98.6));
        assert_eq!(RawValue::from("  101.2F").as_decimal(), Some(101.2));
        assert_eq!(RawValue::from(".5").as_decimal(), Some(0.5));
        assert_eq!(RawValue::from("7.").as_decimal(), Some(7.0));
        assert_eq!(RawValue::from("1e2kg").as_decimal(), Some(100.0));
        assert_eq!(RawValue::from("3e").as_decimal(), Some(3.0));
        assert_eq!(RawValue::from("-4.5").as_decimal(), Some(-4.5));
    }

    #[test]
    fn test_integer_prefix() {
        assert_eq!(RawValue::from("72 bpm").as_integer(), Some(72.0));
        assert_eq!(RawValue::from("98.7").as_integer(), Some(98.0));
        assert_eq!(RawValue::from("-5").as_integer(), Some(-5.0));
        assert_eq!(RawValue::from(98.7).as_integer(), Some(98.0));
    }

    #[test]
    fn test_non_numeric_text_reads_as_nothing() {
        for text in ["", "   ", "abc", "-", ".", "+.", "e5"] {
            assert_eq!(RawValue::from(text).as_decimal(), None, "{:?}", text);
            assert_eq!(RawValue::from(text).as_integer(), None, "{:?}", text);
        }
        assert_eq!(RawValue::Missing.as_decimal(), None);
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        assert_eq!(RawValue::from(f64::NAN).as_decimal(), None);
        assert_eq!(RawValue::from(f64::INFINITY).as_integer(), None);
    }

    #[test]
    fn test_raw_string() {
        let stored: Option<String> = Some("120".to_string());
        assert_eq!(RawValue::from(&stored).to_string(), "120");
        assert_eq!(RawValue::from(None::<&str>).to_string(), "");
        assert_eq!(RawValue::from(70).to_string(), "70");
    }
}
