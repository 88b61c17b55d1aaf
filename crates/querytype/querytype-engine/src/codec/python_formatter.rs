//! A `serde_json` formatter reproducing Python's `json.dumps` defaults.
//!
//! - items separated by `", "`, keys by `": "`
//! - every non-ASCII character (and DEL) escaped as `\uXXXX`, astral
//!   characters as a UTF-16 surrogate pair
//! - floats rendered like Python's `repr(float)`: `0.0`, `1e-05`, `1e+16`
//! - integer literals echoed digit for digit, whatever their size

use std::io::{self, Write};

use serde_json::ser::Formatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFormatter;

impl PythonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(python_float_repr(value).as_bytes())
    }

    /// Number literals kept verbatim by `arbitrary_precision`. Python reads
    /// integer literals as exact ints and everything else as a float.
    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if is_integer_literal(value) {
            // `-0` is the int 0 in Python.
            if value.trim_start_matches('-').bytes().all(|b| b == b'0') {
                return writer.write_all(b"0");
            }
            return writer.write_all(value.as_bytes());
        }

        let parsed: f64 = value
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writer.write_all(python_float_repr(parsed).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn is_integer_literal(literal: &str) -> bool {
    !literal.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}

/// Render a float the way Python's `json.dumps` does.
///
/// Shortest round-trip digits; positional notation when the decimal
/// exponent is in `-4..16`, otherwise scientific with a signed exponent of
/// at least two digits. Overflowed literals such as `1e400` become `Infinity`.
pub fn python_float_repr(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        // Number of digits left of the decimal point.
        let point = exponent + 1;
        let body = if point <= 0 {
            format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
        } else if point as usize >= digits.len() {
            format!("{}{}.0", digits, "0".repeat(point as usize - digits.len()))
        } else {
            let (integral, fraction) = digits.split_at(point as usize);
            format!("{integral}.{fraction}")
        };
        format!("{sign}{body}")
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::python_float_repr;

    #[test]
    fn positional_range() {
        assert_eq!(python_float_repr(0.0), "0.0");
        assert_eq!(python_float_repr(-0.0), "-0.0");
        assert_eq!(python_float_repr(1.0), "1.0");
        assert_eq!(python_float_repr(0.1), "0.1");
        assert_eq!(python_float_repr(0.0001), "0.0001");
        assert_eq!(python_float_repr(123.456), "123.456");
        assert_eq!(python_float_repr(-2.5), "-2.5");
        assert_eq!(python_float_repr(1e15), "1000000000000000.0");
    }

    #[test]
    fn scientific_range() {
        assert_eq!(python_float_repr(1e-5), "1e-05");
        assert_eq!(python_float_repr(1.5e-5), "1.5e-05");
        assert_eq!(python_float_repr(1e16), "1e+16");
        assert_eq!(python_float_repr(-1.25e100), "-1.25e+100");
    }

    #[test]
    fn non_finite() {
        assert_eq!(python_float_repr(f64::INFINITY), "Infinity");
        assert_eq!(python_float_repr(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn integer_literals() {
        assert!(super::is_integer_literal("123456789012345678901234567890"));
        assert!(super::is_integer_literal("-0"));
        assert!(!super::is_integer_literal("1.0"));
        assert!(!super::is_integer_literal("1E5"));
    }
}
