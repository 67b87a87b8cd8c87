//! Small helpers shared across the crate.

use std::fmt::Debug;

/// Debug wrapper that redacts secret strings.
///
/// Short values are replaced wholesale with `***`; values of 12 or more
/// characters keep their first and last three characters. That is enough
/// to tell two app secrets apart in a log line without giving either
/// away.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 => f.write_str("***"),
            n => {
                f.write_str(&self.0[..3])?;
                f.write_str("***")?;
                f.write_str(&self.0[n - 3..])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = [
            ("24900000", "***"),
            ("f0c9488dc4ed8ed0f34e7e3d62e40672", "f0c***672"),
            ("aGatewaySecret", "aGa***ret"),
            ("", "EMPTY"),
            ("topsecret", "***"),
        ];

        for (input, expected) in cases {
            assert_eq!(format!("{:?}", Redact(input)), expected, "input: {input}");
        }
    }
}
