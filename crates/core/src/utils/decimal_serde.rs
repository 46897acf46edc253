use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use std::str::FromStr;

/// Parses a JSON value into a decimal, accepting numbers and numeric strings.
///
/// Anything else (null, booleans, arrays, objects, empty or unparsable
/// strings, out-of-range numbers) yields `None`. Numbers keep their source
/// text (serde_json `arbitrary_precision`), so no digits are lost to `f64`.
pub fn parse_lenient_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal_str(&n.to_string()),
        Value::String(s) => parse_decimal_str(s),
        _ => None,
    }
}

fn parse_decimal_str(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

// Lenient deserializer for Option<Decimal>; values are written back as strings
pub mod lenient_decimal_option {
    use super::*;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::str_option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(parse_lenient_decimal(&value))
    }
}

// Lenient deserializer for flags: true, "true" (any case) or false
pub mod lenient_bool {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        })
    }
}

// Lenient deserializer for whole numbers such as ages
pub mod lenient_u32_option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                        .map(|f| f as u64)
                })
                .and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        };
        Ok(parsed)
    }
}

// Lenient deserializer for string enums; empty and unknown values become None
pub mod lenient_enum_option {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => s.trim().parse::<T>().ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_lenient_decimal_accepts_numbers_and_strings() {
        assert_eq!(parse_lenient_decimal(&json!(8500)), Some(dec!(8500)));
        assert_eq!(parse_lenient_decimal(&json!(12.75)), Some(dec!(12.75)));
        assert_eq!(parse_lenient_decimal(&json!(" 1500.25 ")), Some(dec!(1500.25)));
        assert_eq!(parse_lenient_decimal(&json!("2e3")), Some(dec!(2000)));
        assert_eq!(parse_lenient_decimal(&json!(-40)), Some(dec!(-40)));
    }

    #[test]
    fn test_parse_lenient_decimal_rejects_non_numeric() {
        assert_eq!(parse_lenient_decimal(&json!(null)), None);
        assert_eq!(parse_lenient_decimal(&json!("")), None);
        assert_eq!(parse_lenient_decimal(&json!("abc")), None);
        assert_eq!(parse_lenient_decimal(&json!("NaN")), None);
        assert_eq!(parse_lenient_decimal(&json!(true)), None);
        assert_eq!(parse_lenient_decimal(&json!([1, 2])), None);
        assert_eq!(parse_lenient_decimal(&json!({ "value": 1 })), None);
    }

    #[test]
    fn test_parse_lenient_decimal_keeps_every_digit_of_json_numbers() {
        let value: Value = serde_json::from_str("12345678901234567.89").unwrap();
        assert_eq!(parse_lenient_decimal(&value), Some(dec!(12345678901234567.89)));

        let value: Value = serde_json::from_str("0.1").unwrap();
        assert_eq!(parse_lenient_decimal(&value), Some(dec!(0.1)));
    }

    #[test]
    fn test_parse_lenient_decimal_drops_out_of_range_numbers() {
        let value: Value = serde_json::from_str("1e400").unwrap();
        assert_eq!(parse_lenient_decimal(&value), None);
    }
}
