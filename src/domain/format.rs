use {
    chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc},
    serde_json::{Number, Value},
};

pub const EMPTY: &str = "(empty)";
pub const NONE: &str = "(none)";

const DISPLAY_DATETIME: &str = "%d/%m/%Y, %H:%M";
const ZONED_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Renders a single raw field value as a display string.
///
/// `None` stands for a field that is absent from the snapshot altogether,
/// `Some(Value::Null)` for one that is present but null. Never fails: shapes
/// it cannot improve on are passed through as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormatter {
    offset: FixedOffset,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl ValueFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn format(&self, value: Option<&Value>) -> String {
        match value {
            None => NONE.to_string(),
            Some(Value::Null) => EMPTY.to_string(),
            Some(Value::Bool(true)) => "Yes".to_string(),
            Some(Value::Bool(false)) => "No".to_string(),
            Some(Value::String(s)) if s.is_empty() => EMPTY.to_string(),
            Some(Value::String(s)) if has_iso_date_prefix(s) => {
                self.format_datetime(s).unwrap_or_else(|| s.clone())
            }
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) if items.is_empty() => EMPTY.to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .map(stringify_element)
                .collect::<Vec<_>>()
                .join(", "),
            Some(Value::Object(map)) => serde_json::to_string_pretty(map)
                .unwrap_or_else(|_| Value::Object(map.clone()).to_string()),
            Some(Value::Number(n)) => group_number(n),
        }
    }

    /// `2024-03-05T14:07:00Z` → `05/03/2024, 14:07` in the configured offset.
    pub fn format_datetime(&self, s: &str) -> Option<String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(
                dt.with_timezone(&self.offset)
                    .format(DISPLAY_DATETIME)
                    .to_string(),
            );
        }
        // Zoned, with or without seconds or an offset colon.
        let zoned = match s.strip_suffix(['Z', 'z']) {
            Some(local) => format!("{local}+00:00"),
            None => s.to_string(),
        };
        for fmt in ZONED_DATETIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
                return Some(
                    dt.with_timezone(&self.offset)
                        .format(DISPLAY_DATETIME)
                        .to_string(),
                );
            }
        }
        // No zone given: the timestamp is already wall-clock time.
        for fmt in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(naive.format(DISPLAY_DATETIME).to_string());
            }
        }
        // Bare dates are midnight UTC.
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
        let utc = date.and_hms_opt(0, 0, 0)?.and_utc();
        Some(
            utc.with_timezone(&self.offset)
                .format(DISPLAY_DATETIME)
                .to_string(),
        )
    }
}

/// Shorthand for [`ValueFormatter::format`] in UTC.
pub fn format_value(value: Option<&Value>) -> String {
    ValueFormatter::default().format(value)
}

/// `YYYY-MM-DD` at the start of the string.
pub fn has_iso_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

// Array elements are joined as-is, without recursive formatting.
fn stringify_element(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Thousands-grouped decimal, at most three fraction digits: `1234567.891` → `1,234,567.891`.
pub fn group_number(n: &Number) -> String {
    let plain = if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        let f = n.as_f64().unwrap_or_default();
        let fixed = format!("{f:.3}");
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    };

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
