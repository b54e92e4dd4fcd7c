/// Reads the leading integer of a field the way spreadsheet exports are
/// usually consumed: surrounding whitespace is ignored and trailing junk
/// such as `%` or a decimal part is dropped. Returns `None` when no digits
/// lead the field.
pub fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = unsigned[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Scalar numeric column: unparsable values default to zero.
pub fn int_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(leading_int).unwrap_or(0)
}

/// Sprint progress column: unparsable or absent values mean "no data".
pub fn int_or_none(raw: Option<&str>) -> Option<i64> {
    raw.and_then(leading_int)
}

pub fn text(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}
