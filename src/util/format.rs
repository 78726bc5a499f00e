/// Thresholds for `size_to_human`, ascending.
///
/// GB and TB are decimal while KiB and MiB are binary. Reports produced by
/// earlier tooling use this exact table, so it is kept as is.
const SIZE_TABLE: [(u64, &str); 5] = [
    (1, "B"),
    (1 << 10, "KiB"),
    (1 << 20, "MiB"),
    (1_000_000_000, "GB"),
    (1_000_000_000_000, "TB"),
];

/// Format a byte count as `"<value> <unit>"` with two decimals, or
/// `"0 bytes"` for an empty size.
pub fn size_to_human(size: u64) -> String {
    if size == 0 {
        return "0 bytes".to_string();
    }

    let (threshold, label) = SIZE_TABLE
        .iter()
        .take_while(|(threshold, _)| *threshold <= size)
        .last()
        .copied()
        .unwrap_or(SIZE_TABLE[0]);

    format!("{:.2} {}", size as f64 / threshold as f64, label)
}

/// Format a Unix timestamp as an RFC 3339 string in UTC
pub fn format_timestamp(timestamp: i64) -> String {
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| "unknown".to_string())
}
