//! Timestamp and ID utilities

use chrono::NaiveDateTime;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a time-ordered i64 for use in reservation event IDs.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at box-office scale)
///
/// IDs generated later compare greater, which is what the latest-event
/// tie-break relies on.
fn ordered_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Generate a fresh reservation event ID (`RES-<ordered id>`)
pub fn reservation_id() -> String {
    format!("RES-{}", ordered_id())
}

/// Numeric part of a reservation event ID, for tie-breaking between events
/// with identical reservation timestamps. Hand-entered IDs that don't follow
/// the `RES-<n>` shape yield `None` and fall back to string order.
pub fn reservation_ordinal(event_id: &str) -> Option<i64> {
    event_id.strip_prefix("RES-")?.parse().ok()
}

/// Wire rendering for timestamp cells (`YYYY-MM-DD HH:MM:SS.ffffff`, UTC).
/// Matches the format the sheet already contains.
pub fn wire_timestamp_now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Tolerant parse of a timestamp cell. Hand-edited cells may drop the
/// fractional part; anything unparseable yields `None` and the caller
/// falls back to lexical comparison.
pub fn parse_wire_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
