use crate::elapsed::{Elapsed, PG_EPOCH_UNIX_SECS};
use crate::error::{error, ErrorKind};
use crate::ext::unix_nanos;
use crate::Error;
use alloc::string::ToString;
use chrono::{DateTime, TimeDelta};

/// `yyyy-MM-dd HH:mm:ss.SSSSSS ±HHMM`, shared by every normalization.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %z";

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Decodes a timestamp the lossy way: seconds as an `f64` added to the epoch, then printed
/// with six fractional digits and parsed back.
///
/// Within one microsecond of [`Elapsed::from_micros`] while `|micros| < 2^53`.
pub fn normalize(micros: i64) -> Result<Elapsed, Error> {
    let (secs, nanos) = split_secs(Elapsed::from_micros(micros).as_secs_f64());
    let raw = PG_EPOCH_UNIX_SECS
        .checked_add(secs)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .and_then(|t| t.checked_add_signed(TimeDelta::nanoseconds(nanos)))
        .ok_or_else(|| error(ErrorKind::OutOfRange, "timestamp outside chrono::DateTime"))?;

    let formatted = raw.format(TIMESTAMP_FORMAT).to_string();
    let reparsed = DateTime::parse_from_str(&formatted, TIMESTAMP_FORMAT)
        .map_err(|_| error(ErrorKind::MalformedTimestamp, "normalized timestamp didn't parse"))?;

    let normalized = Elapsed::from_unix_nanos(unix_nanos(&reparsed));
    if normalized.as_micros() != Some(micros) {
        tracing::debug!(micros, ?normalized, "normalization moved timestamp");
    }
    Ok(normalized)
}

/// Whole seconds (toward zero) and the remaining nanoseconds rounded to nearest.
fn split_secs(secs: f64) -> (i64, i64) {
    let whole = secs as i64;
    let frac = (secs - whole as f64) * NANOS_PER_SEC;
    let nanos = if frac < 0.0 { frac - 0.5 } else { frac + 0.5 };
    (whole, nanos as i64)
}
