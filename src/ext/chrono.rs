use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::{error, ErrorKind};
use crate::{Elapsed, Error, Temporal};

/// Nanoseconds since the Unix epoch. A leap second carries into the following second.
pub(crate) fn unix_nanos<Tz: TimeZone>(t: &DateTime<Tz>) -> i128 {
    t.timestamp() as i128 * 1_000_000_000 + t.timestamp_subsec_nanos() as i128
}

fn utc_from_elapsed(elapsed: Elapsed) -> Result<DateTime<Utc>, Error> {
    elapsed
        .to_unix_timestamp()
        .and_then(|(secs, nanos)| DateTime::from_timestamp(secs, nanos))
        .ok_or_else(|| error(ErrorKind::OutOfRange, "outside chrono::DateTime"))
}

impl Temporal for DateTime<Utc> {
    fn to_elapsed(&self) -> Result<Elapsed, Error> {
        Ok(Elapsed::from_unix_nanos(unix_nanos(self)))
    }

    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
        utc_from_elapsed(elapsed)
    }
}

/// Decodes at offset `+00:00`; the wire doesn't carry the original offset.
impl Temporal for DateTime<FixedOffset> {
    fn to_elapsed(&self) -> Result<Elapsed, Error> {
        Ok(Elapsed::from_unix_nanos(unix_nanos(self)))
    }

    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
        utc_from_elapsed(elapsed).map(|t| t.fixed_offset())
    }
}

/// Interpreted as UTC.
impl Temporal for NaiveDateTime {
    fn to_elapsed(&self) -> Result<Elapsed, Error> {
        Ok(Elapsed::from_unix_nanos(unix_nanos(&self.and_utc())))
    }

    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
        utc_from_elapsed(elapsed).map(|t| t.naive_utc())
    }
}
