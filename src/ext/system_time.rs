use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{error, ErrorKind};
use crate::{Elapsed, Error, Temporal};

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl Temporal for SystemTime {
    fn to_elapsed(&self) -> Result<Elapsed, Error> {
        let nanos = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_nanos() as i128,
            Err(before) => -(before.duration().as_nanos() as i128),
        };
        Ok(Elapsed::from_unix_nanos(nanos))
    }

    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
        let nanos = elapsed.to_unix_nanos();
        let abs = nanos.unsigned_abs();
        let since_unix = u64::try_from(abs / NANOS_PER_SEC)
            .ok()
            .map(|secs| Duration::new(secs, (abs % NANOS_PER_SEC) as u32));
        since_unix
            .and_then(|d| {
                if nanos < 0 {
                    UNIX_EPOCH.checked_sub(d)
                } else {
                    UNIX_EPOCH.checked_add(d)
                }
            })
            .ok_or_else(|| error(ErrorKind::OutOfRange, "outside SystemTime"))
    }
}
