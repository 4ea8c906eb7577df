use jiff::Timestamp;

use crate::error::{err, error, ErrorKind};
use crate::{Elapsed, Error, Temporal};

impl Temporal for Timestamp {
    fn to_elapsed(&self) -> Result<Elapsed, Error> {
        Ok(Elapsed::from_unix_nanos(self.as_nanosecond()))
    }

    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
        let nanos = elapsed.to_unix_nanos();
        // Some jiff versions don't reject out of range nanoseconds, so check first.
        let range = Timestamp::MIN.as_nanosecond()..=Timestamp::MAX.as_nanosecond();
        if !range.contains(&nanos) {
            return err(ErrorKind::OutOfRange, "outside jiff::Timestamp");
        }
        Timestamp::from_nanosecond(nanos)
            .map_err(|_| error(ErrorKind::OutOfRange, "outside jiff::Timestamp"))
    }
}
