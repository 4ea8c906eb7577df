use time::OffsetDateTime;

use crate::error::{error, ErrorKind};
use crate::{Elapsed, Error, Temporal};

/// Decodes at UTC; the wire doesn't carry the original offset.
impl Temporal for OffsetDateTime {
    fn to_elapsed(&self) -> Result<Elapsed, Error> {
        Ok(Elapsed::from_unix_nanos(self.unix_timestamp_nanos()))
    }

    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
        OffsetDateTime::from_unix_timestamp_nanos(elapsed.to_unix_nanos())
            .map_err(|_| error(ErrorKind::OutOfRange, "outside time::OffsetDateTime"))
    }
}
