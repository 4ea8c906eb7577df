/// Seconds from 1970-01-01T00:00:00Z to 2000-01-01T00:00:00Z, the zero point of every
/// temporal wire value.
pub const PG_EPOCH_UNIX_SECS: i64 = 946_684_800;
pub const MICROS_PER_SEC: i64 = 1_000_000;
pub const SECS_PER_DAY: i64 = 24 * 60 * 60;
pub const MICROS_PER_DAY: i64 = SECS_PER_DAY * MICROS_PER_SEC;

const NANOS_PER_SEC: i128 = 1_000_000_000;
const NANOS_PER_MICRO: i128 = 1_000;

/// A signed offset from 2000-01-01T00:00:00Z with microsecond resolution.
///
/// Negative offsets are before the epoch. Every `i64` microsecond count and every `i32`
/// day count is representable, so building one never overflows.
///
/// ```rust
/// use pgtime::Elapsed;
///
/// assert_eq!(Elapsed::from_days(1), Elapsed::from_micros(86_400_000_000));
/// assert_eq!(Elapsed::from_unix_nanos(946_684_800_000_000_000), Elapsed::ZERO);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed(i128);

impl Elapsed {
    /// The epoch itself.
    pub const ZERO: Self = Self(0);

    pub const fn from_micros(micros: i64) -> Self {
        Self(micros as i128)
    }

    /// Midnight UTC `days` days after the epoch. Widens before multiplying.
    pub const fn from_days(days: i32) -> Self {
        Self(days as i128 * MICROS_PER_DAY as i128)
    }

    /// Rebases nanoseconds since the Unix epoch, truncating toward zero to whole microseconds.
    pub fn from_unix_nanos(nanos: i128) -> Self {
        let since_epoch = nanos - PG_EPOCH_UNIX_SECS as i128 * NANOS_PER_SEC;
        Self(since_epoch / NANOS_PER_MICRO)
    }

    /// Inverse of [`Elapsed::from_unix_nanos`], exact.
    pub fn to_unix_nanos(self) -> i128 {
        self.0 * NANOS_PER_MICRO + PG_EPOCH_UNIX_SECS as i128 * NANOS_PER_SEC
    }

    /// Unix seconds and non-negative subsecond nanoseconds, if the seconds fit in an `i64`.
    pub fn to_unix_timestamp(self) -> Option<(i64, u32)> {
        let nanos = self.to_unix_nanos();
        let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SEC)).ok()?;
        Some((secs, nanos.rem_euclid(NANOS_PER_SEC) as u32))
    }

    /// The wire representation of a timestamp, if it fits.
    pub fn as_micros(self) -> Option<i64> {
        i64::try_from(self.0).ok()
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / MICROS_PER_SEC as f64
    }

    /// Whole days since the epoch, rounding toward negative infinity.
    pub fn floor_days(self) -> Option<i32> {
        i32::try_from(self.0.div_euclid(MICROS_PER_DAY as i128)).ok()
    }
}
