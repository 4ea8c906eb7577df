use crate::consume::{consume_i32, consume_i64, expect_eof};
use crate::elapsed::Elapsed;
use crate::error::{error, ErrorKind};
use crate::normalize::normalize;
use crate::wire::{Format, TemporalValue, WireType};
use crate::Error;
use alloc::vec::Vec;

/// An instant in time that can be offered to or taken from the wire.
///
/// Implemented for `chrono` types, `std::time::SystemTime` (`std` feature),
/// `jiff::Timestamp` (`jiff` feature) and `time::OffsetDateTime` (`time` feature).
pub trait Temporal: Sized {
    /// The signed offset of `self` from 2000-01-01T00:00:00Z, truncated toward zero to
    /// whole microseconds.
    fn to_elapsed(&self) -> Result<Elapsed, Error>;

    /// The instant `elapsed` after 2000-01-01T00:00:00Z.
    fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error>;
}

/// How binary `timestamp`/`timestamptz` payloads become instants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimestampPrecision {
    /// The payload's microseconds, unchanged.
    #[default]
    Exact,
    /// Seconds as an `f64`, printed with six fractional digits and parsed back. May move
    /// the instant by up to a microsecond (more for offsets beyond `2^53` microseconds).
    Normalized,
}

/// Converts instants to and from binary temporal wire values.
///
/// Encoding always produces a binary `timestamptz`. Decoding understands binary `date`,
/// `timestamp` and `timestamptz`; everything else decodes to `None`.
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use pgtime::{Codec, Format, TemporalValue, TimestampPrecision, WireType};
///
/// let codec = Codec::new().with_precision(TimestampPrecision::Normalized);
/// let value = TemporalValue::new(WireType::Timestamp, Format::Binary, 1_000_000i64.to_be_bytes());
/// let t: Option<DateTime<Utc>> = codec.decode(&value).unwrap();
/// assert_eq!(t.unwrap().to_rfc3339(), "2000-01-01T00:00:01+00:00");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Codec {
    precision: TimestampPrecision,
}

impl Codec {
    /// The wire type every encoded instant is tagged with.
    pub const ENCODED_TYPE: WireType = WireType::TimestampTz;

    pub const fn new() -> Self {
        Self {
            precision: TimestampPrecision::Exact,
        }
    }

    pub const fn with_precision(mut self, precision: TimestampPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> TimestampPrecision {
        self.precision
    }

    /// Encodes `t` as a binary `timestamptz`: big-endian `i64` microseconds since the epoch.
    pub fn encode<T: Temporal>(&self, t: &T) -> Result<TemporalValue, Error> {
        let mut value = Vec::with_capacity(8);
        self.encode_into(t, &mut value)?;
        Ok(TemporalValue::new(Self::ENCODED_TYPE, Format::Binary, value))
    }

    /// Like [`Codec::encode`] but appends the payload to `out`. `out` is untouched on error.
    pub fn encode_into<T: Temporal>(&self, t: &T, out: &mut Vec<u8>) -> Result<(), Error> {
        let micros = t
            .to_elapsed()?
            .as_micros()
            .ok_or_else(|| error(ErrorKind::OutOfRange, "timestamp exceeds i64 microseconds"))?;
        out.extend_from_slice(&micros.to_be_bytes());
        Ok(())
    }

    /// Encodes the UTC day containing `t` as a binary `date`: big-endian `i32` days since
    /// the epoch.
    pub fn encode_date<T: Temporal>(&self, t: &T) -> Result<TemporalValue, Error> {
        let days = t
            .to_elapsed()?
            .floor_days()
            .ok_or_else(|| error(ErrorKind::OutOfRange, "date exceeds i32 days"))?;
        Ok(TemporalValue::new(
            WireType::Date,
            Format::Binary,
            days.to_be_bytes(),
        ))
    }

    /// Decodes `value`, returning `Ok(None)` for `NULL`, text format and wire types without a
    /// binary decoding.
    pub fn decode<T: Temporal>(&self, value: &TemporalValue) -> Result<Option<T>, Error> {
        self.decode_raw(value.ty, value.format, value.as_bytes())
    }

    /// Like [`Codec::decode`] but takes the parts of a [`TemporalValue`] separately.
    pub fn decode_raw<T: Temporal>(
        &self,
        ty: WireType,
        format: Format,
        bytes: Option<&[u8]>,
    ) -> Result<Option<T>, Error> {
        let Some(mut bytes) = bytes else {
            return Ok(None);
        };
        if format == Format::Text {
            tracing::trace!(?ty, "text temporal values aren't parsed");
            return Ok(None);
        }

        let elapsed = match ty {
            WireType::Timestamp | WireType::TimestampTz => {
                let micros = consume_i64(&mut bytes)?;
                expect_eof(bytes)?;
                match self.precision {
                    TimestampPrecision::Exact => Elapsed::from_micros(micros),
                    TimestampPrecision::Normalized => normalize(micros)?,
                }
            }
            WireType::Date => {
                let days = consume_i32(&mut bytes)?;
                expect_eof(bytes)?;
                Elapsed::from_days(days)
            }
            WireType::Time | WireType::TimeTz | WireType::Other(_) => {
                tracing::trace!(?ty, "no instant for wire type");
                return Ok(None);
            }
        };
        T::from_elapsed(elapsed).map(Some)
    }
}

/// Encodes `t` with the default [`Codec`].
pub fn encode<T: Temporal>(t: &T) -> Result<TemporalValue, Error> {
    Codec::new().encode(t)
}

/// Encodes the UTC day of `t` with the default [`Codec`].
pub fn encode_date<T: Temporal>(t: &T) -> Result<TemporalValue, Error> {
    Codec::new().encode_date(t)
}

/// Decodes `value` with the default [`Codec`].
pub fn decode<T: Temporal>(value: &TemporalValue) -> Result<Option<T>, Error> {
    Codec::new().decode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elapsed::{MICROS_PER_DAY, SECS_PER_DAY};
    use alloc::vec;

    // Keeps the tests independent of any instant library.
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct Offset(Elapsed);

    impl Temporal for Offset {
        fn to_elapsed(&self) -> Result<Elapsed, Error> {
            Ok(self.0)
        }
        fn from_elapsed(elapsed: Elapsed) -> Result<Self, Error> {
            Ok(Self(elapsed))
        }
    }

    fn micros(m: i64) -> Offset {
        Offset(Elapsed::from_micros(m))
    }

    const ALL_TYPES: [WireType; 6] = [
        WireType::Date,
        WireType::Time,
        WireType::TimeTz,
        WireType::Timestamp,
        WireType::TimestampTz,
        WireType::Other(25),
    ];

    #[test]
    fn encode_epoch() {
        let value = encode(&micros(0)).unwrap();
        assert_eq!(value.ty, WireType::TimestampTz);
        assert_eq!(value.format, Format::Binary);
        assert_eq!(value.as_bytes(), Some(&[0u8; 8][..]));
    }

    #[test]
    fn encode_big_endian() {
        let value = encode(&micros(-2)).unwrap();
        assert_eq!(value.value, Some(vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]));
        let value = encode(&micros(0x0102_0304_0506_0708)).unwrap();
        assert_eq!(value.value, Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn encode_into_appends() {
        let mut out = vec![9];
        Codec::new().encode_into(&micros(1), &mut out).unwrap();
        assert_eq!(out, [9, 0, 0, 0, 0, 0, 0, 0, 1]);

        let too_big = Offset(Elapsed::from_days(i32::MAX));
        let e = Codec::new().encode_into(&too_big, &mut out).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn decode_date() {
        let date = |days: i32| TemporalValue::new(WireType::Date, Format::Binary, days.to_be_bytes());
        assert_eq!(decode::<Offset>(&date(0)), Ok(Some(Offset(Elapsed::ZERO))));
        assert_eq!(decode::<Offset>(&date(1)), Ok(Some(micros(SECS_PER_DAY * 1_000_000))));
        assert_eq!(decode::<Offset>(&date(-1)), Ok(Some(micros(-MICROS_PER_DAY))));
        assert_eq!(
            decode::<Offset>(&date(i32::MIN)),
            Ok(Some(Offset(Elapsed::from_days(i32::MIN))))
        );
    }

    #[test]
    fn decode_timestamp() {
        for ty in [WireType::Timestamp, WireType::TimestampTz] {
            let value = TemporalValue::new(ty, Format::Binary, (-1_500_000i64).to_be_bytes());
            assert_eq!(decode::<Offset>(&value), Ok(Some(micros(-1_500_000))));
        }
    }

    #[test]
    fn text_is_absent() {
        for ty in ALL_TYPES {
            let payloads: [&[u8]; 4] = [&[0; 8], &[0; 4], b"2000-01-01 00:00:00+00", &[]];
            for payload in payloads {
                let value = TemporalValue::new(ty, Format::Text, payload);
                assert_eq!(decode::<Offset>(&value), Ok(None), "{ty:?}");
            }
        }
    }

    #[test]
    fn time_and_other_are_absent() {
        for ty in [WireType::Time, WireType::TimeTz, WireType::Other(1186)] {
            let value = TemporalValue::new(ty, Format::Binary, [0u8; 8]);
            assert_eq!(decode::<Offset>(&value), Ok(None));
            // Not even read.
            let value = TemporalValue::new(ty, Format::Binary, [0u8; 3]);
            assert_eq!(decode::<Offset>(&value), Ok(None));
        }
    }

    #[test]
    fn null_is_absent() {
        for ty in ALL_TYPES {
            for format in [Format::Text, Format::Binary] {
                assert_eq!(decode::<Offset>(&TemporalValue::null(ty, format)), Ok(None));
            }
        }
    }

    #[test]
    fn wrong_length() {
        fn kind(ty: WireType, bytes: &[u8]) -> ErrorKind {
            decode::<Offset>(&TemporalValue::new(ty, Format::Binary, bytes))
                .unwrap_err()
                .kind()
        }
        assert_eq!(kind(WireType::TimestampTz, &[0; 7]), ErrorKind::Eof);
        assert_eq!(kind(WireType::Timestamp, &[]), ErrorKind::Eof);
        assert_eq!(kind(WireType::TimestampTz, &[0; 9]), ErrorKind::TrailingBytes);
        assert_eq!(kind(WireType::Date, &[0; 3]), ErrorKind::Eof);
        assert_eq!(kind(WireType::Date, &[0; 8]), ErrorKind::TrailingBytes);
    }

    #[test]
    fn round_trip() {
        let normalized = Codec::new().with_precision(TimestampPrecision::Normalized);
        for m in crate::random_data::<i64>(1000) {
            let t = micros(m);
            let value = encode(&t).unwrap();
            assert_eq!(decode::<Offset>(&value), Ok(Some(t)));

            // Normalization needs the offset inside chrono's range.
            let m = m >> 11;
            let value = encode(&micros(m)).unwrap();
            let Offset(got) = normalized.decode::<Offset>(&value).unwrap().unwrap();
            let got = got.as_micros().unwrap();
            assert!((got - m).abs() <= 1, "{m} -> {got}");
        }
    }

    #[test]
    fn date_round_trip() {
        for d in crate::random_data::<i32>(1000)
            .into_iter()
            .chain([i32::MIN, -1, 0, 1, i32::MAX])
        {
            let t = Offset(Elapsed::from_days(d));
            let value = encode_date(&t).unwrap();
            assert_eq!(value.ty, WireType::Date);
            assert_eq!(value.as_bytes(), Some(&d.to_be_bytes()[..]));
            assert_eq!(decode::<Offset>(&value), Ok(Some(t)));
        }
    }

    #[test]
    fn encode_date_floors() {
        let value = encode_date(&micros(-1)).unwrap();
        assert_eq!(value.as_bytes(), Some(&(-1i32).to_be_bytes()[..]));
        let value = encode_date(&micros(MICROS_PER_DAY - 1)).unwrap();
        assert_eq!(value.as_bytes(), Some(&0i32.to_be_bytes()[..]));
    }

    #[test]
    fn normalized_out_of_range() {
        let codec = Codec::new().with_precision(TimestampPrecision::Normalized);
        let value = TemporalValue::new(WireType::TimestampTz, Format::Binary, i64::MAX.to_be_bytes());
        assert_eq!(
            codec.decode::<Offset>(&value).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        // Exact decoding has no such limit.
        assert_eq!(decode::<Offset>(&value), Ok(Some(micros(i64::MAX))));
    }

    #[test]
    fn config() {
        assert_eq!(Codec::default(), Codec::new());
        assert_eq!(Codec::new().precision(), TimestampPrecision::Exact);
        let codec = Codec::new().with_precision(TimestampPrecision::Normalized);
        assert_eq!(codec.precision(), TimestampPrecision::Normalized);

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>()
    }
}
