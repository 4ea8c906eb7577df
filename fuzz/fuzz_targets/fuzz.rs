#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate pgtime;
use pgtime::{Codec, Format, Temporal, TemporalValue, TimestampPrecision, WireType};
use std::fmt::Debug;
use std::time::SystemTime;

#[inline(never)]
fn test_decode<T: Debug + PartialEq + Temporal>(codec: Codec, value: &TemporalValue) {
    // Call decode twice to make sure it's pure.
    let first = codec.decode::<T>(value);
    assert_eq!(first, codec.decode::<T>(value));

    match first {
        Ok(Some(t)) => {
            assert_eq!(value.format, Format::Binary);
            let encoded = codec.encode(&t).unwrap();
            let t2 = codec.decode::<T>(&encoded).unwrap().unwrap();
            // Normalization can move an instant again.
            if codec.precision() == TimestampPrecision::Exact {
                assert_eq!(t, t2);
            }
        }
        Ok(None) => {
            assert!(
                value.is_null()
                    || value.format == Format::Text
                    || !matches!(
                        value.ty,
                        WireType::Date | WireType::Timestamp | WireType::TimestampTz
                    )
            );
        }
        Err(_) => {}
    }
}

fuzz_target!(|data: &[u8]| {
    let [tag, data @ ..] = data else {
        return;
    };

    let ty = match tag & 0b111 {
        0 => WireType::Date,
        1 => WireType::Time,
        2 => WireType::TimeTz,
        3 => WireType::Timestamp,
        4 => WireType::TimestampTz,
        _ => WireType::Other(u32::from(*tag)),
    };
    let format = if tag & 0b1000 == 0 {
        Format::Binary
    } else {
        Format::Text
    };
    let precision = if tag & 0b1_0000 == 0 {
        TimestampPrecision::Exact
    } else {
        TimestampPrecision::Normalized
    };
    let value = if tag & 0b10_0000 == 0 {
        TemporalValue::new(ty, format, data)
    } else {
        TemporalValue::null(ty, format)
    };
    let codec = Codec::new().with_precision(precision);

    macro_rules! test {
        ($typ1: expr, $($typ: ty,)*) => {
            {
                let mut j = 0;
                $(
                    if j == $typ1 {
                        test_decode::<$typ>(codec, &value);
                    }
                    #[allow(unused)]
                    {
                        j += 1;
                    }
                )*
            }
        }
    }
    test!(
        tag >> 6,
        chrono::DateTime<chrono::Utc>,
        chrono::NaiveDateTime,
        jiff::Timestamp,
        time::OffsetDateTime,
    );
    let _ = codec.decode::<SystemTime>(&value);
});
