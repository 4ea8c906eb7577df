mod chrono;
#[cfg(feature = "jiff")]
mod jiff;
#[cfg(feature = "std")]
mod system_time;
#[cfg(feature = "time")]
mod time;

pub(crate) use self::chrono::unix_nanos;

/// Round trips every instant of `$data` through [`crate::encode`] and [`crate::decode`].
#[cfg(test)]
macro_rules! test_round_trip {
    ($($name:ident: $t:ty => $data:expr),+) => {
        paste::paste! {
            $(
                #[test]
                fn [<test_ $name _round_trip>]() {
                    for t in $data {
                        let value = crate::encode(&t).unwrap();
                        let decoded: $t = crate::decode(&value).unwrap().unwrap();
                        assert_eq!(t, decoded, "failed for {:?}", t);
                    }
                }
            )+
        }
    }
}
#[cfg(test)]
pub(crate) use test_round_trip;
