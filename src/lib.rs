#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod codec;
mod consume;
mod elapsed;
mod error;
mod ext;
mod normalize;
mod wire;

pub use crate::codec::{decode, encode, encode_date, Codec, Temporal, TimestampPrecision};
pub use crate::elapsed::{
    Elapsed, MICROS_PER_DAY, MICROS_PER_SEC, PG_EPOCH_UNIX_SECS, SECS_PER_DAY,
};
pub use crate::error::{Error, ErrorKind};
pub use crate::wire::{Format, TemporalValue, WireType};

#[cfg(test)]
fn random_data<T>(n: usize) -> alloc::vec::Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    let n = limit_miri(n);
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}
#[cfg(test)]
fn limit_miri(n: usize) -> usize {
    if cfg!(miri) {
        (n / 100).max(10).min(1000)
    } else {
        n
    }
}
