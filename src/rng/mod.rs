//! Random sources for password generation.
//!
//! Generation code only sees [`RandomSource`]; which generator backs it is
//! picked once at startup through [`Source`].

mod hw;

use rand::rngs::{OsRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub use hw::HwRng;

/// Capability injected into the generator: uniform index draws and shuffles.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize;

    /// Uniform permutation of `items` (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RngCore> RandomSource for R {
    fn index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}

/// Generator choice as stored in settings and accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Thread-local generator from `rand`
    #[default]
    Thread,
    /// Operating system entropy (/dev/urandom, getrandom)
    Os,
    /// CPU cycle counter mixer
    Hardware,
}

pub enum Source {
    Thread(ThreadRng),
    Os(OsRng),
    Hardware(HwRng),
    Seeded(ChaCha8Rng),
}

impl Source {
    /// A seed always wins over `kind` so runs can be replayed.
    pub fn new(kind: SourceKind, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            return Source::Seeded(ChaCha8Rng::seed_from_u64(seed));
        }
        match kind {
            SourceKind::Thread => Source::Thread(rand::thread_rng()),
            SourceKind::Os => Source::Os(OsRng),
            SourceKind::Hardware => Source::Hardware(HwRng::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Thread(_) => "thread",
            Source::Os(_) => "/dev/urandom",
            Source::Hardware(_) => hw::source_name(),
            Source::Seeded(_) => "seeded",
        }
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Thread(r) => r.next_u32(),
            Source::Os(r) => r.next_u32(),
            Source::Hardware(r) => r.next_u32(),
            Source::Seeded(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Thread(r) => r.next_u64(),
            Source::Os(r) => r.next_u64(),
            Source::Hardware(r) => r.next_u64(),
            Source::Seeded(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Thread(r) => r.fill_bytes(dest),
            Source::Os(r) => r.fill_bytes(dest),
            Source::Hardware(r) => r.fill_bytes(dest),
            Source::Seeded(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Source::Thread(r) => r.try_fill_bytes(dest),
            Source::Os(r) => r.try_fill_bytes(dest),
            Source::Hardware(r) => r.try_fill_bytes(dest),
            Source::Seeded(r) => r.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_overrides_kind() {
        let source = Source::new(SourceKind::Hardware, Some(7));
        assert_eq!(source.name(), "seeded");
    }

    #[test]
    fn test_seeded_sources_replay() {
        let mut a = Source::new(SourceKind::Thread, Some(42));
        let mut b = Source::new(SourceKind::Os, Some(42));
        let xs: Vec<usize> = (0..16).map(|_| a.index(1000)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.index(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_index_stays_in_bound() {
        for kind in [SourceKind::Thread, SourceKind::Os, SourceKind::Hardware] {
            let mut source = Source::new(kind, None);
            for _ in 0..500 {
                assert!(source.index(7) < 7);
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut source = Source::new(SourceKind::Thread, Some(3));
        let mut items: Vec<u8> = (0..50).collect();
        source.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u8>>());
    }

    /// Default Fisher-Yates path, used by sources that are not `RngCore`.
    struct Countdown(usize);

    impl RandomSource for Countdown {
        fn index(&mut self, bound: usize) -> usize {
            self.0 = self.0.wrapping_sub(1);
            self.0 % bound
        }
    }

    #[test]
    fn test_default_shuffle_keeps_every_item() {
        let mut source = Countdown(1_000);
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        source.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!['a', 'b', 'c', 'd', 'e']);
    }
}
