//! Hardware entropy: cycle counter mixed into a small state machine.

use rand::RngCore;
use zeroize::Zeroize;

/// Odd 64-bit multipliers picked per step by the mixed state.
const MULTIPLIERS: [u64; 6] = [
    0x5851_f42d_4c95_7f2d,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x9e37_79b9_7f4a_7c15,
];

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "os entropy"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn entropy() -> u64 {
    rand::rngs::OsRng.next_u64()
}

/// Generator fed by the CPU cycle counter on every draw.
///
/// The state is wiped when the generator is dropped.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self { state: entropy() }
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let ent = entropy();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bytes_handles_partial_chunks() {
        let mut rng = HwRng::new();
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        // 13 zero bytes from a working mixer is practically impossible
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let mut rng = HwRng::new();
        let draws: Vec<u64> = (0..32).map(|_| rng.next_u64()).collect();
        let mut unique = draws.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() > 30);
    }
}
