//! # BitString
//!
//! Fixed-length bit string chromosome. Bits are packed into 64-bit words so
//! that Hamming distance and bit counting run a word at a time. Bits past
//! `len` in the last word are always zero; derived equality and hashing
//! therefore compare exactly the ordered bit sequence.
//!
//! ## Example
//!
//! ```rust
//! use steady_ea::genome::BitString;
//!
//! let a = BitString::from_bits(&[true, false, true, true]);
//! let b = BitString::from_bits(&[true, true, true, false]);
//!
//! assert_eq!(a.count_ones(), 3);
//! assert_eq!(a.hamming_distance(&b), 2);
//! assert_eq!(a.to_string(), "1011");
//! ```

use std::fmt;

use crate::rng::RandomNumberGenerator;

const WORD_BITS: usize = 64;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitString {
    words: Vec<u64>,
    len: usize,
}

fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

impl BitString {
    /// All-zeros bit string of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; words_for(len)],
            len,
        }
    }

    /// All-ones bit string of the given length.
    pub fn ones(len: usize) -> Self {
        let mut bits = Self {
            words: vec![u64::MAX; words_for(len)],
            len,
        };
        bits.clear_tail();
        bits
    }

    /// Uniformly random bit string of the given length.
    pub fn random(len: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut bits = Self {
            words: (0..words_for(len)).map(|_| rng.next_word()).collect(),
            len,
        };
        bits.clear_tail();
        bits
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1)
    }

    /// Sets a bit. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.len {
            return;
        }
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Flips a bit. Out-of-range indices are ignored.
    pub fn flip(&mut self, index: usize) {
        if index < self.len {
            self.words[index / WORD_BITS] ^= 1u64 << (index % WORD_BITS);
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Every bit flipped.
    pub fn complement(&self) -> Self {
        let mut bits = Self {
            words: self.words.iter().map(|w| !w).collect(),
            len: self.len,
        };
        bits.clear_tail();
        bits
    }

    /// Number of positions at which the two strings differ.
    ///
    /// Both strings must have the same length; this is a caller invariant
    /// checked only in debug builds.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        debug_assert_eq!(self.len, other.len, "hamming distance of unequal lengths");
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum()
    }

    /// The first `cut` bits of `head` followed by the remaining bits of `tail`.
    ///
    /// Both inputs must share a length and `cut` must not exceed it.
    pub fn splice(head: &Self, tail: &Self, cut: usize) -> Self {
        debug_assert_eq!(head.len, tail.len);
        debug_assert!(cut <= head.len);

        let cut_word = cut / WORD_BITS;
        let low_mask = (1u64 << (cut % WORD_BITS)) - 1;
        let words = head
            .words
            .iter()
            .zip(tail.words.iter())
            .enumerate()
            .map(|(k, (h, t))| match k.cmp(&cut_word) {
                std::cmp::Ordering::Less => *h,
                std::cmp::Ordering::Equal => (h & low_mask) | (t & !low_mask),
                std::cmp::Ordering::Greater => *t,
            })
            .collect();

        Self {
            words,
            len: head.len,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
    }

    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut len = 0;
        for bit in iter {
            if len % WORD_BITS == 0 {
                words.push(0);
            }
            if bit {
                if let Some(last) = words.last_mut() {
                    *last |= 1u64 << (len % WORD_BITS);
                }
            }
            len += 1;
        }
        Self { words, len }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_and_ones() {
        let zeros = BitString::zeros(70);
        let ones = BitString::ones(70);

        assert_eq!(zeros.len(), 70);
        assert_eq!(zeros.count_ones(), 0);
        assert_eq!(ones.count_ones(), 70);
        assert_eq!(zeros.complement(), ones);
    }

    #[test]
    fn test_get_set_flip() {
        let mut bits = BitString::zeros(130);
        bits.set(0, true);
        bits.set(64, true);
        bits.flip(129);
        bits.flip(0);

        assert_eq!(bits.get(0), Some(false));
        assert_eq!(bits.get(64), Some(true));
        assert_eq!(bits.get(129), Some(true));
        assert_eq!(bits.get(130), None);
        assert_eq!(bits.count_ones(), 2);

        // out of range writes are ignored
        bits.set(500, true);
        bits.flip(500);
        assert_eq!(bits.count_ones(), 2);
    }

    #[test]
    fn test_random_keeps_tail_clear() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        for len in [1, 5, 63, 64, 65, 100] {
            let bits = BitString::random(len, &mut rng);
            assert_eq!(bits.len(), len);
            assert!(bits.count_ones() <= len);
            assert_eq!(bits, bits.iter().collect::<BitString>());
        }
    }

    #[test]
    fn test_hamming_distance() {
        let a = BitString::from_bits(&[true, false, true, false]);
        let b = BitString::from_bits(&[true, true, false, false]);

        assert_eq!(a.hamming_distance(&a), 0);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(b.hamming_distance(&a), 2);
        assert_eq!(BitString::zeros(100).hamming_distance(&BitString::ones(100)), 100);
    }

    #[test]
    fn test_splice_across_words() {
        let head = BitString::ones(100);
        let tail = BitString::zeros(100);

        for cut in [0, 1, 50, 63, 64, 65, 99, 100] {
            let child = BitString::splice(&head, &tail, cut);
            assert_eq!(child.len(), 100);
            assert_eq!(child.count_ones(), cut);
            assert!(child.iter().take(cut).all(|b| b));
            assert!(child.iter().skip(cut).all(|b| !b));
        }
    }

    #[test]
    fn test_display_and_from_bits() {
        let bits = BitString::from_bits(&[false, true, true, false, true]);
        assert_eq!(bits.to_string(), "01101");
        assert_eq!(BitString::from_bits(&[]).to_string(), "");
        assert!(BitString::from_bits(&[]).is_empty());
    }

    #[test]
    fn test_equality_is_structural() {
        let mut a = BitString::zeros(10);
        let b = BitString::from_bits(&[false; 10]);
        assert_eq!(a, b);

        a.flip(3);
        assert_ne!(a, b);
        a.flip(3);
        assert_eq!(a, b);
    }
}
