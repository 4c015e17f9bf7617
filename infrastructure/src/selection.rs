//! Random fallback-example chooser.
//!
//! Production implementation of the domain's [`ExampleChooser`] seam. Tests
//! use [`FixedChooser`](brainbytes_domain::FixedChooser) instead so fallback
//! selection stays deterministic.

use brainbytes_domain::ExampleChooser;
use rand::Rng;

/// Chooser backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChooser;

impl ExampleChooser for RandomChooser {
    fn choose(&self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            rand::thread_rng().gen_range(0..len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_is_in_range() {
        let chooser = RandomChooser;
        for len in 1..10 {
            let choice = chooser.choose(len);
            assert!(choice < len);
        }
    }

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(RandomChooser.choose(0), 0);
        assert_eq!(RandomChooser.choose(1), 0);
    }

    #[test]
    fn test_eventually_covers_the_range() {
        let chooser = RandomChooser;
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[chooser.choose(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
