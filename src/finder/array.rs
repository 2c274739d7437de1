//! Vector backed search.

use crate::stream::CharSource;

/// Count draws until `count` consecutive distinct characters have been seen.
///
/// Same semantics as [`find_with_set`](super::find_with_set) but membership
/// is a linear scan over a vector, `O(count)` per draw.
pub fn find_with_array<S>(source: &mut S, count: usize) -> u64
where
    S: CharSource + ?Sized,
{
    let mut window: Vec<char> = Vec::with_capacity(count);
    let mut draws = 0u64;

    while window.len() < count {
        draws += 1;
        let c = source.draw();
        if window.contains(&c) {
            window.clear();
        }
        window.push(c);
    }

    draws
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{ReplaySource, StreamGenerator};

    #[test]
    fn test_reset_keeps_repeat() {
        let mut source = ReplaySource::new(vec!['a', 'b', 'a', 'c'], vec!['z']);
        assert_eq!(find_with_array(&mut source, 3), 5);
    }

    #[test]
    fn test_pure_cycle_finishes_in_count_draws() {
        let mut generator = StreamGenerator::with_master(7, 0).unwrap();
        assert_eq!(find_with_array(&mut generator, 7), 7);
    }
}
