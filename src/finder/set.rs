//! Hash-set backed search.

use std::collections::HashSet;

use crate::stream::CharSource;

/// Count draws until `count` consecutive distinct characters have been seen.
///
/// Each draw is inserted into a set. If the set does not grow the character
/// is a repeat: the set is cleared and reseeded with just that character.
/// Membership costs `O(1)` amortized per draw.
pub fn find_with_set<S>(source: &mut S, count: usize) -> u64
where
    S: CharSource + ?Sized,
{
    let mut seen: HashSet<char> = HashSet::with_capacity(count);
    let mut draws = 0u64;

    while seen.len() < count {
        draws += 1;
        let c = source.draw();
        if !seen.insert(c) {
            seen.clear();
            seen.insert(c);
        }
    }

    draws
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::ReplaySource;

    #[test]
    fn test_reset_keeps_repeat() {
        // a b a | c → window after reset is [a], then [a, c]
        let mut source = ReplaySource::new(vec!['a', 'b', 'a', 'c'], vec!['z']);
        assert_eq!(find_with_set(&mut source, 2), 2);

        let mut source = ReplaySource::new(vec!['a', 'b', 'a', 'c'], vec!['z']);
        assert_eq!(find_with_set(&mut source, 3), 5);
    }

    #[test]
    fn test_zero_count() {
        let mut source = ReplaySource::new(vec![], vec!['a']);
        assert_eq!(find_with_set(&mut source, 0), 0);
        assert_eq!(source.position(), 0);
    }
}
