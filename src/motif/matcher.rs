use super::alphabet::MotifRule;
use crate::annotate::Interval;

/// Returns the start offset of every occurrence of `rule` in `seq`, in
/// ascending order. The window advances by one base after every test,
/// matched or not, so overlapping occurrences are all reported. Offsets
/// are byte offsets.
pub fn find_all(seq: &str, rule: &MotifRule) -> Vec<usize> {
    let seq = seq.as_bytes();
    if rule.is_empty() || seq.len() < rule.len() {
        return Vec::new();
    }
    (0..=seq.len() - rule.len())
        .filter(|&start| rule.matches_at(seq, start))
        .collect()
}

/// Same as [`find_all`] but reports each occurrence as a half-open interval.
pub fn find_intervals(seq: &str, rule: &MotifRule) -> Vec<Interval> {
    find_all(seq, rule)
        .into_iter()
        .map(|start| Interval::new(start, start + rule.len()))
        .collect()
}
