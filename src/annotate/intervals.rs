use std::fmt;

/// Half-open range `[start, stop)` of sequence offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: usize,
    pub stop: usize,
}

impl Interval {
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start < stop, "empty interval {start}..{stop}");
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}-{}", self.start, self.stop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    Upper, // Exons
    Lower, // Introns
}

impl CaseClass {
    fn contains(self, byte: u8) -> bool {
        match self {
            CaseClass::Upper => byte.is_ascii_uppercase(),
            CaseClass::Lower => byte.is_ascii_lowercase(),
        }
    }
}

/// Finds maximal runs of `case` letters. Any other byte, including letters
/// of the opposite case and non-letters, ends a run.
pub fn extract_runs(seq: &str, case: CaseClass) -> Vec<Interval> {
    let mut runs = Vec::new();
    let mut run_start = None;
    for (pos, &byte) in seq.as_bytes().iter().enumerate() {
        match (case.contains(byte), run_start) {
            (true, None) => run_start = Some(pos),
            (false, Some(start)) => {
                runs.push(Interval::new(start, pos));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        runs.push(Interval::new(start, seq.len()));
    }
    runs
}
