use crate::utils::MarkError;
use std::fmt;

const BASE_A: u8 = 1;
const BASE_C: u8 = 2;
const BASE_G: u8 = 4;
const BASE_T: u8 = 8;
const BASE_U: u8 = 16;
// T and U are interchangeable so that DNA motifs match RNA sequences and vice versa
const BASE_TU: u8 = BASE_T | BASE_U;

/// Set of unambiguous bases accepted at one motif position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseSet(u8);

impl BaseSet {
    /// Maps a motif character (plain base or IUPAC ambiguity code) to its base set.
    pub fn from_motif_char(ch: char) -> Option<Self> {
        let mask = match ch.to_ascii_uppercase() {
            'A' => BASE_A,
            'C' => BASE_C,
            'G' => BASE_G,
            'T' | 'U' => BASE_TU,
            'W' => BASE_A | BASE_TU,
            'S' => BASE_C | BASE_G,
            'M' => BASE_A | BASE_C,
            'K' => BASE_G | BASE_TU,
            'R' => BASE_A | BASE_G,
            'Y' => BASE_C | BASE_TU,
            'B' => BASE_C | BASE_G | BASE_TU,
            'D' => BASE_A | BASE_G | BASE_TU,
            'H' => BASE_A | BASE_C | BASE_TU,
            'V' => BASE_A | BASE_C | BASE_G,
            'N' => BASE_A | BASE_C | BASE_G | BASE_TU,
            _ => return None,
        };
        Some(Self(mask))
    }

    /// Checks a sequence byte against the set, ignoring case.
    #[inline(always)]
    pub fn accepts(self, base: u8) -> bool {
        let bit = match base.to_ascii_uppercase() {
            b'A' => BASE_A,
            b'C' => BASE_C,
            b'G' => BASE_G,
            b'T' => BASE_T,
            b'U' => BASE_U,
            _ => return false,
        };
        self.0 & bit != 0
    }

    pub fn bases(self) -> Vec<char> {
        [
            (BASE_A, 'A'),
            (BASE_C, 'C'),
            (BASE_G, 'G'),
            (BASE_T, 'T'),
            (BASE_U, 'U'),
        ]
        .iter()
        .filter(|(bit, _)| self.0 & bit != 0)
        .map(|(_, base)| *base)
        .collect()
    }
}

impl fmt::Display for BaseSet {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            BASE_A => write!(formatter, "A"),
            BASE_C => write!(formatter, "C"),
            BASE_G => write!(formatter, "G"),
            BASE_TU => write!(formatter, "T"),
            _ => write!(formatter, "[{}]", self.bases().into_iter().collect::<String>()),
        }
    }
}

/// A motif compiled into one accepted-base set per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifRule {
    motif: String,
    tokens: Vec<BaseSet>,
}

impl MotifRule {
    pub fn compile(raw_motif: &str) -> Result<Self, MarkError> {
        if raw_motif.is_empty() {
            return Err(MarkError::EmptyMotif);
        }
        let tokens = raw_motif
            .chars()
            .enumerate()
            .map(|(position, character)| {
                BaseSet::from_motif_char(character).ok_or_else(|| {
                    MarkError::InvalidMotifCharacter {
                        motif: raw_motif.to_string(),
                        character,
                        position,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MotifRule {
            motif: raw_motif.to_string(),
            tokens,
        })
    }

    /// The motif text as supplied by the user.
    pub fn motif(&self) -> &str {
        &self.motif
    }

    pub fn tokens(&self) -> &[BaseSet] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tests whether the motif occurs in `seq` starting at `start`.
    #[inline]
    pub fn matches_at(&self, seq: &[u8], start: usize) -> bool {
        match seq.get(start..start + self.len()) {
            Some(window) => self
                .tokens
                .iter()
                .zip(window)
                .all(|(token, &base)| token.accepts(base)),
            None => false,
        }
    }
}

impl fmt::Display for MotifRule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.tokens {
            write!(formatter, "{}", token)?;
        }
        Ok(())
    }
}
