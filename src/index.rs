use {
    crate::{error::Error, sequence},
    derive_more::{Display, From},
    std::str::FromStr,
};

/// Index used when the caller does not supply one.
pub const DEFAULT_INDEX: i64 = 1;

/// Position in the Fibonacci sequence.
///
/// Parsing accepts an optionally signed decimal integer. Empty input stands for
/// an omitted argument and yields the default index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub struct Index(i64);

impl Index {
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn fibonacci(self) -> u64 {
        sequence::fibonacci(self.0)
    }
}

impl Default for Index {
    fn default() -> Self {
        Index(DEFAULT_INDEX)
    }
}

impl From<Option<i64>> for Index {
    fn from(n: Option<i64>) -> Self {
        n.map(Index).unwrap_or_default()
    }
}

impl FromStr for Index {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Index::default());
        }
        let invalid = |reason: &str| Error::InvalidArgument {
            input: s.to_owned(),
            reason: reason.to_owned(),
        };
        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected an integer"));
        }
        trimmed
            .parse()
            .map(Index)
            .map_err(|_| invalid("integer out of range"))
    }
}
