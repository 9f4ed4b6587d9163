//! Policy-table key type.
//!
//! A history is keyed by its move digits concatenated in play order, so the
//! history `[0, 4]` becomes `"04"` and the empty history becomes `""`.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Key identifying a move history in a policy table.
///
/// Deserialization goes through [`HistoryKey::parse`], so keys read back from
/// disk are validated like keys typed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HistoryKey(String);

impl HistoryKey {
    /// Key of the empty history (the root of the game tree).
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build a key from a move sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_solver::identifiers::HistoryKey;
    ///
    /// let key = HistoryKey::from_moves(&[0, 4, 8]);
    /// assert_eq!(key.as_str(), "048");
    /// ```
    pub fn from_moves(moves: &[usize]) -> Self {
        Self(moves.iter().map(|mv| mv.to_string()).collect())
    }

    /// Parse a key, checking that every character is a distinct cell digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHistoryKey`] for non-digit characters, digits
    /// outside 0-8, or repeated cells.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidHistoryKey {
            key: value.to_string(),
            reason,
        };

        if value.len() > 9 {
            return Err(invalid(format!("{} moves exceed the 9 cells", value.len())));
        }

        let mut seen = [false; 9];
        for c in value.chars() {
            let cell = c
                .to_digit(10)
                .filter(|&d| d < 9)
                .ok_or_else(|| invalid(format!("'{c}' is not a cell digit 0-8")))?
                as usize;
            if seen[cell] {
                return Err(invalid(format!("cell {cell} is played twice")));
            }
            seen[cell] = true;
        }

        Ok(Self(value.to_string()))
    }

    /// Decode the key back into its move sequence.
    pub fn moves(&self) -> Vec<usize> {
        self.0
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect()
    }

    /// Number of moves in the history.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the key into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for HistoryKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HistoryKey> for String {
    fn from(key: HistoryKey) -> Self {
        key.0
    }
}

impl PartialEq<&str> for HistoryKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for HistoryKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for HistoryKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_key_is_empty_string() {
        assert_eq!(HistoryKey::root().as_str(), "");
        assert!(HistoryKey::root().is_empty());
        assert_eq!(HistoryKey::from_moves(&[]), HistoryKey::root());
    }

    #[test]
    fn key_decodes_to_original_moves() {
        let key = HistoryKey::from_moves(&[0, 1, 3, 2, 6]);
        assert_eq!(key, "01326");
        assert_eq!(key.moves(), vec![0, 1, 3, 2, 6]);
        assert_eq!(key.len(), 5);
    }

    #[test]
    fn parse_rejects_bad_keys() {
        assert!(HistoryKey::parse("04").is_ok());
        assert!(HistoryKey::parse("").is_ok());

        let err = HistoryKey::parse("09").unwrap_err();
        assert!(err.to_string().contains("'9'"));

        let err = HistoryKey::parse("0a").unwrap_err();
        assert!(err.to_string().contains("'a'"));

        let err = HistoryKey::parse("404").unwrap_err();
        assert!(err.to_string().contains("played twice"));

        assert!(HistoryKey::parse("0123456780").is_err());
    }

    #[test]
    fn keys_serialize_as_plain_strings() {
        let key = HistoryKey::from_moves(&[4, 0]);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"40\"");
    }

    #[test]
    fn deserialization_validates_keys() {
        let key: HistoryKey = serde_json::from_str("\"048\"").unwrap();
        assert_eq!(key.moves(), vec![0, 4, 8]);

        assert!(serde_json::from_str::<HistoryKey>("\"0a\"").is_err());
        assert!(serde_json::from_str::<HistoryKey>("\"44\"").is_err());
    }
}
