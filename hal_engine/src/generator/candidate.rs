//! Candidate phrases and the pieces of their scoring that need no store.

use hal_store::{Context, FENCE};
use serde::Serialize;

/// A generated phrase on its way to becoming a reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Normalized tokens.
    pub phrase: Vec<String>,
    pub score: f64,
    /// Cased and punctuated form, once a rewrite succeeded.
    pub rewritten: Option<String>,
}

impl Candidate {
    pub fn new(phrase: Vec<String>, score: f64) -> Self {
        Self {
            phrase,
            score,
            rewritten: None,
        }
    }

    pub fn len(&self) -> usize {
        self.phrase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }
}

/// Sliding windows of three over `<fence> <fence> phrase...`, split into
/// the leading bigram and the token it predicts.
pub fn trigrams<'a, I>(phrase: I) -> Vec<(Context, String)>
where
    I: IntoIterator<Item = &'a String>,
{
    let padded: Vec<&str> = [FENCE, FENCE]
        .into_iter()
        .chain(phrase.into_iter().map(String::as_str))
        .collect();
    padded
        .windows(3)
        .map(|w| (Context::new(w[0], w[1]), w[2].to_string()))
        .collect()
}

/// Keep long phrases from winning on sheer length.
///
/// Divides by `sqrt(len)` from 8 tokens up, and again by `len` past 16.
pub fn dampen(score: f64, len: usize) -> f64 {
    let mut score = score;
    if len >= 8 {
        score /= (len as f64).sqrt();
    }
    if len > 16 {
        score /= len as f64;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trigrams_forward() {
        let phrase = strings(&["ONE", "TWO", "THREE"]);
        assert_eq!(
            trigrams(&phrase),
            vec![
                (Context::from([FENCE, FENCE]), "ONE".to_string()),
                (Context::from([FENCE, "ONE"]), "TWO".to_string()),
                (Context::from(["ONE", "TWO"]), "THREE".to_string()),
            ]
        );
    }

    #[test]
    fn test_trigrams_reversed() {
        let phrase = strings(&["ONE", "TWO"]);
        let backward = trigrams(phrase.iter().rev());
        assert_eq!(backward[0], (Context::from([FENCE, FENCE]), "TWO".to_string()));
        assert_eq!(backward[1], (Context::from([FENCE, "TWO"]), "ONE".to_string()));
    }

    #[test]
    fn test_trigrams_one_per_token() {
        assert!(trigrams(&Vec::<String>::new()).is_empty());
        assert_eq!(trigrams(&strings(&["A"; 25])).len(), 25);
    }

    #[test]
    fn test_dampen() {
        assert_eq!(dampen(2.0, 3), 2.0);
        assert_eq!(dampen(2.0, 7), 2.0);
        assert!((dampen(3.0, 9) - 1.0).abs() < 1e-12);
        assert!((dampen(2.0, 16) - 0.5).abs() < 1e-12);
        assert!((dampen(2.0, 25) - 0.016).abs() < 1e-12);
    }
}
