//! Context and observation types - the keys and facts of every model.

use serde::{Deserialize, Serialize};

/// Sentinel marking the start/end boundary of an utterance.
pub const FENCE: &str = "<fence>";

/// Sentinel standing in for "the word to be determined". Only the seed model uses it.
pub const BLANK: &str = "<blank>";

/// A two-token lookup key (bigram) for a predictive model.
///
/// Serializes as a plain JSON array, e.g. `["<fence>","ONE"]`, which is also
/// the form used in networked store keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context(pub [String; 2]);

impl Context {
    /// Create a context from two tokens.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self([first.into(), second.into()])
    }

    /// The `[<fence>, <fence>]` context every utterance starts from.
    pub fn fenced() -> Self {
        Self::new(FENCE, FENCE)
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn second(&self) -> &str {
        &self.0[1]
    }

    /// Slide the window one token: `(a, b).advance(c) == (b, c)`.
    pub fn advance(&self, next: impl Into<String>) -> Self {
        Self([self.0[1].clone(), next.into()])
    }

    /// Swap the two slots.
    pub fn reversed(&self) -> Self {
        Self([self.0[1].clone(), self.0[0].clone()])
    }

    /// Check whether either slot holds the given token.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// The tokens of this context as a slice.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Serialized form used inside store keys.
    pub fn to_key(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<[&str; 2]> for Context {
    fn from(pair: [&str; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}

/// A single training observation: the token seen in a context.
///
/// The model name is not part of this type; it is supplied by the `Chain`
/// that records the observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub context: Context,
    pub observed: String,
}

impl Observation {
    pub fn new(context: Context, observed: impl Into<String>) -> Self {
        Self {
            context,
            observed: observed.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let context = Context::fenced().advance("ONE").advance("TWO");
        assert_eq!(context, Context::from(["ONE", "TWO"]));
    }

    #[test]
    fn test_reversed() {
        let context = Context::from(["APPLE", FENCE]);
        assert_eq!(context.reversed(), Context::from([FENCE, "APPLE"]));
        assert!(context.contains(FENCE));
        assert!(!context.contains(BLANK));
    }

    #[test]
    fn test_key_is_json_array() {
        let context = Context::from([FENCE, "ONE"]);
        assert_eq!(context.to_key().unwrap(), r#"["<fence>","ONE"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(Context::from(["A", "B"]).to_string(), "[A, B]");
    }
}
