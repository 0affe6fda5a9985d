/// A named scoring trigger: if any needle occurs in the transcript, the
/// rule contributes its delta. Keeping these in const tables (rather than
/// inline conditionals) lets each rule be tested and tuned on its own.
#[derive(Clone, Copy, Debug)]
pub struct KeywordRule {
    pub name: &'static str,
    /// For case-insensitive rules the needles are stored lowercase.
    pub needles: &'static [&'static str],
    pub delta: f64,
    pub case_sensitive: bool,
}

impl KeywordRule {
    pub fn matches(&self, transcript: &str) -> bool {
        if self.case_sensitive {
            self.needles.iter().any(|n| transcript.contains(n))
        } else {
            let lower = transcript.to_lowercase();
            self.needles.iter().any(|n| lower.contains(n))
        }
    }

    /// The rule's contribution for this transcript: delta or 0.
    pub fn apply(&self, transcript: &str) -> f64 {
        if self.matches(transcript) {
            self.delta
        } else {
            0.0
        }
    }
}

/// Sum of all matching rules' deltas.
pub fn apply_all(rules: &[KeywordRule], transcript: &str) -> f64 {
    rules.iter().map(|rule| rule.apply(transcript)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const INSENSITIVE: KeywordRule = KeywordRule {
        name: "transitions",
        needles: &["first", "then"],
        delta: 0.5,
        case_sensitive: false,
    };

    const SENSITIVE: KeywordRule = KeywordRule {
        name: "technology",
        needles: &["API"],
        delta: 0.5,
        case_sensitive: true,
    };

    #[test]
    fn test_case_insensitive_match() {
        assert!(INSENSITIVE.matches("First, we planned"));
        assert!(INSENSITIVE.matches("and THEN we shipped"));
        assert!(!INSENSITIVE.matches("nothing relevant"));
    }

    #[test]
    fn test_case_sensitive_match() {
        assert!(SENSITIVE.matches("we called the API"));
        assert!(!SENSITIVE.matches("we called the api"));
    }

    #[test]
    fn test_apply_returns_delta_or_zero() {
        assert_relative_eq!(SENSITIVE.apply("the API layer"), 0.5);
        assert_relative_eq!(SENSITIVE.apply("the api layer"), 0.0);
    }

    #[test]
    fn test_apply_all_sums_matching_rules() {
        let rules = [INSENSITIVE, SENSITIVE];
        assert_relative_eq!(apply_all(&rules, "First the API"), 1.0);
        assert_relative_eq!(apply_all(&rules, "First the api"), 0.5);
        assert_relative_eq!(apply_all(&rules, "nothing"), 0.0);
    }

    #[test]
    fn test_rule_fires_once_regardless_of_needle_count() {
        // Both needles present, delta still counted once
        assert_relative_eq!(INSENSITIVE.apply("first this, then that"), 0.5);
    }
}
