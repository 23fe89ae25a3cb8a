//! Title similarity gating.
//!
//! Similarity is `1 - levenshtein(a, b) / max(len(a), len(b))` over normalized
//! titles (lower-cased, punctuation removed, whitespace collapsed), counted in
//! Unicode scalar values. Two empty titles are identical.

/// Minimum similarity for a candidate title to be accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.85;
/// Relaxed threshold used when the authors match.
pub const AUTHOR_MATCH_THRESHOLD: f64 = 0.75;
/// Absorbs floating-point noise right at a threshold.
const TOLERANCE: f64 = 1e-9;

/// Outcome of a single gating decision, for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityCheck {
    pub accepted: bool,
    pub similarity: f64,
    pub threshold: f64,
}

/// Decides whether a reported title refers to the same work as the input title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityChecker {
    threshold: f64,
    author_threshold: f64,
}
impl Default for SimilarityChecker {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, author_threshold: AUTHOR_MATCH_THRESHOLD }
    }
}
impl SimilarityChecker {
    pub fn new(threshold: f64, author_threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), author_threshold: author_threshold.clamp(0.0, 1.0) }
    }

    /// Similarity in `[0, 1]`; symmetric in its arguments.
    pub fn calculate_similarity(&self, a: &str, b: &str) -> f64 {
        let (a, b) = (normalize(a), normalize(b));
        strsim::normalized_levenshtein(&a, &b).clamp(0.0, 1.0)
    }

    pub fn threshold(&self, author_match: bool) -> f64 {
        if author_match { self.author_threshold } else { self.threshold }
    }

    /// Whether an already computed similarity passes the gate.
    pub fn accepts(&self, similarity: f64, author_match: bool) -> bool {
        similarity + TOLERANCE >= self.threshold(author_match)
    }

    pub fn is_similar(&self, a: &str, b: &str, author_match: bool) -> bool {
        self.check_with_details(a, b, author_match).accepted
    }

    pub fn check_with_details(&self, a: &str, b: &str, author_match: bool) -> SimilarityCheck {
        let similarity = self.calculate_similarity(a, b);
        SimilarityCheck {
            accepted: self.accepts(similarity, author_match),
            similarity,
            threshold: self.threshold(author_match),
        }
    }
}

/// Normalizes a title for comparison: lower-case, punctuation removed,
/// whitespace runs collapsed.
pub fn normalize(s: &str) -> String {
    let kept: String =
        s.to_lowercase().chars().filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace()).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("", "전지적 독자 시점")]
    #[case("나 혼자만 레벨업", "나혼자만 레벨업")]
    #[case("Solo Leveling", "solo-leveling!")]
    #[case("abc", "xyz")]
    #[case("회귀", "회귀한 천마")]
    fn similarity_is_symmetric_and_bounded(#[case] a: &str, #[case] b: &str) {
        let checker = SimilarityChecker::default();
        let ab = checker.calculate_similarity(a, b);
        assert_eq!(ab, checker.calculate_similarity(b, a));
        assert!((0.0..=1.0).contains(&ab));
        assert_eq!(checker.calculate_similarity(a, a), 1.0);
        assert_eq!(checker.calculate_similarity(b, b), 1.0);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let checker = SimilarityChecker::default();
        assert_eq!(checker.calculate_similarity("Solo  Leveling!", "solo leveling"), 1.0);
        assert_eq!(checker.calculate_similarity("", "!!!"), 1.0);
    }

    #[test]
    fn exact_threshold_is_accepted() {
        let checker = SimilarityChecker::default();
        // 3 substitutions over 20 characters: exactly 0.85.
        let check = checker.check_with_details("abcdefghijklmnopqrst", "abcdefghijklmnopqxyz", false);
        assert!((check.similarity - 0.85).abs() < 1e-12);
        assert!(check.accepted);
        assert_eq!(check.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn just_below_threshold_is_rejected() {
        let checker = SimilarityChecker::default();
        assert!(checker.accepts(0.85, false));
        assert!(!checker.accepts(0.849999, false));
    }

    #[test]
    fn author_match_relaxes_threshold() {
        let checker = SimilarityChecker::default();
        // 5 substitutions over 20 characters: exactly 0.75.
        let (a, b) = ("abcdefghijklmnopqrst", "abcdefghijklmnovwxyz");
        assert!((checker.calculate_similarity(a, b) - 0.75).abs() < 1e-12);
        assert!(!checker.is_similar(a, b, false));
        assert!(checker.is_similar(a, b, true));
        assert!(!checker.accepts(0.749999, true));
    }
}
