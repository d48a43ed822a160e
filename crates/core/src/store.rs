//! The FAQ store: an ordered, immutable list of question/answer pairs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{FaqError, Result};
use crate::slug::slugify;

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }

    /// Identity of the entry in the rendered list and in the URL fragment.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.question)
    }

    /// Whether an already normalized query occurs in the question or the answer.
    #[must_use]
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.question.to_lowercase().contains(normalized_query)
            || self.answer.to_lowercase().contains(normalized_query)
    }
}

/// Normalize a raw search value: lowercase, then trim.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_owned()
}

/// Ordered FAQ list, fixed once constructed.
#[derive(Debug, Clone, Default)]
pub struct FaqStore {
    entries: Vec<FaqEntry>,
}

impl FaqStore {
    #[must_use]
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// The default customer support FAQs shipped with the widget.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            FaqEntry::new(
                "How do I reset my password?",
                "To reset your password, go to the login page and click on 'Forgot Password'. \
                 Follow the instructions sent to your email.",
            ),
            FaqEntry::new(
                "What payment methods do you accept?",
                "We accept all major credit cards (Visa, MasterCard, Amex), PayPal, and Apple Pay.",
            ),
            FaqEntry::new(
                "Can I cancel my subscription?",
                "Yes, you can cancel your subscription at any time from your account settings. \
                 Your access will continue until the end of the billing period.",
            ),
            FaqEntry::new(
                "How do I contact support?",
                "You can reach our support team via email at support@example.com or use the \
                 live chat feature on our website.",
            ),
            FaqEntry::new(
                "Is there a free trial available?",
                "Yes, we offer a 14-day free trial for new users. No credit card is required to \
                 sign up.",
            ),
        ])
    }

    /// Load entries from a JSON array of `{ "question", "answer" }` objects.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or contains an
    /// entry with a blank question.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse entries from a JSON array string.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or a blank question.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let entries: Vec<FaqEntry> = serde_json::from_str(raw)?;
        if let Some(position) = entries.iter().position(|e| e.question.trim().is_empty()) {
            return Err(FaqError::InvalidInput(format!("entry {position} has an empty question")));
        }
        Ok(Self::new(entries))
    }

    #[must_use]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose question or answer contains `query`, case-insensitively.
    ///
    /// A blank query yields the full list.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<FaqEntry> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return self.entries.clone();
        }
        self.entries.iter().filter(|e| e.matches(&normalized)).cloned().collect()
    }

    /// First entry whose slug equals `slug`.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.slug() == slug)
    }

    /// Slugs shared by more than one entry, with the number of entries sharing each.
    #[must_use]
    pub fn slug_collisions(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.slug()).or_default() += 1;
        }
        counts.into_iter().filter(|(_, count)| *count > 1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_five_entries() {
        let store = FaqStore::builtin();
        assert_eq!(store.len(), 5);
        assert!(store.slug_collisions().is_empty());
    }

    #[test]
    fn test_filter_matches_question_case_insensitive() {
        let store = FaqStore::builtin();
        let hits = store.filter("PASSWORD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "How do I reset my password?");
    }

    #[test]
    fn test_filter_matches_answer_only() {
        let store = FaqStore::builtin();
        let hits = store.filter("paypal");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug(), "what-payment-methods-do-you-accept");
    }

    #[test]
    fn test_filter_preserves_store_order() {
        let store = FaqStore::builtin();
        let hits = store.filter("you");
        let questions: Vec<_> = hits.iter().map(|e| e.question.as_str()).collect();
        let expected: Vec<_> = store
            .entries()
            .iter()
            .filter(|e| e.matches("you"))
            .map(|e| e.question.as_str())
            .collect();
        assert_eq!(questions, expected);
        assert!(hits.len() > 1);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let store = FaqStore::builtin();
        assert_eq!(store.filter("").len(), 5);
        assert_eq!(store.filter("   \t").len(), 5);
    }

    #[test]
    fn test_no_match() {
        assert!(FaqStore::builtin().filter("refunds").is_empty());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Reset PASSWORD "), "reset password");
        assert_eq!(normalize_query("\n"), "");
    }

    #[test]
    fn test_find_by_slug() {
        let store = FaqStore::builtin();
        let entry = store.find_by_slug("can-i-cancel-my-subscription").unwrap();
        assert_eq!(entry.question, "Can I cancel my subscription?");
        assert!(store.find_by_slug("missing").is_none());
    }

    #[test]
    fn test_slug_collisions_reported() {
        let store = FaqStore::new(vec![
            FaqEntry::new("Refunds?", "a"),
            FaqEntry::new("refunds", "b"),
            FaqEntry::new("Billing", "c"),
        ]);
        assert_eq!(store.slug_collisions(), vec![("refunds".to_owned(), 2)]);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"question": "Do you ship abroad?", "answer": "Yes, worldwide."}}]"#)
            .unwrap();
        let store = FaqStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].slug(), "do-you-ship-abroad");
    }

    #[test]
    fn test_from_json_rejects_blank_question() {
        let err = FaqStore::from_json_str(r#"[{"question": " ", "answer": "x"}]"#).unwrap_err();
        assert!(matches!(err, FaqError::InvalidInput(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = FaqStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FaqError::Serialization(_)));
    }

    #[test]
    fn test_from_json_missing_file() {
        let err = FaqStore::from_json_file(Path::new("/nonexistent/faq.json")).unwrap_err();
        assert!(matches!(err, FaqError::Io(_)));
    }
}
