//! Keyword gap analysis between a resume and a job description
//!
//! A frequency-ranked lexical complement to the embedding score, not a
//! precise ATS simulation. Keywords that appear in a different inflection
//! are counted as missing; that is an accepted limitation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "to", "for", "with", "on", "in", "from", "by", "as",
    "at", "is", "are", "be", "been", "was", "were", "you", "your", "our", "their", "they",
    "them", "it", "its", "this", "that",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGaps {
    /// Job-description terms absent from the resume, by descending frequency
    pub missing: Vec<String>,
    /// Job-description terms the resume already covers, by descending frequency
    pub present: Vec<String>,
}

pub struct KeywordGapAnalyzer {
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
    frequency_cutoff: usize,
    max_keywords: usize,
}

impl Default for KeywordGapAnalyzer {
    fn default() -> Self {
        Self::new(60, 20)
    }
}

impl KeywordGapAnalyzer {
    pub fn new(frequency_cutoff: usize, max_keywords: usize) -> Self {
        // Tokens start with a letter and continue with letters, digits, or
        // the symbol characters common in skill names (c++, node.js, c#)
        let token_regex = Regex::new(r"[a-zA-Z][a-zA-Z0-9+.#-]+").expect("Invalid token regex");

        Self {
            token_regex,
            stop_words: STOP_WORDS.iter().copied().collect(),
            frequency_cutoff,
            max_keywords,
        }
    }

    /// Partition the most frequent job-description terms into those missing
    /// from and present in the resume.
    pub fn gaps(&self, resume_text: &str, job_text: &str) -> KeywordGaps {
        let resume_tokens: HashSet<String> = self.tokenize(resume_text).into_iter().collect();
        let job_tokens = self.tokenize(job_text);

        let mut missing = Vec::new();
        let mut present = Vec::new();

        for token in self.ranked_by_frequency(&job_tokens) {
            if resume_tokens.contains(&token) {
                present.push(token);
            } else {
                missing.push(token);
            }
        }

        missing.truncate(self.max_keywords);
        present.truncate(self.max_keywords);

        KeywordGaps { missing, present }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stop_words.contains(t.as_str()))
            .collect()
    }

    /// Top `frequency_cutoff` tokens by descending frequency. The sort is
    /// stable, so equally frequent tokens keep their first-seen order.
    fn ranked_by_frequency(&self, tokens: &[String]) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for token in tokens {
            let entry = counts.entry(token.as_str()).or_insert(0);
            if *entry == 0 {
                first_seen.push(token.as_str());
            }
            *entry += 1;
        }

        let mut ranked = first_seen;
        ranked.sort_by_key(|t| std::cmp::Reverse(counts[t]));

        ranked
            .into_iter()
            .take(self.frequency_cutoff)
            .map(|t| t.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_filters_stop_words_and_short_tokens() {
        let analyzer = KeywordGapAnalyzer::default();
        let tokens = analyzer.tokenize("The engineer is a Rust and C++ expert");

        assert!(tokens.contains(&"rust".to_string()));
        assert!(tokens.contains(&"c++".to_string()));
        assert!(tokens.contains(&"engineer".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"is".to_string()));
        // Single letters never match the token pattern
        assert!(!tokens.iter().any(|t| t.len() < 2));
    }

    #[test]
    fn test_partitions_are_disjoint_and_frequency_ordered() {
        let analyzer = KeywordGapAnalyzer::default();
        let job = "kubernetes kubernetes kubernetes docker docker rust";
        let resume = "I deploy with docker every day";

        let gaps = analyzer.gaps(resume, job);

        assert_eq!(gaps.missing, vec!["kubernetes", "rust"]);
        assert_eq!(gaps.present, vec!["docker"]);

        let missing: HashSet<_> = gaps.missing.iter().collect();
        let present: HashSet<_> = gaps.present.iter().collect();
        assert!(missing.is_disjoint(&present));
    }

    #[test]
    fn test_union_is_subset_of_top_job_tokens() {
        let analyzer = KeywordGapAnalyzer::default();
        let job = "python sql airflow spark pandas numpy etl warehouse";
        let resume = "python and pandas";

        let gaps = analyzer.gaps(resume, job);
        let job_tokens: HashSet<String> = analyzer.tokenize(job).into_iter().collect();

        for keyword in gaps.missing.iter().chain(gaps.present.iter()) {
            assert!(job_tokens.contains(keyword), "'{}' not a job token", keyword);
        }
    }

    #[test]
    fn test_truncation_caps() {
        let analyzer = KeywordGapAnalyzer::new(60, 3);
        let job = "ada basic cobol delphi erlang fortran groovy haskell";
        let gaps = analyzer.gaps("", job);

        assert_eq!(gaps.missing.len(), 3);
        assert!(gaps.present.is_empty());
    }

    #[test]
    fn test_frequency_cutoff_limits_candidates() {
        let analyzer = KeywordGapAnalyzer::new(2, 20);
        // "aa" appears three times, "bb" twice, "cc" once; only the top two
        // frequencies survive the cutoff
        let gaps = analyzer.gaps("", "aa aa aa bb bb cc");

        assert_eq!(gaps.missing, vec!["aa", "bb"]);
    }
}
