//! Document structures

use crate::processing::normalizer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub role: DocumentRole,
    pub raw: String,
    pub normalized: String,
    /// Originating file path, when the text came from a file
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentRole {
    Resume,
    JobDescription,
}

impl Document {
    pub fn new(raw: String, role: DocumentRole) -> Self {
        let normalized = normalizer::normalize(&raw);
        Self {
            role,
            raw,
            normalized,
            source: None,
        }
    }

    pub fn from_file(raw: String, role: DocumentRole, source: String) -> Self {
        let mut doc = Self::new(raw, role);
        doc.source = Some(source);
        doc
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.normalized.split_whitespace().count()
    }
}

impl std::fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentRole::Resume => write!(f, "resume"),
            DocumentRole::JobDescription => write!(f, "job description"),
        }
    }
}
