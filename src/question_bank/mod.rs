use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{QuestionHit, QuestionSet};

/// Partial filter over the question bank. An absent field imposes no
/// constraint; present fields must all match exactly.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub course: Option<String>,
    pub module: Option<u32>,
    pub mark_weightage: Option<u32>,
}

impl FilterCriteria {
    fn matches(&self, set: &QuestionSet) -> bool {
        if let Some(course) = &self.course {
            if set.course != *course {
                return false;
            }
        }
        if let Some(module) = self.module {
            if set.module != module {
                return false;
            }
        }
        if let Some(marks) = self.mark_weightage {
            if set.mark_weightage != marks {
                return false;
            }
        }
        true
    }
}

/// The static question bank dataset, loaded once at startup. Immutable
/// afterwards.
pub struct QuestionBank {
    sets: Vec<QuestionSet>,
}

impl QuestionBank {
    pub fn new(sets: Vec<QuestionSet>) -> Self {
        Self { sets }
    }

    pub fn empty() -> Self {
        Self { sets: Vec::new() }
    }

    /// Load the dataset from a JSON file. A missing or malformed file is
    /// not fatal: the error is reported and the caller falls back to an
    /// empty bank.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::Fetch(format!("read {}: {}", path.display(), e)))?;
        let sets: Vec<QuestionSet> = serde_json::from_str(&contents)
            .map_err(|e| AppError::Fetch(format!("parse {}: {}", path.display(), e)))?;
        info!("loaded {} question sets from {}", sets.len(), path.display());
        Ok(Self { sets })
    }

    /// Load, degrading to an empty bank on failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(bank) => bank,
            Err(e) => {
                warn!("question bank unavailable, starting empty: {}", e);
                Self::empty()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Apply every supplied criterion conjunctively and flatten the matching
    /// sets into their questions. Dataset order is preserved; duplicates are
    /// not collapsed. No criteria means the whole bank.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<QuestionHit> {
        self.sets
            .iter()
            .filter(|set| criteria.matches(set))
            .flat_map(|set| {
                set.questions.iter().map(|q| QuestionHit {
                    id: q.id,
                    question: q.question.clone(),
                })
            })
            .collect()
    }

    /// Unique course names in first-seen order, for the course selector.
    pub fn courses(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for set in &self.sets {
            if !seen.iter().any(|c: &String| c == &set.course) {
                seen.push(set.course.clone());
            }
        }
        seen
    }
}
