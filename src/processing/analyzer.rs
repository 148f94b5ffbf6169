//! Analysis engine combining embedding similarity and skill overlap

use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::input::extract_pdf_text;
use crate::processing::embeddings::EmbeddingEngine;
use crate::processing::round2;
use crate::processing::skills::{SkillMatcher, SkillOverlap};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Structured match report returned to the caller.
///
/// All percentages are in [0, 100] with two decimals; the skill lists are
/// sorted so identical inputs always serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub semantic_similarity: f64,
    pub skill_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub final_score: f64,
}

/// Weights applied when combining the two component scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub semantic: f64,
    pub skill: f64,
}

/// Stateless scoring pipeline: extract, clean, embed, scan, combine.
pub struct AnalysisEngine {
    embeddings: EmbeddingEngine,
    skills: SkillMatcher,
    cleaner: TextProcessor,
    weights: ScoringWeights,
}

impl AnalysisEngine {
    /// Create an engine from the configuration. Loads the embedding model,
    /// so this runs once at startup.
    pub fn new(config: &Config) -> Result<Self> {
        let embeddings = EmbeddingEngine::load(&config.model)?;
        let skills = SkillMatcher::new(&config.scoring.skill_keywords)?;

        Ok(Self {
            embeddings,
            skills,
            cleaner: TextProcessor::new(),
            weights: ScoringWeights {
                semantic: config.scoring.semantic_weight,
                skill: config.scoring.skill_weight,
            },
        })
    }

    /// Score a resume document against a job description.
    pub fn analyze(&self, resume_bytes: &[u8], job_description: &str) -> Result<MatchReport> {
        let raw_text = extract_pdf_text(resume_bytes)?;

        let resume_text = self.cleaner.clean(&raw_text);
        let jd_text = self.cleaner.clean(job_description);

        if resume_text.is_empty() {
            return Err(AnalysisError::EmptyExtraction);
        }

        self.analyze_texts(&resume_text, &jd_text)
    }

    /// Score already-cleaned texts. Split out from [`analyze`] so the
    /// text-level pipeline is usable without a PDF in front of it.
    pub fn analyze_texts(&self, resume_text: &str, jd_text: &str) -> Result<MatchReport> {
        let semantic_similarity = self
            .embeddings
            .similarity_percent(resume_text, jd_text)?;
        debug!("Semantic similarity: {:.2}%", semantic_similarity);

        let overlap = self.skills.overlap(jd_text, resume_text);
        debug!(
            "Skill overlap: {}/{} keywords matched",
            overlap.matched.len(),
            overlap.jd_skills.len()
        );

        Ok(compose_report(semantic_similarity, &overlap, self.weights))
    }

    pub fn model_name(&self) -> &str {
        self.embeddings.model_name()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.keyword_count()
    }
}

/// Combine the component scores into the final report.
///
/// Kept free of the engine so the arithmetic is testable without model
/// files on disk.
pub fn compose_report(
    semantic_similarity: f64,
    overlap: &SkillOverlap,
    weights: ScoringWeights,
) -> MatchReport {
    let skill_match = overlap.percent;
    let final_score = round2(weights.semantic * semantic_similarity + weights.skill * skill_match);

    MatchReport {
        semantic_similarity,
        skill_match,
        matched_skills: overlap.matched.iter().cloned().collect(),
        missing_skills: overlap.missing.iter().cloned().collect(),
        final_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn default_weights() -> ScoringWeights {
        ScoringWeights {
            semantic: 0.7,
            skill: 0.3,
        }
    }

    fn overlap_for(jd: &str, resume: &str) -> SkillOverlap {
        let matcher = SkillMatcher::new(&ScoringConfig::default().skill_keywords).unwrap();
        matcher.overlap(jd, resume)
    }

    #[test]
    fn test_final_score_is_weighted_sum() {
        let overlap = overlap_for("python and docker required", "python and docker shipped");
        assert_eq!(overlap.percent, 100.0);

        let report = compose_report(80.0, &overlap, default_weights());
        assert_eq!(report.final_score, 86.0); // 0.7*80 + 0.3*100
    }

    #[test]
    fn test_final_score_rounds_to_two_decimals() {
        let overlap = overlap_for("python, docker, kubernetes", "python and docker");
        assert_eq!(overlap.percent, 66.67);

        let report = compose_report(71.113, &overlap, default_weights());
        // 0.7*71.113 + 0.3*66.67 = 49.7791 + 20.001 = 69.7801
        assert_eq!(report.final_score, 69.78);
    }

    #[test]
    fn test_skill_lists_are_sorted() {
        let overlap = overlap_for("pytorch, docker, aws required", "aws and docker");
        let report = compose_report(50.0, &overlap, default_weights());

        assert_eq!(report.matched_skills, vec!["aws", "docker"]);
        assert_eq!(report.missing_skills, vec!["pytorch"]);
    }

    #[test]
    fn test_no_jd_skills_means_zero_skill_match() {
        let overlap = overlap_for("a friendly team player", "python docker kubernetes");
        let report = compose_report(42.5, &overlap, default_weights());

        assert_eq!(report.skill_match, 0.0);
        assert_eq!(report.final_score, round2(0.7 * 42.5));
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
    }
}
