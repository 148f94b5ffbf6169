//! Keyword-based skill overlap between a job description and a resume

use crate::error::{AnalysisError, Result};
use crate::processing::round2;
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// Multi-pattern substring scanner over a fixed skill vocabulary.
///
/// Containment is plain substring search with no word boundaries: "api"
/// matches inside "rapid" and inside "fastapi". Overlapping matches are
/// reported so every keyword is tested independently of the others.
pub struct SkillMatcher {
    matcher: AhoCorasick,
    keywords: Vec<String>,
}

/// Keyword subsets of one job-description/resume pair.
#[derive(Debug, Clone)]
pub struct SkillOverlap {
    pub jd_skills: BTreeSet<String>,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// `100 * |matched| / |jd_skills|`, 0 when the JD names no skills.
    pub percent: f64,
}

impl SkillMatcher {
    /// Build a matcher from the configured keyword list (lowercase terms).
    pub fn new(keywords: &[String]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
            .map_err(|e| {
                AnalysisError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            matcher,
            keywords: keywords.to_vec(),
        })
    }

    /// All vocabulary keywords contained in the text.
    pub fn skills_in(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for mat in self.matcher.find_overlapping_iter(text) {
            found.insert(self.keywords[mat.pattern().as_usize()].clone());
        }
        found
    }

    /// Compute the skill overlap between a job description and a resume.
    pub fn overlap(&self, jd_text: &str, resume_text: &str) -> SkillOverlap {
        let jd_skills = self.skills_in(jd_text);
        let resume_skills = self.skills_in(resume_text);

        let matched: BTreeSet<String> = jd_skills.intersection(&resume_skills).cloned().collect();
        let missing: BTreeSet<String> = jd_skills.difference(&matched).cloned().collect();

        let percent = if jd_skills.is_empty() {
            0.0
        } else {
            round2(100.0 * matched.len() as f64 / jd_skills.len() as f64)
        };

        SkillOverlap {
            jd_skills,
            matched,
            missing,
            percent,
        }
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn default_matcher() -> SkillMatcher {
        SkillMatcher::new(&ScoringConfig::default().skill_keywords).unwrap()
    }

    #[test]
    fn test_finds_skills_in_text() {
        let matcher = default_matcher();
        let skills = matcher.skills_in("built services with python and docker on aws");
        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
        assert!(skills.contains("aws"));
        assert!(!skills.contains("kubernetes"));
    }

    #[test]
    fn test_substring_semantics_are_preserved() {
        let matcher = default_matcher();
        // "api" is contained in "rapid" - intentional containment behavior
        assert!(matcher.skills_in("rapid prototyping").contains("api"));
        // both "fastapi" and its substring "api" are reported independently
        let skills = matcher.skills_in("rest services in fastapi");
        assert!(skills.contains("fastapi"));
        assert!(skills.contains("api"));
    }

    #[test]
    fn test_overlap_worked_example() {
        let matcher = default_matcher();
        let jd = "python, docker, kubernetes experience required";
        let resume = "built apps with python and docker";

        let overlap = matcher.overlap(jd, resume);

        let jd_skills: Vec<&str> = overlap.jd_skills.iter().map(|s| s.as_str()).collect();
        assert_eq!(jd_skills, vec!["docker", "kubernetes", "python"]);
        let matched: Vec<&str> = overlap.matched.iter().map(|s| s.as_str()).collect();
        assert_eq!(matched, vec!["docker", "python"]);
        let missing: Vec<&str> = overlap.missing.iter().map(|s| s.as_str()).collect();
        assert_eq!(missing, vec!["kubernetes"]);
        assert_eq!(overlap.percent, 66.67);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let matcher = default_matcher();
        let overlap = matcher.overlap("we need a friendly colleague", "python docker");
        assert!(overlap.jd_skills.is_empty());
        assert_eq!(overlap.percent, 0.0);
    }

    #[test]
    fn test_matched_and_missing_partition_jd_skills() {
        let matcher = default_matcher();
        let overlap = matcher.overlap(
            "python, tensorflow, kubernetes, mlops and gitlab ci/cd",
            "python and tensorflow models shipped via gitlab",
        );

        assert!(overlap.matched.is_disjoint(&overlap.missing));
        let union: BTreeSet<String> = overlap.matched.union(&overlap.missing).cloned().collect();
        assert_eq!(union, overlap.jd_skills);
    }
}
