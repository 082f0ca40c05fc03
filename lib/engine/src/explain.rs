//! Two-tier match explanations.
//!
//! The generative path produces strictly better prose when a model is
//! configured and healthy; the deterministic fallback keeps explanations
//! available offline and keeps tests stable. Explaining never fails to the
//! caller.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use scoutx_core::{matcher, Founder};
use scoutx_embed::TextGenerator;

/// Produces a one-to-two sentence justification for a (query, record) match.
pub struct ExplanationGenerator {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl ExplanationGenerator {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Without a generative model every explanation comes from the fallback.
    pub fn deterministic(timeout: Duration) -> Self {
        Self::new(None, timeout)
    }

    /// Whether the generative path is configured
    pub fn is_generative(&self) -> bool {
        self.generator.is_some()
    }

    /// Explain why `founder` matched `query`.
    ///
    /// Any generative error, timeout, or empty completion degrades to the
    /// deterministic fallback; the caller always gets text.
    pub async fn explain(&self, query: &str, founder: &Founder, row_index: usize) -> String {
        if let Some(generator) = &self.generator {
            let prompt = build_prompt(query, founder);
            match tokio::time::timeout(self.timeout, generator.generate(&prompt)).await {
                Ok(Ok(text)) if !text.trim().is_empty() => return text.trim().to_string(),
                Ok(Ok(_)) => debug!("generative explanation was empty, using fallback"),
                Ok(Err(err)) => warn!(error = %err, "generative explanation failed, using fallback"),
                Err(_) => warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "generative explanation timed out, using fallback"
                ),
            }
        }
        fallback_explanation(query, founder, row_index)
    }
}

fn build_prompt(query: &str, founder: &Founder) -> String {
    format!(
        r#"Query: "{query}"

Founder Profile:
- Name: {name}
- Role: {role}
- Company: {company}
- Location: {location}
- Keywords: {keywords}
- About: {about}
- Idea: {idea}
- Stage: {stage}

Generate a concise 1-2 sentence explanation of why this founder matches the query.
Focus on the most relevant matching aspects. Start with "Matched on" and cite specific fields.

Example: "Matched on keywords: healthtech, AI and role: Founder with experience in building diagnostic platforms for early disease detection.""#,
        query = query,
        name = founder.name,
        role = founder.role,
        company = founder.company,
        location = founder.location,
        keywords = founder.keywords,
        about = founder.about,
        idea = founder.idea,
        stage = founder.stage,
    )
}

/// Deterministic explanation without external calls.
///
/// Builds one clause per matched field in fixed priority order (keywords,
/// role, location, stage), keeps the first two, and synthesizes a clause from
/// the first keyword and the role when nothing matched.
pub fn fallback_explanation(query: &str, founder: &Founder, row_index: usize) -> String {
    let query_lower = query.to_lowercase();
    let mut clauses: Vec<String> = Vec::new();

    let keywords = founder.keyword_list();
    let matching: Vec<&str> = keywords
        .iter()
        .copied()
        .filter(|k| query_lower.contains(&k.to_lowercase()))
        .collect();
    if !matching.is_empty() {
        let cited = &matching[..matching.len().min(2)];
        clauses.push(format!("keywords: {}", cited.join(", ")));
    }

    if !founder.role.is_empty() && query_lower.contains(&founder.role.to_lowercase()) {
        clauses.push(format!("role: {}", founder.role));
    }

    if !founder.location.is_empty() && matcher::location_matches(&query_lower, founder) {
        clauses.push(format!("location: {}", founder.location));
    }

    if !founder.stage.is_empty() && query_lower.contains(&founder.stage.to_lowercase()) {
        clauses.push(format!("stage: {}", founder.stage));
    }

    if clauses.is_empty() {
        let primary = keywords.first().copied().unwrap_or("technology");
        clauses.push(format!("expertise in {}, role: {}", primary, founder.role));
    }

    clauses.truncate(2);
    format!(
        "Matched on {} (row id: {})",
        clauses.join(" and "),
        row_index
    )
}
