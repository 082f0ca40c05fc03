//! Corpus-wide statistics and text-mined diversity metrics.
//!
//! Everything here is computed fresh from the immutable corpus on each call;
//! nothing is cached. The phrase mining over `about` biographies is heuristic
//! substring/regex extraction and is reported as best-effort signal, not
//! ground truth.

use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use scoutx_core::Corpus;

pub const DEFAULT_TOP_N: usize = 15;

/// How many achievement phrases the snapshot samples
const ACHIEVEMENT_SAMPLE: usize = 10;

/// Plausible-length bounds for mined phrases, in characters
const BACKGROUND_MIN: usize = 3;
const BACKGROUND_MAX: usize = 29;
const SKILL_MIN: usize = 4;
const SKILL_MAX: usize = 39;

/// Fixed keyword tag to industry category rollup. Tags missing from the
/// table simply do not contribute to the industry distribution.
const INDUSTRY_TABLE: &[(&str, &str)] = &[
    ("healthtech", "Healthcare"),
    ("biotech", "Healthcare"),
    ("fitness", "Healthcare"),
    ("fintech", "Finance"),
    ("blockchain", "Finance"),
    ("edtech", "Education"),
    ("ai", "AI & Data"),
    ("analytics", "AI & Data"),
    ("automation", "AI & Data"),
    ("robotics", "AI & Data"),
    ("saas", "Enterprise Software"),
    ("cloud", "Enterprise Software"),
    ("developer tools", "Enterprise Software"),
    ("productivity", "Enterprise Software"),
    ("cybersecurity", "Security"),
    ("e-commerce", "Commerce & Retail"),
    ("marketplace", "Commerce & Retail"),
    ("retail", "Commerce & Retail"),
    ("fashion", "Commerce & Retail"),
    ("beauty", "Commerce & Retail"),
    ("cleantech", "Climate & Energy"),
    ("energy", "Climate & Energy"),
    ("agriculture", "Climate & Energy"),
    ("gaming", "Media & Entertainment"),
    ("social", "Media & Entertainment"),
    ("vr", "Media & Entertainment"),
    ("ar", "Media & Entertainment"),
    ("adtech", "Media & Entertainment"),
    ("iot", "Hardware & IoT"),
    ("mobile", "Consumer"),
    ("travel", "Consumer"),
    ("foodtech", "Consumer"),
    ("proptech", "Real Estate"),
    ("logistics", "Logistics"),
];

/// One value with its occurrence count, for ordered frequency tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountedValue {
    pub value: String,
    pub count: usize,
}

/// Cardinalities of the mined diversity dimensions
#[derive(Debug, Clone, Serialize)]
pub struct DiversityScore {
    pub backgrounds: usize,
    pub skills: usize,
    pub industries: usize,
    pub email_domains: usize,
    pub locations: usize,
}

/// Point-in-time aggregate over the corpus
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_founders: usize,
    pub unique_companies: usize,
    pub unique_locations: usize,
    pub roles: HashMap<String, usize>,
    pub stages: HashMap<String, usize>,
    pub top_keywords: Vec<CountedValue>,
    pub unique_keywords: usize,
    pub top_backgrounds: Vec<CountedValue>,
    pub top_skills: Vec<CountedValue>,
    pub sample_achievements: Vec<String>,
    pub industries: HashMap<String, usize>,
    pub unique_email_domains: usize,
    pub diversity: DiversityScore,
}

/// Compute a fresh snapshot over the whole corpus.
pub fn compute_stats(corpus: &Corpus, top_n: usize) -> StatsSnapshot {
    let mut companies = HashSet::new();
    let mut locations = HashSet::new();
    let mut email_domains = HashSet::new();
    let mut roles: HashMap<String, usize> = HashMap::new();
    let mut stages: HashMap<String, usize> = HashMap::new();
    let mut keyword_counts: HashMap<String, usize> = HashMap::new();

    for (_, founder) in corpus.iter() {
        companies.insert(founder.company.clone());
        locations.insert(founder.location.clone());
        if let Some(domain) = founder.email_domain() {
            email_domains.insert(domain.to_string());
        }
        *roles.entry(founder.role.clone()).or_insert(0) += 1;
        *stages.entry(founder.stage.clone()).or_insert(0) += 1;
        for keyword in founder.keyword_list() {
            *keyword_counts.entry(keyword.to_string()).or_insert(0) += 1;
        }
    }

    let background_counts = mine_backgrounds(corpus);
    let skill_counts = mine_skills(corpus);
    let sample_achievements = mine_achievements(corpus);
    let industries = industry_rollup(&keyword_counts);

    let diversity = DiversityScore {
        backgrounds: background_counts.len(),
        skills: skill_counts.len(),
        industries: industries.len(),
        email_domains: email_domains.len(),
        locations: locations.len(),
    };

    StatsSnapshot {
        total_founders: corpus.len(),
        unique_companies: companies.len(),
        unique_locations: locations.len(),
        roles,
        stages,
        unique_keywords: keyword_counts.len(),
        top_keywords: top_counted(keyword_counts, top_n),
        top_backgrounds: top_counted(background_counts, top_n),
        top_skills: top_counted(skill_counts, top_n),
        sample_achievements,
        industries,
        unique_email_domains: email_domains.len(),
        diversity,
    }
}

/// Phrases like "Former Google engineer" / "Ex-McKinsey consultant": the
/// capitalized phrase between the marker and a role noun.
fn mine_backgrounds(corpus: &Corpus) -> HashMap<String, usize> {
    let Ok(pattern) = Regex::new(
        r"(?:Former\s+|Ex-)([A-Z][A-Za-z&'. ]{0,40}?)\s+(?:engineer|consultant|manager|executive|designer|researcher|analyst|scientist|associate|banker|advisor|lead|PM)\b",
    ) else {
        return HashMap::new();
    };

    let mut counts = HashMap::new();
    for (_, founder) in corpus.iter() {
        for capture in pattern.captures_iter(&founder.about) {
            let phrase = capture[1].trim().to_string();
            if (BACKGROUND_MIN..=BACKGROUND_MAX).contains(&phrase.len()) {
                *counts.entry(phrase).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Comma-split phrases following "expertise in", up to the sentence end.
fn mine_skills(corpus: &Corpus) -> HashMap<String, usize> {
    let Ok(pattern) = Regex::new(r"expertise in ([^.]+)") else {
        return HashMap::new();
    };

    let mut counts = HashMap::new();
    for (_, founder) in corpus.iter() {
        for capture in pattern.captures_iter(&founder.about) {
            for skill in capture[1].split(',') {
                let skill = skill.trim();
                if (SKILL_MIN..=SKILL_MAX).contains(&skill.len()) {
                    *counts.entry(skill.to_string()).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}

/// Outcome phrases following "Previously", capped to a small sample.
fn mine_achievements(corpus: &Corpus) -> Vec<String> {
    let Ok(pattern) = Regex::new(r"Previously ([^.]+)") else {
        return Vec::new();
    };

    let mut achievements = Vec::new();
    for (_, founder) in corpus.iter() {
        for capture in pattern.captures_iter(&founder.about) {
            if achievements.len() == ACHIEVEMENT_SAMPLE {
                return achievements;
            }
            achievements.push(capture[1].trim().to_string());
        }
    }
    achievements
}

fn industry_rollup(keyword_counts: &HashMap<String, usize>) -> HashMap<String, usize> {
    let mut industries = HashMap::new();
    for (keyword, count) in keyword_counts {
        let category = INDUSTRY_TABLE
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(keyword))
            .map(|(_, category)| *category);
        if let Some(category) = category {
            *industries.entry(category.to_string()).or_insert(0) += count;
        }
    }
    industries
}

fn top_counted(counts: HashMap<String, usize>, n: usize) -> Vec<CountedValue> {
    let mut entries: Vec<CountedValue> = counts
        .into_iter()
        .map(|(value, count)| CountedValue { value, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutx_core::Founder;

    fn founder(id: &str, role: &str, keywords: &str, about: &str, email: &str) -> Founder {
        Founder {
            id: id.to_string(),
            name: format!("Founder {}", id),
            email: email.to_string(),
            role: role.to_string(),
            company: format!("Company {}", id),
            location: "Berlin, Germany".to_string(),
            idea: "idea".to_string(),
            about: about.to_string(),
            keywords: keywords.to_string(),
            stage: "seed".to_string(),
            linkedin: "https://linkedin.com/in/x".to_string(),
            notes: None,
        }
    }

    fn corpus() -> Corpus {
        Corpus::from_records(vec![
            founder(
                "a",
                "Founder",
                "fintech, AI",
                "Former Google engineer with expertise in machine learning, fundraising. \
                 Currently building Company a to revolutionize the fintech industry. \
                 Previously raised $2M seed round.",
                "a@finlend.io",
            ),
            founder(
                "b",
                "Engineer",
                "fintech, healthtech",
                "Ex-McKinsey consultant with expertise in financial modeling. \
                 Previously grew user base to 100K+.",
                "b@medly.ai",
            ),
            founder(
                "c",
                "Founder",
                "gaming",
                "Serial entrepreneur with expertise in game design, growth hacking.",
                "c@finlend.io",
            ),
        ])
    }

    #[test]
    fn test_counts_and_cardinalities() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);

        assert_eq!(stats.total_founders, 3);
        assert_eq!(stats.unique_companies, 3);
        assert_eq!(stats.unique_locations, 1);
        assert_eq!(stats.unique_email_domains, 2);
        assert_eq!(stats.roles.get("Founder"), Some(&2));
        assert_eq!(stats.roles.get("Engineer"), Some(&1));
        assert_eq!(stats.stages.get("seed"), Some(&3));
    }

    #[test]
    fn test_top_keywords_ordered_by_count() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);

        assert_eq!(stats.unique_keywords, 4);
        assert_eq!(stats.top_keywords[0].value, "fintech");
        assert_eq!(stats.top_keywords[0].count, 2);
        assert!(stats
            .top_keywords
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_top_n_truncation() {
        let stats = compute_stats(&corpus(), 2);
        assert_eq!(stats.top_keywords.len(), 2);
        // distinct count is unaffected by truncation
        assert_eq!(stats.unique_keywords, 4);
    }

    #[test]
    fn test_background_mining() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);
        let values: Vec<&str> = stats
            .top_backgrounds
            .iter()
            .map(|c| c.value.as_str())
            .collect();

        assert!(values.contains(&"Google"));
        assert!(values.contains(&"McKinsey"));
    }

    #[test]
    fn test_background_length_filter() {
        let corpus = Corpus::from_records(vec![founder(
            "x",
            "Founder",
            "fintech",
            "Former Extraordinarily Long Company Name Holdings engineer.",
            "x@example.com",
        )]);
        let stats = compute_stats(&corpus, DEFAULT_TOP_N);
        assert!(stats.top_backgrounds.is_empty());
    }

    #[test]
    fn test_skill_mining() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);
        let values: Vec<&str> = stats.top_skills.iter().map(|c| c.value.as_str()).collect();

        assert!(values.contains(&"machine learning"));
        assert!(values.contains(&"financial modeling"));
        assert!(values.contains(&"game design"));
        // sentence terminator bounds the capture
        assert!(!values.iter().any(|v| v.contains("Currently")));
    }

    #[test]
    fn test_achievement_mining_is_sampled() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);
        assert_eq!(
            stats.sample_achievements,
            vec!["raised $2M seed round", "grew user base to 100K+"]
        );

        let many = Corpus::from_records(
            (0..20)
                .map(|i| {
                    founder(
                        &format!("f{}", i),
                        "Founder",
                        "fintech",
                        "Previously achieved break-even in 18 months.",
                        "f@example.com",
                    )
                })
                .collect(),
        );
        let stats = compute_stats(&many, DEFAULT_TOP_N);
        assert_eq!(stats.sample_achievements.len(), ACHIEVEMENT_SAMPLE);
    }

    #[test]
    fn test_industry_rollup() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);

        // two founders tagged fintech, case-insensitive AI lookup
        assert_eq!(stats.industries.get("Finance"), Some(&2));
        assert_eq!(stats.industries.get("AI & Data"), Some(&1));
        assert_eq!(stats.industries.get("Healthcare"), Some(&1));
        assert_eq!(stats.industries.get("Media & Entertainment"), Some(&1));
    }

    #[test]
    fn test_diversity_cardinalities() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);

        assert_eq!(stats.diversity.backgrounds, 2);
        assert_eq!(stats.diversity.email_domains, 2);
        assert_eq!(stats.diversity.locations, 1);
        assert_eq!(stats.diversity.industries, stats.industries.len());
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = compute_stats(&corpus(), DEFAULT_TOP_N);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["total_founders"], 3);
        assert_eq!(json["top_keywords"][0]["value"], "fintech");
        assert!(json["diversity"]["email_domains"].is_number());
    }

    #[test]
    fn test_empty_corpus_snapshot() {
        let stats = compute_stats(&Corpus::from_records(Vec::new()), DEFAULT_TOP_N);

        assert_eq!(stats.total_founders, 0);
        assert!(stats.top_keywords.is_empty());
        assert!(stats.sample_achievements.is_empty());
        assert_eq!(stats.diversity.locations, 0);
    }
}
