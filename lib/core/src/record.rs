use serde::{Deserialize, Serialize};

/// One founder profile, the corpus's atomic unit.
///
/// Field shape matches the dataset columns one-to-one. The corpus is
/// immutable after load, so records are plain owned data with no interior
/// mutability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Founder {
    /// Opaque unique identifier, primary key
    pub id: String,
    /// Full name (dataset column `founder_name`)
    #[serde(rename = "founder_name")]
    pub name: String,
    pub email: String,
    /// One of a small fixed set: Founder, Co-founder, Engineer, PM, Investor, Other
    pub role: String,
    pub company: String,
    /// Free text, usually a "City, Country" pair
    pub location: String,
    pub idea: String,
    /// Free-text biography
    pub about: String,
    /// Comma-separated free-text tags
    pub keywords: String,
    /// Funding stage, may be "none"
    pub stage: String,
    pub linkedin: String,
    /// Optional free text; empty dataset cells deserialize to `None`
    #[serde(default)]
    pub notes: Option<String>,
}

impl Founder {
    /// Comma-split, trimmed keyword tags. Empty tokens are dropped so they
    /// can never trivially match as substrings.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// Location split on `", "` into its city/country parts.
    pub fn location_parts(&self) -> Vec<&str> {
        self.location.split(", ").collect()
    }

    /// Domain part of the email address, if present.
    pub fn email_domain(&self) -> Option<&str> {
        self.email.split('@').nth(1).filter(|d| !d.is_empty())
    }

    /// Canonical text representation used for embedding.
    ///
    /// Field order and labels are fixed: they affect embedding semantics and
    /// must match between indexing and any re-derivation.
    pub fn document(&self) -> String {
        format!(
            "Founder: {} | Role: {} | Company: {} | Location: {} | Stage: {} | Keywords: {} | Idea: {} | About: {}",
            self.name,
            self.role,
            self.company,
            self.location,
            self.stage,
            self.keywords,
            self.idea,
            self.about,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Founder {
        Founder {
            id: "f-1".to_string(),
            name: "Ada Chen".to_string(),
            email: "ada@finlend.io".to_string(),
            role: "Founder".to_string(),
            company: "FinLend".to_string(),
            location: "Berlin, Germany".to_string(),
            idea: "Peer-to-peer lending platform for underserved markets".to_string(),
            about: "Former Google engineer with expertise in machine learning, fundraising."
                .to_string(),
            keywords: "fintech, AI, marketplace".to_string(),
            stage: "seed".to_string(),
            linkedin: "https://linkedin.com/in/ada-chen-123".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_keyword_list_trims_and_drops_empty() {
        let mut founder = sample();
        founder.keywords = " fintech , AI,, edtech ,".to_string();
        assert_eq!(founder.keyword_list(), vec!["fintech", "AI", "edtech"]);

        founder.keywords = String::new();
        assert!(founder.keyword_list().is_empty());
    }

    #[test]
    fn test_location_parts() {
        let founder = sample();
        assert_eq!(founder.location_parts(), vec!["Berlin", "Germany"]);
    }

    #[test]
    fn test_email_domain() {
        let mut founder = sample();
        assert_eq!(founder.email_domain(), Some("finlend.io"));

        founder.email = "broken-address".to_string();
        assert_eq!(founder.email_domain(), None);
    }

    #[test]
    fn test_document_uses_fixed_labels_and_order() {
        let doc = sample().document();
        assert!(doc.starts_with("Founder: Ada Chen | Role: Founder | Company: FinLend"));
        let positions: Vec<usize> = [
            "Founder:", "Role:", "Company:", "Location:", "Stage:", "Keywords:", "Idea:",
            "About:",
        ]
        .iter()
        .map(|label| doc.find(label).expect("label missing"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
