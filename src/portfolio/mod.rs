//! Portfolio data store
//!
//! Holds everything the chat can talk about: profile text, skills, projects and
//! contact details. The data is either compiled in ([`Portfolio::builtin`]) or
//! loaded once at startup from a TOML file, and is read-only afterwards.
//!
//! # Example Portfolio File
//!
//! ```toml
//! skills = ["Rust", "Tokio"]
//!
//! [profile]
//! name = "Jane Doe"
//! title = "Backend Engineer"
//! bio = "I build services."
//!
//! [[projects]]
//! name = "Link Shortener"
//! description = "A tiny URL shortener."
//! tech = ["Rust", "SQLite"]
//! link = "https://github.com/janedoe/shorty"
//! demo = "https://shorty.example.com"
//!
//! [contact]
//! email = "jane@example.com"
//! github = "https://github.com/janedoe"
//! linkedin = "https://linkedin.com/in/janedoe"
//! phone = "+1 555 0100"
//! ```

mod builtin;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Who the portfolio belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
}

impl Profile {
    /// First word of the name, used in the welcome message
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A single skill, listed in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skill(String);

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,

    /// Technology tags, in display order
    #[serde(default)]
    pub tech: Vec<String>,

    /// Source code URL
    pub link: String,

    /// Live demo URL
    pub demo: String,
}

/// How to get in touch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,

    /// Source repository profile URL
    pub github: String,

    /// Professional network profile URL
    pub linkedin: String,

    pub phone: String,
}

/// The complete, immutable portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    profile: Profile,

    #[serde(default)]
    skills: Vec<Skill>,

    #[serde(default)]
    projects: Vec<Project>,

    contact: ContactInfo,
}

impl Portfolio {
    /// The compiled-in portfolio
    pub fn builtin() -> Self {
        builtin::portfolio()
    }

    /// Load a portfolio from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PortfolioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a portfolio from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio = toml::from_str(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        if self.profile.name.trim().is_empty() {
            return Err(PortfolioError::Validation(
                "profile.name must not be empty".into(),
            ));
        }

        if let Some(index) = self.projects.iter().position(|p| p.name.trim().is_empty()) {
            return Err(PortfolioError::Validation(format!(
                "projects[{}].name must not be empty",
                index
            )));
        }

        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

/// Portfolio loading errors
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PORTFOLIO: &str = r#"
skills = ["Rust", "Tokio", "PostgreSQL"]

[profile]
name = "Jane Doe"
title = "Backend Engineer"
bio = "I build reliable services."

[[projects]]
name = "Link Shortener"
description = "A tiny URL shortener."
tech = ["Rust", "SQLite"]
link = "https://github.com/janedoe/shorty"
demo = "https://shorty.example.com"

[[projects]]
name = "Metrics Relay"
description = "Forwards StatsD packets."
link = "https://github.com/janedoe/relay"
demo = "https://relay.example.com"

[contact]
email = "jane@example.com"
github = "https://github.com/janedoe"
linkedin = "https://linkedin.com/in/janedoe"
phone = "+1 555 0100"
"#;

    #[test]
    fn test_parse_portfolio() {
        let portfolio = Portfolio::from_str(SAMPLE_PORTFOLIO).unwrap();

        assert_eq!(portfolio.profile().name, "Jane Doe");
        assert_eq!(portfolio.profile().first_name(), "Jane");

        let skills: Vec<&str> = portfolio.skills().iter().map(Skill::name).collect();
        assert_eq!(skills, vec!["Rust", "Tokio", "PostgreSQL"]);

        assert_eq!(portfolio.projects().len(), 2);
        assert_eq!(portfolio.projects()[0].name, "Link Shortener");
        assert_eq!(portfolio.projects()[0].tech, vec!["Rust", "SQLite"]);
        assert!(portfolio.projects()[1].tech.is_empty());

        assert_eq!(portfolio.contact().email, "jane@example.com");
    }

    #[test]
    fn test_empty_name_rejected() {
        let content = SAMPLE_PORTFOLIO.replace("name = \"Jane Doe\"", "name = \"  \"");
        let err = Portfolio::from_str(&content).unwrap_err();
        assert!(matches!(err, PortfolioError::Validation(_)));
    }

    #[test]
    fn test_empty_project_name_rejected() {
        let content = SAMPLE_PORTFOLIO.replace("name = \"Metrics Relay\"", "name = \"\"");
        let err = Portfolio::from_str(&content).unwrap_err();
        assert!(err.to_string().contains("projects[1]"));
    }

    #[test]
    fn test_missing_contact_is_parse_error() {
        let content = r#"
[profile]
name = "Jane"
title = "Dev"
bio = "Hi"
"#;
        let err = Portfolio::from_str(content).unwrap_err();
        assert!(matches!(err, PortfolioError::Toml(_)));
    }

    #[test]
    fn test_builtin_is_complete() {
        let portfolio = Portfolio::builtin();
        assert!(!portfolio.profile().name.is_empty());
        assert!(!portfolio.skills().is_empty());
        assert!(!portfolio.projects().is_empty());
        assert!(portfolio.validate().is_ok());
    }

    #[test]
    fn test_builtin_projects_in_display_order() {
        let portfolio = Portfolio::builtin();
        let names: Vec<&str> = portfolio.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Uber Clone",
                "Restroom Finder",
                "3D Animated Website Clone",
                "Blog Platform (Appwrite)",
            ]
        );

        let uber = &portfolio.projects()[0];
        assert!(uber.description.starts_with("Developed a full-featured Uber clone"));
        assert!(uber.description.ends_with("using Google Maps API."));
        assert_eq!(uber.tech, vec!["React", "Node.js", "MongoDB", "Google Maps API"]);

        let blog = &portfolio.projects()[3];
        assert!(blog.description.ends_with("(UI still in progress)."));
    }
}
