//! Keyword based response resolver
//!
//! Maps free text to a categorized reply. The input is lower-cased and checked
//! against an ordered rule table; the first rule with a matching keyword wins,
//! and input that matches nothing gets the fallback reply.
//!
//! The resolver is pure: no I/O, no logging, no randomness. The same input
//! always produces the same reply.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::config::replies::{self, builtin};
use crate::portfolio::{ContactInfo, Portfolio, Project, Skill};

/// How the renderer should present a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyCategory {
    Plain,
    Skills,
    Projects,
    Contact,
}

/// Which rule produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Greeting,
    About,
    Skills,
    Projects,
    Contact,
    Experience,
    Fallback,
}

/// Contact details shown in the chat. The phone number is left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactCard<'a> {
    pub email: &'a str,
    pub github: &'a str,
    pub linkedin: &'a str,
}

impl<'a> From<&'a ContactInfo> for ContactCard<'a> {
    fn from(contact: &'a ContactInfo) -> Self {
        Self {
            email: &contact.email,
            github: &contact.github,
            linkedin: &contact.linkedin,
        }
    }
}

/// Portfolio data attached to a non-plain reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyPayload<'a> {
    Skills(&'a [Skill]),
    Projects(&'a [Project]),
    Contact(ContactCard<'a>),
}

impl<'a> ReplyPayload<'a> {
    /// Payload a renderer needs for a reply of the given category
    pub fn for_category(category: ReplyCategory, portfolio: &'a Portfolio) -> Option<Self> {
        match category {
            ReplyCategory::Plain => None,
            ReplyCategory::Skills => Some(ReplyPayload::Skills(portfolio.skills())),
            ReplyCategory::Projects => Some(ReplyPayload::Projects(portfolio.projects())),
            ReplyCategory::Contact => Some(ReplyPayload::Contact(portfolio.contact().into())),
        }
    }

    pub fn category(&self) -> ReplyCategory {
        match self {
            ReplyPayload::Skills(_) => ReplyCategory::Skills,
            ReplyPayload::Projects(_) => ReplyCategory::Projects,
            ReplyPayload::Contact(_) => ReplyCategory::Contact,
        }
    }
}

/// Output of [`Resolver::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReply<'a> {
    pub text: String,
    pub category: ReplyCategory,
    pub topic: Topic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ReplyPayload<'a>>,
}

impl<'a> ResolvedReply<'a> {
    fn new(topic: Topic, text: String, payload: Option<ReplyPayload<'a>>) -> Self {
        let category = payload
            .as_ref()
            .map_or(ReplyCategory::Plain, ReplyPayload::category);

        Self {
            text,
            category,
            topic,
            payload,
        }
    }
}

/// Keyword matching strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Keyword may appear anywhere, even inside another word ("hi" in "history")
    #[default]
    Substring,
    /// Keyword must be bounded by non-alphanumeric characters or the ends of the input
    Word,
}

impl MatchMode {
    fn matches(self, haystack: &str, keyword: &str) -> bool {
        match self {
            MatchMode::Substring => haystack.contains(keyword),
            MatchMode::Word => haystack.match_indices(keyword).any(|(start, _)| {
                let before = haystack[..start].chars().next_back();
                let after = haystack[start + keyword.len()..].chars().next();
                !before.map_or(false, char::is_alphanumeric)
                    && !after.map_or(false, char::is_alphanumeric)
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown match mode: {0} (expected \"substring\" or \"word\")")]
pub struct UnknownMatchMode(String);

impl FromStr for MatchMode {
    type Err = UnknownMatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word" | "whole_word" => Ok(MatchMode::Word),
            other => Err(UnknownMatchMode(other.to_string())),
        }
    }
}

type Builder = for<'a> fn(&'a Portfolio) -> (String, Option<ReplyPayload<'a>>);

/// One entry of the rule table
struct Rule {
    topic: Topic,
    /// Lowercase keywords; plural forms are listed for word matching
    keywords: &'static [&'static str],
    build: Builder,
}

/// Evaluated top to bottom, first match wins
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey"],
        build: greeting,
    },
    Rule {
        topic: Topic::About,
        keywords: &["about", "who are you", "tell me about yourself"],
        build: about,
    },
    Rule {
        topic: Topic::Skills,
        keywords: &["skill", "skills", "technology", "technologies", "tech stack"],
        build: skills,
    },
    Rule {
        topic: Topic::Projects,
        keywords: &["project", "projects", "work", "portfolio"],
        build: projects,
    },
    Rule {
        topic: Topic::Contact,
        keywords: &["contact", "reach", "email", "hire"],
        build: contact,
    },
    Rule {
        topic: Topic::Experience,
        keywords: &["experience", "background"],
        build: experience,
    },
];

fn greeting(_: &Portfolio) -> (String, Option<ReplyPayload<'_>>) {
    (builtin::GREETING.to_string(), None)
}

fn about(portfolio: &Portfolio) -> (String, Option<ReplyPayload<'_>>) {
    (replies::about(portfolio.profile()), None)
}

fn skills(portfolio: &Portfolio) -> (String, Option<ReplyPayload<'_>>) {
    (
        replies::skills(portfolio.skills()),
        ReplyPayload::for_category(ReplyCategory::Skills, portfolio),
    )
}

fn projects(portfolio: &Portfolio) -> (String, Option<ReplyPayload<'_>>) {
    (
        builtin::PROJECTS_INTRO.to_string(),
        ReplyPayload::for_category(ReplyCategory::Projects, portfolio),
    )
}

fn contact(portfolio: &Portfolio) -> (String, Option<ReplyPayload<'_>>) {
    (
        builtin::CONTACT_INTRO.to_string(),
        ReplyPayload::for_category(ReplyCategory::Contact, portfolio),
    )
}

fn experience(_: &Portfolio) -> (String, Option<ReplyPayload<'_>>) {
    (builtin::EXPERIENCE.to_string(), None)
}

/// Stateless keyword resolver over a shared portfolio
#[derive(Debug, Clone)]
pub struct Resolver {
    portfolio: Arc<Portfolio>,
    mode: MatchMode,
}

impl Resolver {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            portfolio,
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Resolve free text to a reply. Never fails; unmatched input gets the fallback.
    pub fn resolve(&self, input: &str) -> ResolvedReply<'_> {
        let normalized = input.to_lowercase();

        let rule = RULES.iter().find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| self.mode.matches(&normalized, keyword))
        });

        match rule {
            Some(rule) => {
                let (text, payload) = (rule.build)(&self.portfolio);
                ResolvedReply::new(rule.topic, text, payload)
            }
            None => ResolvedReply::new(Topic::Fallback, builtin::FALLBACK.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new(Arc::new(Portfolio::builtin()))
    }

    #[test]
    fn test_fallback_for_unmatched_input() {
        let resolver = resolver();
        for input in ["xyz123", "", "   ", "🦀🦀🦀", "qwerty"] {
            let reply = resolver.resolve(input);
            assert_eq!(reply.topic, Topic::Fallback, "input: {:?}", input);
            assert_eq!(reply.category, ReplyCategory::Plain);
            assert_eq!(reply.text, builtin::FALLBACK);
            assert!(reply.payload.is_none());
        }
    }

    #[test]
    fn test_greeting_is_case_insensitive() {
        let resolver = resolver();
        for input in ["hello", "Hi there", "HEY"] {
            let reply = resolver.resolve(input);
            assert_eq!(reply.topic, Topic::Greeting, "input: {:?}", input);
            assert_eq!(reply.category, ReplyCategory::Plain);
            assert_eq!(reply.text, builtin::GREETING);
        }
    }

    #[test]
    fn test_about_interpolates_profile() {
        let resolver = resolver();
        let reply = resolver.resolve("Tell me about yourself");
        let profile = resolver.portfolio().profile();

        assert_eq!(reply.topic, Topic::About);
        assert_eq!(reply.category, ReplyCategory::Plain);
        assert!(reply.text.contains(&profile.name));
        assert!(reply.text.contains(&profile.title));
        assert!(reply.text.contains(&profile.bio));
    }

    #[test]
    fn test_skills_reference_every_skill_in_order() {
        let resolver = resolver();
        let reply = resolver.resolve("what are your skills?");
        let skills = resolver.portfolio().skills();

        assert_eq!(reply.category, ReplyCategory::Skills);
        assert_eq!(reply.payload, Some(ReplyPayload::Skills(skills)));

        let mut cursor = 0;
        for skill in skills {
            let bullet = format!("• {}", skill.name());
            let offset = reply.text[cursor..]
                .find(&bullet)
                .unwrap_or_else(|| panic!("{} missing or out of order", skill.name()));
            cursor += offset + bullet.len();
        }
    }

    #[test]
    fn test_projects_reference_every_project_in_order() {
        let resolver = resolver();
        let reply = resolver.resolve("show me your projects");

        assert_eq!(reply.category, ReplyCategory::Projects);
        assert_eq!(reply.text, builtin::PROJECTS_INTRO);
        match reply.payload {
            Some(ReplyPayload::Projects(projects)) => {
                let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
                let expected: Vec<&str> = resolver
                    .portfolio()
                    .projects()
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect();
                assert_eq!(names, expected);
            }
            other => panic!("expected projects payload, got {:?}", other),
        }
    }

    #[test]
    fn test_contact_references_exact_fields() {
        let resolver = resolver();
        let reply = resolver.resolve("how can I reach you");
        let contact = resolver.portfolio().contact();

        assert_eq!(reply.category, ReplyCategory::Contact);
        assert_eq!(
            reply.payload,
            Some(ReplyPayload::Contact(ContactCard {
                email: &contact.email,
                github: &contact.github,
                linkedin: &contact.linkedin,
            }))
        );

        let json = serde_json::to_value(&reply).unwrap();
        let card = json["payload"]["contact"].as_object().unwrap();
        assert_eq!(card.len(), 3);
        assert!(!json.to_string().contains(&contact.phone));
    }

    #[test]
    fn test_experience_narrative() {
        let resolver = resolver();
        let reply = resolver.resolve("Tell your previous experience");
        assert_eq!(reply.topic, Topic::Experience);
        assert_eq!(reply.text, builtin::EXPERIENCE);
    }

    #[test]
    fn test_first_match_wins() {
        let resolver = resolver();

        let reply = resolver.resolve("hi, what are your skills");
        assert_eq!(reply.topic, Topic::Greeting);
        assert_eq!(reply.category, ReplyCategory::Plain);

        // skills outranks projects
        let reply = resolver.resolve("what technology does the project use");
        assert_eq!(reply.topic, Topic::Skills);

        // about outranks contact and experience
        let reply = resolver.resolve("email me about your background");
        assert_eq!(reply.topic, Topic::About);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = resolver();
        for input in ["what are your skills?", "show me your projects", "random"] {
            let first = resolver.resolve(input);
            let second = resolver.resolve(input);
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        let resolver = resolver();
        let reply = resolver.resolve("tell me your history");
        assert_eq!(reply.topic, Topic::Greeting);
    }

    #[test]
    fn test_word_mode_requires_boundaries() {
        let resolver = resolver().with_mode(MatchMode::Word);

        assert_eq!(resolver.resolve("history").topic, Topic::Fallback);
        assert_eq!(resolver.resolve("Hi there").topic, Topic::Greeting);
        assert_eq!(resolver.resolve("hi!").topic, Topic::Greeting);
        assert_eq!(resolver.resolve("what are your skills?").topic, Topic::Skills);
        assert_eq!(resolver.resolve("show me your projects").topic, Topic::Projects);
        assert_eq!(resolver.resolve("who are you?").topic, Topic::About);
        assert_eq!(resolver.resolve("homework").topic, Topic::Fallback);
    }

    #[test]
    fn test_category_matches_payload() {
        let resolver = resolver();
        for input in ["hello", "about", "skills", "projects", "contact", "experience", "??"] {
            let reply = resolver.resolve(input);
            assert_eq!(
                reply.payload.as_ref().map(ReplyPayload::category),
                Some(reply.category).filter(|c| *c != ReplyCategory::Plain),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_match_mode_from_str() {
        assert_eq!("substring".parse::<MatchMode>().unwrap(), MatchMode::Substring);
        assert_eq!(" WORD ".parse::<MatchMode>().unwrap(), MatchMode::Word);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }

    #[test]
    fn test_plain_category_has_no_payload() {
        let portfolio = Portfolio::builtin();
        assert!(ReplyPayload::for_category(ReplyCategory::Plain, &portfolio).is_none());
        assert_eq!(
            ReplyPayload::for_category(ReplyCategory::Skills, &portfolio)
                .map(|p| p.category()),
            Some(ReplyCategory::Skills)
        );
    }
}
