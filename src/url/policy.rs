//! Closed-world URL admission policy
//!
//! A URL is admitted only when it matches one of the per-team inclusion rules
//! and none of the exclusion rules. Exclusions always win. Rules are compiled
//! once per crawl target and kept as a flat, named list so the policy can be
//! printed and tested on its own.

use crate::catalog::CrawlTarget;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Exclusion rules shared by every target: (name, pattern)
const EXCLUDE_RULES: &[(&str, &str)] = &[
    ("authentication", r"/(login|register)"),
    ("subscription", r"/subscribe"),
    ("advertising", r"/ads/"),
    ("search", r"/search\?"),
    ("asset", r"\.(pdf|jpe?g|png|gif|svg|css|js)(\?|$)"),
    ("video", r"/video/"),
    ("fantasy", r"/fantasy/"),
    ("betting", r"/betting/"),
];

/// A named, compiled match rule
#[derive(Debug, Clone)]
pub struct AdmissionRule {
    name: String,
    pattern: Regex,
}

impl AdmissionRule {
    fn compile(name: &str, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_match(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// Outcome of checking one URL against the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<'a> {
    /// Matched an exclusion rule (takes precedence over any inclusion)
    Excluded(&'a str),
    /// Matched an inclusion rule and no exclusion
    Included(&'a str),
    /// Matched nothing; closed-world default is rejection
    Unmatched,
}

impl Admission<'_> {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Included(_))
    }
}

impl fmt::Display for Admission<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excluded(rule) => write!(f, "excluded by '{}'", rule),
            Self::Included(rule) => write!(f, "included by '{}'", rule),
            Self::Unmatched => write!(f, "no matching rule"),
        }
    }
}

/// Per-target admission policy
#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    exclude: Vec<AdmissionRule>,
    include: Vec<AdmissionRule>,
}

impl AdmissionPolicy {
    /// Builds the rule set for one team
    ///
    /// Inclusion templates cover the team's main page and its roster,
    /// schedule, stats and news sub-pages in any URL layout that ends in
    /// `/{abbrev}/{slug}`, plus every player profile of the sport.
    pub fn for_target(target: &CrawlTarget) -> Result<Self, regex::Error> {
        let sport = regex::escape(&target.sport);
        let abbrev = regex::escape(&target.abbrev);
        let slug = regex::escape(&target.slug);

        let exclude = EXCLUDE_RULES
            .iter()
            .map(|(name, pattern)| AdmissionRule::compile(name, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let mut include = Vec::new();
        for section in ["roster", "schedule", "stats", "news"] {
            include.push(AdmissionRule::compile(
                section,
                &format!("/{sport}/team/{section}/.*/{abbrev}/{slug}"),
            )?);
        }
        include.push(AdmissionRule::compile(
            "team-page",
            &format!("/{sport}/team/.*/{abbrev}/{slug}"),
        )?);
        include.push(AdmissionRule::compile(
            "player-profile",
            &format!("/{sport}/player/"),
        )?);

        Ok(Self { exclude, include })
    }

    /// Classifies a URL, reporting which rule decided it
    pub fn decide(&self, url: &str) -> Admission<'_> {
        if let Some(rule) = self.exclude.iter().find(|r| r.is_match(url)) {
            return Admission::Excluded(rule.name());
        }

        match self.include.iter().find(|r| r.is_match(url)) {
            Some(rule) => Admission::Included(rule.name()),
            None => Admission::Unmatched,
        }
    }

    /// Returns true if the URL may be enqueued for this target
    pub fn admissible(&self, url: &str) -> bool {
        self.decide(url).is_admitted()
    }

    pub fn exclude_rules(&self) -> &[AdmissionRule] {
        &self.exclude
    }

    pub fn include_rules(&self) -> &[AdmissionRule] {
        &self.include
    }
}
