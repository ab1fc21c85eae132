use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Built-in content used when `PROFILE_PATH` is not set.
const DEFAULT_PROFILE: &str = include_str!("../../content/profile.json");

/// Everything the page renders about its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub location: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub organization: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub stack: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub issued: String,
    #[serde(default)]
    pub verify_url: Option<String>,
}

impl Profile {
    /// Loads the profile from `path`, or the built-in document when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read profile at {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid profile document at {}", path.display()))
            }
            None => Self::from_json(DEFAULT_PROFILE).context("Built-in profile is invalid"),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(raw)?;
        anyhow::ensure!(!profile.name.trim().is_empty(), "profile name is empty");
        anyhow::ensure!(!profile.email.trim().is_empty(), "profile email is empty");
        Ok(profile)
    }
}
