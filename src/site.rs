//! Build-time site content: owner copy, skills, contact and tuning knobs.

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, ProjectId};
use crate::fade::FadeWindow;
use crate::motion::MotionTimings;

const EMBEDDED_SITE: &str = include_str!("../config/site.json");
const EMBEDDED_PROJECTS: &str = include_str!("../config/projects.json");

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("malformed site configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("project id {0} appears more than once")]
    DuplicateProjectId(ProjectId),
    #[error("project {0} has an empty title")]
    EmptyTitle(ProjectId),
    #[error("project {project} has a gallery viewport with {found} items, expected {expected}")]
    GalleryShape {
        project: ProjectId,
        expected: usize,
        found: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub headline: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Contact {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub intro: String,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
    #[serde(default)]
    pub snap_sections: bool,
    #[serde(default)]
    pub fade: FadeWindow,
    #[serde(default)]
    pub motion: MotionTimings,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.fade = config.fade.or_default();
        config.motion = config.motion.bounded();
        Ok(config)
    }
}

/// Everything the page renders, decoded once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
}

impl Site {
    pub fn from_json(site: &str, projects: &str) -> Result<Self, SiteError> {
        Ok(Self {
            config: SiteConfig::from_json(site)?,
            catalog: Catalog::from_json(projects)?,
        })
    }

    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_json(EMBEDDED_SITE, EMBEDDED_PROJECTS)
    }

    /// Keeps the site copy when only the project list is broken.
    pub fn from_json_or_fallback(site: &str, projects: &str) -> (Self, Option<SiteError>) {
        match Self::from_json(site, projects) {
            Ok(decoded) => (decoded, None),
            Err(error) => {
                let fallback = Self {
                    config: SiteConfig::from_json(site).unwrap_or_default(),
                    catalog: Catalog::default(),
                };
                (fallback, Some(error))
            }
        }
    }

    pub fn embedded_or_fallback() -> (Self, Option<SiteError>) {
        Self::from_json_or_fallback(EMBEDDED_SITE, EMBEDDED_PROJECTS)
    }
}
