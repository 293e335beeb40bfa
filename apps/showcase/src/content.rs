//! Scene content: everything the showcase renders, loaded from JSON.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use vitrine_core::ViewportClass;

/// Default content baked into the binary.
pub const DEFAULT_CONTENT: &str = include_str!("../content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneContent {
    pub reveal_phrases: RevealPhrases,
    pub rotation: Vec<RotatingEntry>,
    pub skill_rows: Vec<SkillRow>,
    pub panels: Vec<Panel>,
    pub contact_links: Vec<ContactLink>,
}

/// Hero phrases differ by viewport class: narrow screens break the line.
#[derive(Debug, Clone, Deserialize)]
pub struct RevealPhrases {
    pub narrow: Vec<String>,
    pub wide: Vec<String>,
}

/// One entry of the click-to-cycle highlight panel.
#[derive(Debug, Clone, Deserialize)]
pub struct RotatingEntry {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillRow {
    pub label: String,
    pub skills: Vec<String>,
}

/// A carousel panel. Panels without a URL render but never navigate.
#[derive(Debug, Clone, Deserialize)]
pub struct Panel {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl SceneContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Ok(serde_json::from_str(DEFAULT_CONTENT)?)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }

    pub fn phrases_for(&self, class: ViewportClass) -> &[String] {
        match class {
            ViewportClass::Narrow => &self.reveal_phrases.narrow,
            ViewportClass::Wide => &self.reveal_phrases.wide,
        }
    }
}
