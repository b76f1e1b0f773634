use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    #[default]
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }

    /// Unknown values fall back to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "frontend" => SkillCategory::Frontend,
            "backend" => SkillCategory::Backend,
            "database" => SkillCategory::Database,
            "tools" => SkillCategory::Tools,
            _ => SkillCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillListError {
    #[error("Skill names cannot be empty")]
    EmptyName,

    #[error("Duplicate skill: {0}")]
    Duplicate(String),
}

/// Trims every name and rejects blanks and case-insensitive duplicates.
/// The resulting order is the display order.
pub fn normalize_skill_names(names: Vec<String>) -> Result<Vec<String>, SkillListError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SkillListError::EmptyName);
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(SkillListError::Duplicate(name));
        }
        out.push(name);
    }

    Ok(out)
}
