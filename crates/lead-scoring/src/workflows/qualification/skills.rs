//! Rule-based skill list built from hashtags and keyword categories.

use super::domain::ProfileRecord;
use super::keywords::{contains_any, SKILL_CATEGORIES, SUPPLEMENTARY_SKILLS};

/// Maximum number of skills carried on any feature set.
pub const SKILL_LIMIT: usize = 10;

/// Hashtags first, then matched category names, then supplementary tokens,
/// deduplicated in insertion order and capped at [`SKILL_LIMIT`].
pub fn aggregate_skills(profile: &ProfileRecord) -> Vec<String> {
    let mut skills = SkillList::default();

    for hashtag in &profile.basic_info.creator_hashtags {
        skills.push(hashtag);
    }

    let text = skill_text(profile);

    for (category, triggers) in SKILL_CATEGORIES {
        if contains_any(&text, triggers) {
            skills.push(category);
        }
    }

    for token in SUPPLEMENTARY_SKILLS {
        if text.contains(token) {
            skills.push(token);
        }
    }

    skills.into_capped(SKILL_LIMIT)
}

/// Ordered union of `primary` then `secondary`, exact-string deduplicated.
pub fn merge_skill_lists(primary: &[String], secondary: &[String], limit: usize) -> Vec<String> {
    let mut skills = SkillList::default();
    for skill in primary.iter().chain(secondary) {
        skills.push(skill);
    }
    skills.into_capped(limit)
}

pub(crate) fn skill_text(profile: &ProfileRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();
    parts.extend(profile.basic_info.headline.as_deref());
    parts.extend(profile.basic_info.about.as_deref());
    for entry in &profile.experience {
        parts.extend(entry.description.as_deref());
        parts.extend(entry.title.as_deref());
    }

    parts.join(" ").to_lowercase()
}

#[derive(Default)]
struct SkillList {
    items: Vec<String>,
}

impl SkillList {
    fn push(&mut self, skill: &str) {
        if !self.items.iter().any(|existing| existing == skill) {
            self.items.push(skill.to_string());
        }
    }

    fn into_capped(mut self, limit: usize) -> Vec<String> {
        self.items.truncate(limit);
        self.items
    }
}
