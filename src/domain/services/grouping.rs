//! Skill grouping for the skills section

use serde::Serialize;

use crate::domain::entities::{Skill, SkillCategory};

/// Label of the group for skills without a category
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// Skills sharing a category, in their display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup<'a> {
    pub category: Option<SkillCategory>,
    pub label: &'static str,
    pub skills: Vec<&'a Skill>,
}

/// Group skills by category in fixed category order
///
/// Empty groups are dropped. Skills without a category are collected in a
/// trailing "Other" group. Relative order inside a group is preserved.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = SkillCategory::ALL
        .iter()
        .map(|category| SkillGroup {
            category: Some(*category),
            label: category.label(),
            skills: skills
                .iter()
                .filter(|s| s.metadata.category() == Some(*category))
                .collect(),
        })
        .collect();

    groups.push(SkillGroup {
        category: None,
        label: UNCATEGORIZED_LABEL,
        skills: skills
            .iter()
            .filter(|s| s.metadata.category().is_none())
            .collect(),
    });

    groups.retain(|g| !g.skills.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skill(id: &str, category: Option<&str>) -> Skill {
        let category = category.map(|key| json!({"key": key, "value": key}));
        serde_json::from_value(json!({"id": id, "metadata": {"skill_name": id, "category": category}}))
            .unwrap()
    }

    #[test]
    fn groups_follow_fixed_category_order() {
        let skills = vec![
            skill("docker", Some("tools")),
            skill("rust", Some("backend")),
            skill("react", Some("frontend")),
            skill("axum", Some("backend")),
        ];

        let groups = group_by_category(&skills);
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, ["Frontend", "Backend", "Tools & Other"]);

        let backend: Vec<_> = groups[1].skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(backend, ["rust", "axum"]);
    }

    #[test]
    fn uncategorized_skills_go_last() {
        let skills = vec![skill("misc", None), skill("css", Some("frontend"))];
        let groups = group_by_category(&skills);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].label, UNCATEGORIZED_LABEL);
        assert_eq!(groups[1].skills[0].id, "misc");
    }

    #[test]
    fn no_skills_no_groups() {
        assert!(group_by_category(&[]).is_empty());
    }
}
