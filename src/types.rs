use serde::{Deserialize, Serialize};

/// How demanding a project is for the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A material needed for a project. Quantity is a display string ("3枚"),
/// not a parsed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub quantity: String,
}

/// A tool needed for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub optional: bool,
}

/// One build step. `order` is author-supplied display data; steps are
/// always rendered in stored order, never re-sorted by this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub order: u32,
    pub description: String,
    pub image_url: String,
}

/// A catalog entry. Image URLs are opaque reference strings; nothing in
/// this crate fetches or validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub category: String,
    pub materials: Vec<Material>,
    pub tools: Vec<Tool>,
    pub steps: Vec<Step>,
    pub likes: u32,
}

/// Distinct `category` values across the catalog, in first-seen order.
/// There is no authoritative category list beyond the values observed.
pub fn distinct_categories(projects: &[Project]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for project in projects {
        if !categories.iter().any(|c| c == &project.category) {
            categories.push(project.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("project {}", id),
            description: String::new(),
            image_url: String::new(),
            difficulty: Difficulty::Easy,
            duration: String::new(),
            category: category.to_string(),
            materials: vec![],
            tools: vec![],
            steps: vec![],
            likes: 0,
        }
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let projects = vec![
            project(1, "木工"),
            project(2, "ガーデニング"),
            project(3, "木工"),
            project(4, "ガーデニング"),
            project(5, "木工"),
        ];
        assert_eq!(distinct_categories(&projects), vec!["木工", "ガーデニング"]);
    }

    #[test]
    fn categories_empty_catalog() {
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"medium\""
        );
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }
}
