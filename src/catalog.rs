use serde::Deserialize;

const PROJECTS_JSON: &str = include_str!("data/projects.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
}

/// Projects shown on the page, compiled into the binary.
pub fn catalog() -> Result<Vec<Project>, serde_json::Error> {
    parse_catalog(PROJECTS_JSON)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes() {
        let projects = catalog().expect("bundled projects.json should decode");
        assert!(!projects.is_empty());

        let first = &projects[0];
        assert_eq!(first.title, "AppliRemind");
        assert_eq!(
            first.tags,
            vec!["Tailwind", "AppScript", "Node.js", "Scalable from JSON"]
        );
        assert!(first.url.starts_with("https://"));
    }

    #[test]
    fn missing_tags_means_no_tags() {
        let projects = parse_catalog(
            r#"[{"title": "t", "description": "d", "url": "https://example.com"}]"#,
        )
        .unwrap();
        assert!(projects[0].tags.is_empty());
    }

    #[test]
    fn missing_url_is_rejected() {
        assert!(parse_catalog(r#"[{"title": "t", "description": "d"}]"#).is_err());
    }

    #[test]
    fn tag_order_is_kept() {
        let projects = parse_catalog(
            r#"[{"title": "t", "description": "d", "tags": ["b", "a", "c"], "url": "u"}]"#,
        )
        .unwrap();
        assert_eq!(projects[0].tags, vec!["b", "a", "c"]);
    }
}
