//! Project catalog types, deserialized from the embedded TOML.

use serde::Deserialize;

/// Top-level shape of `assets/data/projects.toml`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProjectCatalog {
    #[serde(default)]
    pub project: Vec<ProjectEntry>,
}

/// One project shown as a slide in the menu section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Path to an accompanying publication, if one exists.
    pub publication: Option<String>,
    pub model: ModelRef,
    /// Free-form technology tags, mapped to icons at render time.
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// Reference to a 3D model asset consumed by the rendering host.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModelRef {
    pub src: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub y: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// A media tile on a project card.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MediaItem {
    pub src: String,
    /// Optional link target; tiles with an href open in a new tab.
    pub href: Option<String>,
    #[serde(default)]
    pub alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_entry() {
        let catalog: ProjectCatalog = toml::from_str(
            r#"
            [[project]]
            name = "Human Digital Twin"
            model = { src = "/models/human/human.glb", scale = 1.6 }
            "#,
        )
        .unwrap();

        assert_eq!(catalog.project.len(), 1);
        let entry = &catalog.project[0];
        assert_eq!(entry.name, "Human Digital Twin");
        assert_eq!(entry.description, "");
        assert_eq!(entry.publication, None);
        assert_eq!(entry.model.scale, 1.6);
        assert_eq!(entry.model.y, 0.0);
        assert!(entry.tech.is_empty());
        assert!(entry.media.is_empty());
    }

    #[test]
    fn test_parse_full_entry() {
        let catalog: ProjectCatalog = toml::from_str(
            r#"
            [[project]]
            name = "Rollercoaster Builder VR"
            description = "A VR roller coaster design system."
            publication = "/papers/rollercoasters.pdf"
            tech = ["unity", "c#"]
            model = { src = "/models/rollercoaster/scene.gltf", scale = 0.2 }

            [[project.media]]
            src = "/img/coaster-1.png"
            href = "https://example.org/coaster"
            alt = "coaster editor"
            "#,
        )
        .unwrap();

        let entry = &catalog.project[0];
        assert_eq!(
            entry.publication.as_deref(),
            Some("/papers/rollercoasters.pdf")
        );
        assert_eq!(entry.tech, vec!["unity", "c#"]);
        assert_eq!(entry.media.len(), 1);
        assert_eq!(
            entry.media[0].href.as_deref(),
            Some("https://example.org/coaster")
        );
    }

    #[test]
    fn test_default_model_scale() {
        let catalog: ProjectCatalog = toml::from_str(
            r#"
            [[project]]
            name = "x"
            model = { src = "/models/x.glb" }
            "#,
        )
        .unwrap();
        assert_eq!(catalog.project[0].model.scale, 1.0);
    }
}
