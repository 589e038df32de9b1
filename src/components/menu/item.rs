//! A single project card: text column plus wireframe model pane.

use leptos::prelude::*;

use crate::components::WireModel;
use crate::models::{MediaItem, ProjectEntry};

stylance::import_crate_style!(css, "src/components/menu/menu.module.css");

/// Map from normalized technology tag to icon asset key.
const TECH_ICON_KEYS: &[(&str, &str)] = &[
    ("c#", "csharp"),
    ("csharp", "csharp"),
    ("python", "python"),
    ("unity", "unity"),
    ("unreal engine", "unreal"),
    ("react", "react"),
    ("react three fiber", "r3f"),
    ("three.js", "threejs"),
    ("node", "node"),
    ("node.js", "node"),
    ("mongodb", "mongodb"),
    ("typescript", "typescript"),
    ("javascript", "javascript"),
];

/// Resolves a free-form tag to its icon key; unknown tags render nothing.
fn tech_icon_key(tag: &str) -> Option<&'static str> {
    let normalized = tag
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    TECH_ICON_KEYS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, asset)| *asset)
}

/// One project slide.
#[component]
pub fn ProjectCard(entry: ProjectEntry) -> impl IntoView {
    let tech_icons: Vec<&'static str> = entry
        .tech
        .iter()
        .filter_map(|tag| tech_icon_key(tag))
        .collect();

    let media = entry.media.clone();
    let publication = entry.publication.clone();

    view! {
        <div class=css::card>
            <div class=css::cardText>
                <h1 class=css::title>{entry.name.clone()}</h1>
                <h2 class=css::desc>{entry.description.clone()}</h2>

                {publication.map(|href| {
                    view! {
                        <a class=css::publication href=href target="_blank" rel="noreferrer">
                            "publication"
                        </a>
                    }
                })}

                <Show when={
                    let has_media = !media.is_empty();
                    move || has_media
                }>
                    <div class=css::mediaRow>
                        {media
                            .iter()
                            .cloned()
                            .map(|item| view! { <MediaTile item=item /> })
                            .collect_view()}
                    </div>
                </Show>

                <Show when={
                    let has_icons = !tech_icons.is_empty();
                    move || has_icons
                }>
                    <div class=css::techRow>
                        {tech_icons
                            .clone()
                            .into_iter()
                            .map(|key| {
                                view! {
                                    <img
                                        class=css::techIcon
                                        src=format!("/icons/{}.svg", key)
                                        alt=key
                                        width="64"
                                        height="64"
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>

            <div class=css::modelPane>
                <WireModel src=entry.model.src.clone() scale=entry.model.scale y=entry.model.y />
            </div>
        </div>
    }
}

/// A media tile; tiles with an href open their target in a new tab.
#[component]
fn MediaTile(item: MediaItem) -> impl IntoView {
    let image = view! { <img class=css::tileImage src=item.src.clone() alt=item.alt.clone() draggable="false" /> };

    match item.href {
        Some(href) => view! {
            <a class=css::tile href=href target="_blank" rel="noreferrer">
                {image}
            </a>
        }
        .into_any(),
        None => view! { <div class=css::tile>{image}</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_icon_key_normalizes_case_and_spacing() {
        assert_eq!(tech_icon_key("Unreal   Engine"), Some("unreal"));
        assert_eq!(tech_icon_key("C#"), Some("csharp"));
        assert_eq!(tech_icon_key("Node.js"), Some("node"));
    }

    #[test]
    fn test_unknown_tag_has_no_icon() {
        assert_eq!(tech_icon_key("cobol"), None);
    }
}
