use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::catalog::Project;

/// Pointer position inside a card, in CSS pixels from its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpotlightOffset {
    pub x: f64,
    pub y: f64,
}

impl SpotlightOffset {
    pub fn from_pointer(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }

    pub fn style(&self) -> String {
        format!("--x: {}px; --y: {}px;", self.x, self.y)
    }
}

/// Tags in display order with repeats dropped; badges are keyed by label.
pub fn unique_tags(tags: &[String]) -> Vec<&str> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let card_ref = use_node_ref();
    let offset = use_state(|| None::<SpotlightOffset>);

    let on_mouse_move = {
        let card_ref = card_ref.clone();
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                offset.set(Some(SpotlightOffset::from_pointer(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                )));
            }
        })
    };

    let Project {
        title,
        description,
        tags,
        url,
    } = &props.project;

    html! {
        <div
            ref={card_ref}
            class="project-card"
            style={(*offset).map(|o| o.style()).unwrap_or_default()}
            onmousemove={on_mouse_move}
        >
            <div class="project-card-inner">
                <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="underline-link underline-project project-title">
                    { title.clone() }
                </a>
                <p class="project-description">{ description.clone() }</p>
                <div class="project-tags">
                    { for unique_tags(tags).into_iter().map(|tag| html! {
                        <span key={tag.to_string()} class="project-tag">{ tag.to_string() }</span>
                    }) }
                </div>
                <div aria-hidden="true" class="project-spotlight"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_card() {
        let offset = SpotlightOffset::from_pointer(250.0, 130.0, 200.0, 100.0);
        assert_eq!(offset, SpotlightOffset { x: 50.0, y: 30.0 });
        assert_eq!(offset.style(), "--x: 50px; --y: 30px;");
    }

    #[test]
    fn cards_compute_offsets_independently() {
        // Same pointer, two cards at different places on the page
        let left = SpotlightOffset::from_pointer(300.0, 300.0, 0.0, 200.0);
        let right = SpotlightOffset::from_pointer(300.0, 300.0, 280.0, 200.0);
        assert_eq!(left.style(), "--x: 300px; --y: 100px;");
        assert_eq!(right.style(), "--x: 20px; --y: 100px;");
    }

    #[test]
    fn fractional_positions_survive() {
        let offset = SpotlightOffset::from_pointer(10.5, 3.25, 0.0, 0.0);
        assert_eq!(offset.style(), "--x: 10.5px; --y: 3.25px;");
    }

    #[test]
    fn tags_are_deduplicated_in_order() {
        let tags: Vec<String> = ["Rust", "Yew", " Rust ", "", "WASM"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(unique_tags(&tags), vec!["Rust", "Yew", "WASM"]);
        // Same input, same badges
        assert_eq!(unique_tags(&tags), unique_tags(&tags.clone()));
    }
}
