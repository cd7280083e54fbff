//! Project grid and its cards.

use catalog::ProjectCard;
use leptos::prelude::*;

use crate::state::projects::ProjectsState;

/// Grid of project cards. The whole grid is rebuilt whenever the card list
/// changes, replaying the staggered entrance animation.
#[component]
pub fn ProjectGrid(projects: RwSignal<ProjectsState>) -> impl IntoView {
    view! {
        <div class="projects-grid">
            {move || {
                projects
                    .with(|p| p.cards.clone())
                    .into_iter()
                    .map(|card| view! { <ProjectTile card/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// A single project card: glyph, title, description, every tag, and link.
#[component]
pub fn ProjectTile(card: ProjectCard) -> impl IntoView {
    let style = card.animation_style();

    view! {
        <div class="glass project-card" style=style>
            <div class="project-image">{card.image}</div>
            <h3 class="project-title">{card.title}</h3>
            <p class="project-description">{card.description}</p>
            <div class="project-tags">
                {card
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="project-tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <a href=card.link class="project-link">
                "View Project \u{2192}"
            </a>
        </div>
    }
}
