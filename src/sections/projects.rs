use log::error;
use yew::prelude::*;

use crate::catalog::{self, Project};
use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;

fn load_projects() -> Vec<Project> {
    match catalog::catalog() {
        Ok(projects) => projects,
        Err(err) => {
            error!("Failed to decode project catalog: {}", err);
            Vec::new()
        }
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let projects = use_memo(|_| load_projects(), ());

    html! {
        <section id="projects" class="projects-section">
            <div class="projects-inner">
                <Reveal>
                    <h3 class="section-title gradient-text">{"Projects"}</h3>
                </Reveal>
                <div class="projects-grid">
                    { for projects.iter().map(|project| html! {
                        <Reveal key={project.title.clone()}>
                            <ProjectCard project={project.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .projects-section {
                    position: relative;
                    z-index: 10;
                    padding: 6rem 1.5rem;
                    scroll-margin-top: 6rem;
                    overflow: hidden;
                }

                .projects-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .projects-section .section-title {
                    margin-bottom: 3rem;
                    padding-bottom: 1rem;
                }

                .projects-grid {
                    display: grid;
                    gap: 2rem;
                }

                /* A lone card sits centred instead of filling one column */
                .projects-grid > *:only-child {
                    grid-column: 1 / -1;
                    justify-self: center;
                    max-width: 600px;
                    width: 100%;
                }

                .project-card {
                    position: relative;
                    border-radius: 1rem;
                    padding: 1px;
                    background: conic-gradient(
                        from 180deg at 50% 50%,
                        rgba(34, 211, 238, 0.35),
                        rgba(244, 114, 182, 0.35),
                        rgba(52, 211, 153, 0.35),
                        rgba(34, 211, 238, 0.35)
                    );
                }

                .project-card-inner {
                    position: relative;
                    border-radius: 1rem;
                    background: rgba(10, 15, 30, 0.8);
                    padding: 1.5rem;
                    box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    transition: transform 0.3s;
                }

                .project-card:hover .project-card-inner {
                    transform: translateY(-0.125rem);
                }

                .project-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    color: #ffffff;
                    text-decoration: none;
                }

                .project-description {
                    margin: 0 0 1.25rem;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }

                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .project-tag {
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 0.25rem 0.625rem;
                    font-size: 0.75rem;
                    color: #d1d5db;
                }

                .project-spotlight {
                    pointer-events: none;
                    position: absolute;
                    inset: -1px;
                    border-radius: 1rem;
                    opacity: 0;
                    filter: blur(8px);
                    transition: opacity 0.5s;
                    background: radial-gradient(600px circle at var(--x, 50%) var(--y, 50%), rgba(103, 232, 249, 0.16), transparent 40%);
                }

                .project-card:hover .project-spotlight {
                    opacity: 1;
                }

                @media (min-width: 768px) {
                    .projects-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    .project-card-inner { padding: 1.75rem; }
                }
                "#}
            </style>
        </section>
    }
}
