use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::typewriter::Typewriter;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <Reveal>
                    <h1 class="hero-name gradient-text">{config::OWNER_NAME}</h1>
                </Reveal>
                <Reveal delay={100}>
                    <h2 class="hero-role">
                        <Typewriter
                            words={config::role_titles()}
                            timing={config::HERO_TYPING}
                            cursor={true}
                            cursor_style={"|".to_string()}
                        />
                    </h2>
                </Reveal>
                <Reveal delay={200}>
                    <p class="hero-tagline">{config::TAGLINE}</p>
                </Reveal>
            </div>

            // Soft light behind the heading
            <div class="hero-spotlight" aria-hidden="true"></div>

            <a href="#projects" class="scroll-cue" aria-label="Scroll to projects">
                <svg class="scroll-cue-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                </svg>
            </a>
            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: calc(var(--vh, 1vh) * 100);
                    padding: 5rem 1.5rem 6rem;
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-name {
                    font-size: 3rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    line-height: 1.05;
                    padding-bottom: 1.25rem;
                    margin: 0;
                }

                .hero-role {
                    margin: 1rem 0 2rem;
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #67e8f9;
                    min-height: 1.5em;
                }

                .hero-tagline {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: #d1d5db;
                }

                .hero-spotlight {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    z-index: -10;
                    -webkit-mask-image: radial-gradient(ellipse at center, black, transparent 60%);
                    mask-image: radial-gradient(ellipse at center, black, transparent 60%);
                    background:
                        radial-gradient(1100px 520px at 50% -10%, rgba(103, 232, 249, 0.12), transparent),
                        radial-gradient(900px 420px at 80% 30%, rgba(244, 114, 182, 0.12), transparent),
                        radial-gradient(800px 380px at 20% 70%, rgba(52, 211, 153, 0.10), transparent);
                }

                .scroll-cue {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #9ca3af;
                    transition: color 0.15s;
                }

                .scroll-cue:hover {
                    color: #67e8f9;
                }

                .scroll-cue-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    animation: scroll-cue-bounce 1s infinite;
                }

                @keyframes scroll-cue-bounce {
                    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                    50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                }

                @media (min-width: 768px) {
                    .hero-name { font-size: 4.5rem; }
                    .hero-role { font-size: 2.25rem; }
                    .hero-tagline { font-size: 1.125rem; }
                }
                "#}
            </style>
        </section>
    }
}
