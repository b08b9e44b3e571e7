use yew::prelude::*;

use crate::components::viewport::use_viewport_setup;
use crate::sections::{
    contact::{Contact, Footer},
    hero::Hero,
    projects::Projects,
};

#[function_component(Background)]
fn background() -> Html {
    html! {
        <div class="page-background" aria-hidden="true">
            <div class="page-background-base"></div>
            <div class="page-background-dots"></div>
            <div class="page-background-glow glow-fuchsia"></div>
            <div class="page-background-glow glow-cyan"></div>
            <div class="page-background-glow glow-emerald"></div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_viewport_setup();

    html! {
        <div class="portfolio-page">
            <Background />
            <Hero />
            <Projects />
            <Contact />
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #070b16;
                    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                }

                .portfolio-page {
                    position: relative;
                    min-height: calc(var(--vh, 1vh) * 100);
                    color: #ffffff;
                    overflow-x: hidden;
                }

                .page-background {
                    pointer-events: none;
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                }

                .page-background-base {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, #070b16, #091125, #04070f);
                }

                .page-background-dots {
                    position: absolute;
                    inset: 0;
                    opacity: 0.06;
                    background: radial-gradient(circle at center, rgba(255, 255, 255, 0.9) 1px, transparent 1px);
                    background-size: 18px 18px;
                }

                .page-background-glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .glow-fuchsia {
                    top: -8rem;
                    left: -6rem;
                    width: 28rem;
                    height: 28rem;
                    background: rgba(217, 70, 239, 0.18);
                }

                .glow-cyan {
                    top: 33%;
                    right: -6rem;
                    width: 32rem;
                    height: 32rem;
                    background: rgba(34, 211, 238, 0.22);
                }

                .glow-emerald {
                    bottom: -6rem;
                    left: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(52, 211, 153, 0.14);
                }

                .gradient-text {
                    background: linear-gradient(to right, #a5f3fc, #f5d0fe, #a7f3d0);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .gradient-text-contact {
                    background-image: linear-gradient(to right, #a7f3d0, #a5f3fc, #f5d0fe);
                }

                .section-title {
                    text-align: center;
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin-top: 0;
                }

                @media (min-width: 768px) {
                    .section-title { font-size: 2.25rem; }
                }

                .reveal {
                    transition: opacity 700ms ease-out, transform 700ms ease-out;
                }

                .reveal-hidden {
                    opacity: 0;
                    transform: translateY(1.5rem);
                }

                .reveal-visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .underline-link {
                    position: relative;
                    display: inline-block;
                    color: inherit;
                    text-decoration: none;
                    background-image: linear-gradient(to right, #67e8f9, #67e8f9);
                    background-size: 0% 2px;
                    background-position: left bottom;
                    background-repeat: no-repeat;
                    transition: background-size 300ms, color 300ms;
                }

                .underline-link:hover {
                    background-size: 100% 2px;
                }

                .underline-connect:hover { color: #fed7aa; }
                .underline-footer:hover { color: #fbcfe8; }
                .underline-project:hover { color: #e9d5ff; }
                "#}
            </style>
        </div>
    }
}
