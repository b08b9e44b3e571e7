use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <Reveal>
                    <h3 class="section-title gradient-text gradient-text-contact">{"Let’s Connect"}</h3>
                </Reveal>
                <Reveal delay={120}>
                    <p class="contact-blurb">{"Say hello or check out my code."}</p>
                </Reveal>
                <Reveal delay={220}>
                    <div class="contact-links">
                        <a href={config::mailto()} class="underline-link underline-connect">{"Email"}</a>
                        <a href={config::GITHUB_URL} class="underline-link underline-connect">{"GitHub"}</a>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .contact-section {
                    position: relative;
                    z-index: 10;
                    padding: 7rem 1.5rem;
                    scroll-margin-top: 6rem;
                    overflow: hidden;
                }

                .contact-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .contact-section .section-title {
                    margin-bottom: 1rem;
                }

                .contact-blurb {
                    margin: 0 0 2.5rem;
                    color: #d1d5db;
                }

                .contact-links {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            {format!("© {} Developed by ", copyright_year())}
            <a class="underline-link underline-footer" href={config::FOOTER_URL}>{config::OWNER_SHORT_NAME}</a>
            {"."}
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 2rem 0;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                "#}
            </style>
        </footer>
    }
}
