use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod catalog;
mod config;
mod components {
    pub mod project_card;
    pub mod reveal;
    pub mod typewriter;
    pub mod viewport;
}
mod sections {
    pub mod contact;
    pub mod hero;
    pub mod projects;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        // Single page site: unknown paths still get the portfolio
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
