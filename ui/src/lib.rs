use payloads::{APIClient, TutorialId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod state;

pub use logs::init_logging;
pub use state::State;

use components::layout::MainLayout;
use pages::{NotFoundPage, TutorialPage, TutorialsListPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tutorials")]
    Tutorials,
    #[at("/tutorials/:id")]
    Tutorial { id: TutorialId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Tutorials => html! { <TutorialsListPage /> },
        // keyed so that navigating between tutorials remounts the page and
        // fetches the new record
        Route::Tutorial { id } => {
            html! { <TutorialPage key={id.to_string()} id={id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
