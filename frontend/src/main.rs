use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scroll;
mod contact {
    pub mod captcha;
    pub mod form;
    pub mod relay;
    pub mod state;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod process;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


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
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
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
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting Origin Golf site");
    yew::Renderer::<App>::new().render();
}
