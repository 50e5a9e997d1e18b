use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod forms;
mod components {
    pub mod icons;
    pub mod pricing_card;
    pub mod reveal;
}
mod pages {
    pub mod pricing;
    pub mod project_brief;
}

use pages::{
    pricing::PricingPage,
    project_brief::ProjectBrief,
};

// Brief slug used when a page asks for a brief without a known tier.
const CUSTOM_BRIEF: &str = "custom";

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/project-brief/:tier")]
    ProjectBrief { tier: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Destinations a page can ask the shell to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Pricing,
    ProjectBrief,
}

pub fn route_for(page: Page, id: Option<&str>) -> Route {
    match page {
        Page::Pricing => Route::Pricing,
        Page::ProjectBrief => {
            let slug = id
                .and_then(content::tier_by_name)
                .map(|tier| tier.slug)
                .unwrap_or(CUSTOM_BRIEF);
            Route::ProjectBrief { tier: slug.to_string() }
        }
    }
}

#[function_component(PricingRoute)]
fn pricing_route() -> Html {
    let navigator = use_navigator();
    let set_page = Callback::from(move |(page, id): (Page, Option<String>)| {
        let route = route_for(page, id.as_deref());
        match &navigator {
            Some(navigator) => navigator.push(&route),
            None => log::warn!("No router available to open {:?}", page),
        }
    });

    html! { <PricingPage {set_page} /> }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingRoute /> }
        },
        Route::ProjectBrief { tier } => {
            info!("Rendering Project Brief page for {}", tier);
            html! { <ProjectBrief {tier} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Pricing page");
            html! { <Redirect<Route> to={Route::Pricing} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(window) = &window {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 80.0);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not listen to scroll events");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"ProbSolv"}
                </Link<Route>>
                <div class="nav-right">
                    <Link<Route> to={Route::Pricing} classes="nav-link">
                        {"Pricing"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_route_uses_tier_slug() {
        assert_eq!(
            route_for(Page::ProjectBrief, Some("Professional")),
            Route::ProjectBrief { tier: "professional".to_string() }
        );
    }

    #[test]
    fn unknown_or_missing_tier_opens_custom_brief() {
        let custom = Route::ProjectBrief { tier: CUSTOM_BRIEF.to_string() };
        assert!(route_for(Page::ProjectBrief, Some("Platinum")) == custom);
        assert!(route_for(Page::ProjectBrief, None) == custom);
    }

    #[test]
    fn pricing_page_route() {
        assert!(route_for(Page::Pricing, None) == Route::Pricing);
    }
}
