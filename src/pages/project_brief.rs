use yew::prelude::*;
use yew_router::components::Link;

use crate::content;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectBriefProps {
    pub tier: String,
}

/// Landing spot for a pricing card's call to action.
#[function_component(ProjectBrief)]
pub fn project_brief(props: &ProjectBriefProps) -> Html {
    let tier = content::tier_by_slug(&props.tier);

    html! {
        <div class="project-brief">
            <h1>{"Start Your Project Brief"}</h1>
            {
                if let Some(tier) = tier {
                    html! {
                        <div class="brief-summary">
                            <p>{format!("You picked the {} plan.", tier.name)}</p>
                            <p>{format!("{} · Delivery in {}", tier.price, tier.delivery)}</p>
                        </div>
                    }
                } else {
                    html! {
                        <p>{"Tell us about your project and we'll suggest the right plan."}</p>
                    }
                }
            }
            <Link<Route> to={Route::Pricing} classes="forward-link">
                {"Back to pricing"}
            </Link<Route>>
        </div>
    }
}
