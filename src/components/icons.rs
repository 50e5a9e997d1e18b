use yew::prelude::*;

#[function_component(SpinnerIcon)]
pub fn spinner_icon() -> Html {
    html! {
        <svg class="spinner-icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25"></circle>
            <path fill="currentColor" opacity="0.75" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
        </svg>
    }
}

#[function_component(CheckIcon)]
pub fn check_icon() -> Html {
    html! {
        <svg class="check-icon" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
        </svg>
    }
}

/// Slow drifting glow behind a pricing card. Purely decorative.
#[function_component(AnimatedCardBackground)]
pub fn animated_card_background() -> Html {
    html! {
        <div class="card-background" aria-hidden="true">
            <span class="card-glow glow-one"></span>
            <span class="card-glow glow-two"></span>
        </div>
    }
}
