use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::pricing_card::PricingCard;
use crate::components::reveal::{Observation, RevealObserver, RevealState, RevealTarget};
use crate::config;
use crate::content::PRICING_TIERS;
use crate::forms::{FormKind, RemoteForm};
use crate::Page;

/// The alternative partnership forms below the pricing grid. At most one is
/// open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartnershipForm {
    Support,
    Collaboration,
}

impl PartnershipForm {
    pub fn kind(self) -> FormKind {
        match self {
            PartnershipForm::Support => FormKind::Support,
            PartnershipForm::Collaboration => FormKind::Collaboration,
        }
    }
}

/// Picking the open form again closes it.
pub fn toggle_partnership(
    current: Option<PartnershipForm>,
    choice: PartnershipForm,
) -> Option<PartnershipForm> {
    if current == Some(choice) {
        None
    } else {
        Some(choice)
    }
}

/// The bespoke form slot. Once opened the form stays mounted and closing only
/// hides it, so typed values and the thank-you panel survive a reopen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CustomFormSlot {
    pub visible: bool,
    pub mounted: bool,
}

impl CustomFormSlot {
    pub fn toggle(self) -> Self {
        Self {
            visible: !self.visible,
            mounted: true,
        }
    }

    pub fn close(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}

fn watch_or_warn(targets: Vec<(usize, Element)>, on_seen: Callback<(usize, bool)>) -> Option<RevealObserver> {
    if targets.is_empty() {
        return None;
    }
    match RevealObserver::watch(targets, on_seen) {
        Ok(observer) => Some(observer),
        Err(e) => {
            warn!("Could not observe pricing elements: {:?}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingPageProps {
    /// Provided by the app shell; the page never navigates on its own.
    pub set_page: Callback<(Page, Option<String>)>,
}

#[function_component(PricingPage)]
pub fn pricing_page(props: &PricingPageProps) -> Html {
    let reveal = use_reducer(|| RevealState::new(PRICING_TIERS.len()));
    let title_ref = use_node_ref();
    let tier_refs = use_memo(
        |_| PRICING_TIERS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );
    let section_ref = use_node_ref();
    let custom_form = use_state(CustomFormSlot::default);
    let active_form = use_state(|| None::<PartnershipForm>);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    {
        let dispatcher = reveal.dispatcher();
        let title_ref = title_ref.clone();
        let tier_refs = tier_refs.clone();
        use_effect_with_deps(
            move |_| {
                let on_title = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |(_, intersecting): (usize, bool)| {
                        dispatcher.dispatch(Observation {
                            target: RevealTarget::Title,
                            intersecting,
                        })
                    })
                };
                let on_tier = Callback::from(move |(index, intersecting): (usize, bool)| {
                    dispatcher.dispatch(Observation {
                        target: RevealTarget::Tier(index),
                        intersecting,
                    })
                });

                let title = title_ref.cast::<Element>().map(|el| (0, el)).into_iter().collect();
                let tiers = tier_refs
                    .iter()
                    .enumerate()
                    .filter_map(|(index, node)| node.cast::<Element>().map(|el| (index, el)))
                    .collect();

                let title_observer = watch_or_warn(title, on_title);
                let tier_observer = watch_or_warn(tiers, on_tier);

                move || {
                    drop(title_observer);
                    drop(tier_observer);
                }
            },
            (),
        );
    }

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |active: &Option<PartnershipForm>| {
                // Give the freshly opened form a moment to mount before scrolling.
                let pending = active.map(|_| {
                    Timeout::new(config::FORM_SCROLL_DELAY_MS, move || {
                        if let Some(section) = section_ref.cast::<Element>() {
                            let options = ScrollIntoViewOptions::new();
                            options.set_behavior(ScrollBehavior::Smooth);
                            options.set_block(ScrollLogicalPosition::Center);
                            section.scroll_into_view_with_scroll_into_view_options(&options);
                        }
                    })
                });
                move || drop(pending)
            },
            *active_form,
        );
    }

    let on_tier_select = {
        let set_page = props.set_page.clone();
        Callback::from(move |tier_name: &'static str| {
            set_page.emit((Page::ProjectBrief, Some(tier_name.to_string())));
        })
    };

    let toggle_custom_form = {
        let custom_form = custom_form.clone();
        Callback::from(move |_: MouseEvent| custom_form.set(custom_form.toggle()))
    };

    let close_custom_form = {
        let custom_form = custom_form.clone();
        Callback::from(move |_: ()| custom_form.set(custom_form.close()))
    };

    let toggle = |choice: PartnershipForm| {
        let active_form = active_form.clone();
        Callback::from(move |_: MouseEvent| active_form.set(toggle_partnership(*active_form, choice)))
    };

    let close_partnership_form = {
        let active_form = active_form.clone();
        Callback::from(move |_: ()| active_form.set(None))
    };

    let is_open = |choice: PartnershipForm| *active_form == Some(choice);

    html! {
        <div class="pricing-page">
            <style>{PRICING_STYLES}</style>
            <div ref={title_ref} class={classes!("pricing-title", if reveal.title_visible { "revealed" } else { "concealed" })}>
                <h1>{"Flexible Pricing Plans"}</h1>
                <p>{"Choose a plan that scales with your business needs. Transparent pricing for exceptional value."}</p>
            </div>

            <div class="pricing-grid">
                { for PRICING_TIERS.iter().zip(tier_refs.iter()).enumerate().map(|(index, (tier, node_ref))| html! {
                    <PricingCard
                        key={tier.name}
                        {tier}
                        {index}
                        visible={reveal.tiers.contains(index)}
                        node_ref={node_ref.clone()}
                        on_select={on_tier_select.clone()}
                    />
                }) }
            </div>

            <div class="bespoke-toggle">
                <button class="outline-button" onclick={toggle_custom_form}>
                    { if custom_form.visible { "Close Custom Form" } else { "Request a Bespoke Solution" } }
                </button>
            </div>

            if custom_form.mounted {
                <div class="form-slot narrow" hidden={!custom_form.visible}>
                    <RemoteForm kind={FormKind::Bespoke} on_close={close_custom_form} />
                </div>
            }

            <section ref={section_ref} class="partnership-section">
                <h2>{"Alternative Partnership Models"}</h2>
                <p>
                    {"We believe in fostering innovation and supporting great ideas. If our standard plans aren't the right fit, let's explore other ways to work together."}
                </p>
                <div class="partnership-buttons">
                    <button class="solid-button" onclick={toggle(PartnershipForm::Collaboration)}>
                        { if is_open(PartnershipForm::Collaboration) { "Close Proposal Form" } else { "Propose a Collaboration" } }
                    </button>
                    <button class="outline-button" onclick={toggle(PartnershipForm::Support)}>
                        { if is_open(PartnershipForm::Support) { "Close Support Form" } else { "Request Budget Support" } }
                    </button>
                </div>

                if let Some(form) = *active_form {
                    <div class="form-slot">
                        <RemoteForm key={form.kind().id_prefix()} kind={form.kind()} on_close={close_partnership_form} />
                    </div>
                }
            </section>
        </div>
    }
}

const PRICING_STYLES: &str = r#"
    .pricing-page {
        padding: 8rem 1.5rem 5rem;
        max-width: 72rem;
        margin: 0 auto;
        color: #e5e7eb;
    }
    .concealed {
        opacity: 0;
    }
    .revealed {
        animation: fadeInUp 0.6s ease-out both;
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .pricing-title {
        text-align: center;
        max-width: 42rem;
        margin: 0 auto 4rem;
    }
    .pricing-title h1 {
        font-size: 3rem;
        font-weight: 800;
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 2rem;
    }
    .pricing-card {
        position: relative;
        display: flex;
        flex-direction: column;
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid #2d2d3a;
        background: rgba(24, 24, 32, 0.9);
        overflow: hidden;
        transition: transform 0.5s ease-in-out, border-color 0.3s;
    }
    .pricing-card:hover {
        transform: scale(1.03) translateY(-4px);
        border-color: #8b5cf6;
    }
    .pricing-card.popular {
        border: 2px solid #8b5cf6;
        box-shadow: 0 20px 40px rgba(139, 92, 246, 0.2);
    }
    .popular-tag {
        position: absolute;
        top: 0.75rem;
        right: 2rem;
        background: #8b5cf6;
        color: #fff;
        font-size: 0.75rem;
        font-weight: 700;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        text-transform: uppercase;
        z-index: 2;
    }
    .card-background {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .card-glow {
        position: absolute;
        width: 12rem;
        height: 12rem;
        border-radius: 50%;
        filter: blur(60px);
        opacity: 0.15;
        background: #8b5cf6;
        animation: drift 12s ease-in-out infinite alternate;
    }
    .glow-two {
        right: 0;
        bottom: 0;
        background: #22d3ee;
        animation-delay: -6s;
    }
    @keyframes drift {
        from { transform: translate(0, 0); }
        to { transform: translate(40px, 30px); }
    }
    .card-body {
        position: relative;
        z-index: 1;
        display: flex;
        flex-direction: column;
        flex-grow: 1;
    }
    .price-row {
        display: flex;
        align-items: baseline;
        gap: 0.5rem;
        margin-top: 1rem;
    }
    .original-price {
        font-size: 1.5rem;
        text-decoration: line-through;
        opacity: 0.7;
    }
    .price {
        font-size: 3rem;
        font-weight: 800;
        margin: 1rem 0 0;
    }
    .price-row .price {
        margin: 0;
    }
    .discount-badge {
        display: inline-block;
        margin-top: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 600;
        background: rgba(239, 68, 68, 0.2);
        color: #f87171;
    }
    .tier-description {
        margin-top: 1rem;
        min-height: 60px;
        color: #9ca3af;
    }
    .card-divider {
        border-top: 1px solid #2d2d3a;
        margin: 1.5rem 0;
    }
    .feature-list {
        list-style: none;
        padding: 0;
        flex-grow: 1;
    }
    .feature-list li {
        display: flex;
        align-items: center;
        margin-bottom: 1rem;
    }
    .check-icon {
        width: 1.25rem;
        height: 1.25rem;
        margin-right: 0.75rem;
        color: #22d3ee;
        flex-shrink: 0;
    }
    .delivery {
        font-size: 0.875rem;
        color: #9ca3af;
        margin-bottom: 1.5rem;
    }
    .delivery span {
        font-weight: 600;
        color: #e5e7eb;
    }
    .tier-cta {
        width: 100%;
        padding: 0.625rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 600;
        cursor: pointer;
        background: #2d2d3a;
        color: #e5e7eb;
    }
    .tier-cta.primary,
    .solid-button {
        background: #8b5cf6;
        color: #fff;
    }
    .bespoke-toggle {
        margin-top: 4rem;
        text-align: center;
    }
    .outline-button,
    .solid-button {
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .outline-button {
        background: transparent;
        border: 2px solid #8b5cf6;
        color: #8b5cf6;
    }
    .solid-button {
        border: 2px solid #8b5cf6;
    }
    .outline-button:hover,
    .solid-button:hover {
        transform: scale(1.05);
    }
    .partnership-section {
        margin: 6rem auto 0;
        max-width: 56rem;
        text-align: center;
        scroll-margin-top: 6rem;
    }
    .partnership-buttons {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin-top: 2rem;
    }
    .form-slot {
        margin-top: 3rem;
        animation: fadeInUp 0.6s ease-out both;
    }
    .form-slot.narrow {
        max-width: 42rem;
        margin-left: auto;
        margin-right: auto;
    }
    .form-slot[hidden] {
        display: none;
    }
    .remote-form {
        text-align: left;
        padding: 2rem;
        border: 1px solid #2d2d3a;
        border-radius: 0.75rem;
        background: #181820;
    }
    .remote-form h3 {
        text-align: center;
        margin-bottom: 1.5rem;
    }
    .form-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .field.full {
        grid-column: 1 / -1;
    }
    .field label {
        display: block;
        font-size: 0.875rem;
        margin-bottom: 0.5rem;
        color: #9ca3af;
    }
    .optional {
        font-size: 0.75rem;
    }
    .form-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem;
        border-radius: 0.375rem;
        border: 1px solid #2d2d3a;
        background: #0f0f14;
        color: #e5e7eb;
    }
    .form-input.has-error {
        border-color: #ef4444;
    }
    .field-error,
    .form-failure {
        color: #f87171;
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }
    .form-failure {
        grid-column: 1 / -1;
        text-align: center;
    }
    .field-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .char-count {
        font-size: 0.875rem;
        color: #9ca3af;
    }
    .form-submit {
        width: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        background: #8b5cf6;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
    }
    .form-submit:disabled {
        opacity: 0.7;
        cursor: default;
    }
    .spinner-icon {
        width: 1.25rem;
        height: 1.25rem;
        animation: spin 1s linear infinite;
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    .form-thanks {
        text-align: center;
        padding: 2rem;
        border-radius: 0.5rem;
        background: rgba(34, 197, 94, 0.1);
        color: #86efac;
    }
    .form-thanks-close {
        margin-top: 1rem;
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.375rem;
        background: rgba(134, 239, 172, 0.2);
        color: #bbf7d0;
        cursor: pointer;
    }
    @media (max-width: 640px) {
        .form-grid {
            grid-template-columns: 1fr;
        }
        .pricing-title h1 {
            font-size: 2rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_form_selects_it() {
        assert_eq!(
            toggle_partnership(None, PartnershipForm::Support),
            Some(PartnershipForm::Support)
        );
    }

    #[test]
    fn reselecting_the_open_form_closes_it() {
        assert_eq!(
            toggle_partnership(Some(PartnershipForm::Collaboration), PartnershipForm::Collaboration),
            None
        );
    }

    #[test]
    fn selecting_the_other_form_switches() {
        assert_eq!(
            toggle_partnership(Some(PartnershipForm::Support), PartnershipForm::Collaboration),
            Some(PartnershipForm::Collaboration)
        );
    }

    #[test]
    fn bespoke_slot_starts_unmounted() {
        let slot = CustomFormSlot::default();
        assert!(!slot.visible);
        assert!(!slot.mounted);
    }

    #[test]
    fn hiding_the_bespoke_form_keeps_it_mounted() {
        let opened = CustomFormSlot::default().toggle();
        assert_eq!(opened, CustomFormSlot { visible: true, mounted: true });

        let hidden = opened.toggle();
        assert_eq!(hidden, CustomFormSlot { visible: false, mounted: true });
        assert_eq!(opened.close(), hidden);

        assert_eq!(hidden.toggle(), opened);
        assert_eq!(hidden.close(), hidden);
    }

    #[test]
    fn partnership_forms_map_to_their_form_kinds() {
        assert_eq!(PartnershipForm::Support.kind(), FormKind::Support);
        assert_eq!(PartnershipForm::Collaboration.kind(), FormKind::Collaboration);
    }
}
