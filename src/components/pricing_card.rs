use yew::prelude::*;

use crate::components::icons::{AnimatedCardBackground, CheckIcon};
use crate::config;
use crate::content::PricingTier;

#[derive(Clone, Debug, PartialEq)]
pub enum PriceLayout {
    Discounted {
        original: &'static str,
        price: &'static str,
        badge: Option<&'static str>,
    },
    Plain {
        price: &'static str,
    },
}

pub fn price_layout(tier: &PricingTier) -> PriceLayout {
    match tier.original_price {
        Some(original) => PriceLayout::Discounted {
            original,
            price: tier.price,
            badge: tier.discount,
        },
        None => PriceLayout::Plain { price: tier.price },
    }
}

pub fn animation_delay_ms(index: usize) -> usize {
    index * config::CARD_STAGGER_MS
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: &'static PricingTier,
    pub index: usize,
    pub visible: bool,
    pub node_ref: NodeRef,
    pub on_select: Callback<&'static str>,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(tier.name))
    };

    let price = match price_layout(tier) {
        PriceLayout::Discounted { original, price, badge } => html! {
            <>
                <div class="price-row">
                    <span class="original-price">{original}</span>
                    <p class="price">{price}</p>
                </div>
                if let Some(badge) = badge {
                    <div class="discount-row">
                        <span class="discount-badge">{badge}</span>
                    </div>
                }
            </>
        },
        PriceLayout::Plain { price } => html! {
            <p class="price">{price}</p>
        },
    };

    html! {
        <div
            ref={props.node_ref.clone()}
            data-index={props.index.to_string()}
            class={classes!(
                "pricing-card",
                if props.visible { "revealed" } else { "concealed" },
                tier.popular.then_some("popular")
            )}
            style={format!("animation-delay: {}ms;", animation_delay_ms(props.index))}
        >
            <AnimatedCardBackground />
            if tier.popular {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <div class="card-body">
                <h2>{tier.name}</h2>
                {price}
                <p class="tier-description">{tier.description}</p>
                <div class="card-divider"></div>
                <ul class="feature-list">
                    { for tier.features.iter().map(|feature| html! {
                        <li key={*feature}><CheckIcon />{*feature}</li>
                    }) }
                </ul>
                <div class="card-divider"></div>
                <p class="delivery">{"Delivery: "}<span>{tier.delivery}</span></p>
                <button class={classes!("tier-cta", tier.popular.then_some("primary"))} {onclick}>
                    {tier.cta}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PRICING_TIERS;

    #[test]
    fn original_price_switches_to_discounted_layout() {
        let professional = PRICING_TIERS.iter().find(|t| t.original_price.is_some()).unwrap();
        assert_eq!(
            price_layout(professional),
            PriceLayout::Discounted {
                original: professional.original_price.unwrap(),
                price: professional.price,
                badge: professional.discount,
            }
        );
    }

    #[test]
    fn discount_badge_is_optional() {
        let tier = PricingTier {
            discount: None,
            original_price: Some("$900"),
            ..PRICING_TIERS[0].clone()
        };
        assert_eq!(
            price_layout(&tier),
            PriceLayout::Discounted { original: "$900", price: tier.price, badge: None }
        );
    }

    #[test]
    fn plain_layout_without_original_price() {
        let starter = &PRICING_TIERS[0];
        assert_eq!(price_layout(starter), PriceLayout::Plain { price: starter.price });
    }

    #[test]
    fn cards_are_staggered_by_index() {
        let delays: Vec<_> = (0..3).map(animation_delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300]);
    }
}
