//! Static copy for the pricing page: the plans we sell and the service
//! catalogue the support form offers.

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Route segment for the project brief page.
    pub slug: &'static str,
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    pub discount: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub delivery: &'static str,
    pub cta: &'static str,
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceDetail {
    pub id: &'static str,
    pub title: &'static str,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        slug: "starter",
        price: "$499",
        original_price: None,
        discount: None,
        description: "A polished landing page or small website to get your idea online fast.",
        features: &[
            "Up to 5 responsive pages",
            "Contact form integration",
            "Basic SEO setup",
            "1 round of revisions",
        ],
        delivery: "1-2 weeks",
        cta: "Start Your Project",
        popular: false,
    },
    PricingTier {
        name: "Professional",
        slug: "professional",
        price: "$1,499",
        original_price: Some("$1,999"),
        discount: Some("25% OFF"),
        description: "A full web application with authentication, a database and an admin area.",
        features: &[
            "Custom web application",
            "User accounts & authentication",
            "Database design & API",
            "Admin dashboard",
            "3 rounds of revisions",
        ],
        delivery: "3-5 weeks",
        cta: "Choose Professional",
        popular: true,
    },
    PricingTier {
        name: "Enterprise",
        slug: "enterprise",
        price: "$3,999+",
        original_price: None,
        discount: None,
        description: "AI-powered products, integrations and ongoing support for growing teams.",
        features: &[
            "AI & automation features",
            "Third-party integrations",
            "Scalable cloud deployment",
            "Priority support",
            "Unlimited revisions",
        ],
        delivery: "6+ weeks",
        cta: "Contact Sales",
        popular: false,
    },
];

pub const SERVICE_DETAILS: &[ServiceDetail] = &[
    ServiceDetail { id: "web-app", title: "Web App" },
    ServiceDetail { id: "mobile-app", title: "Mobile App" },
    ServiceDetail { id: "ai-solutions", title: "AI Solutions" },
    ServiceDetail { id: "ui-ux", title: "UI/UX Design" },
    ServiceDetail { id: "consulting", title: "Tech Consulting" },
];

/// Choices for the support form's service dropdown, catalogue order first.
pub fn service_options() -> Vec<&'static str> {
    SERVICE_DETAILS
        .iter()
        .map(|service| service.title)
        .chain(std::iter::once("Other"))
        .collect()
}

pub fn tier_by_name(name: &str) -> Option<&'static PricingTier> {
    PRICING_TIERS.iter().find(|tier| tier.name == name)
}

pub fn tier_by_slug(slug: &str) -> Option<&'static PricingTier> {
    PRICING_TIERS.iter().find(|tier| tier.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tier_names_and_slugs_are_unique() {
        let names: HashSet<_> = PRICING_TIERS.iter().map(|t| t.name).collect();
        let slugs: HashSet<_> = PRICING_TIERS.iter().map(|t| t.slug).collect();
        assert_eq!(names.len(), PRICING_TIERS.len());
        assert_eq!(slugs.len(), PRICING_TIERS.len());
    }

    #[test]
    fn service_options_end_with_other() {
        let options = service_options();
        assert_eq!(options.len(), SERVICE_DETAILS.len() + 1);
        assert_eq!(options.first(), Some(&"Web App"));
        assert_eq!(options.last(), Some(&"Other"));
    }

    #[test]
    fn tiers_resolve_by_name_and_slug() {
        let tier = tier_by_name("Professional").unwrap();
        assert_eq!(tier_by_slug(tier.slug), Some(tier));
        assert!(tier_by_name("Platinum").is_none());
    }
}
