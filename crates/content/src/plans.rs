use std::borrow::Cow;

use shared::{domain::Language, protocol::PlanSummary};

use crate::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    FreeTrial,
    Channels,
    Quality4k,
    Vod,
    Support,
    MultiDevice,
    Updates,
}

impl Feature {
    pub fn label(self, lang: Language) -> &'static str {
        let text = match self {
            Feature::FreeTrial => Localized::new("24h Free Trial", "Essai Gratuit 24h"),
            Feature::Channels => Localized::new("10,000+ Channels", "10 000+ Chaînes"),
            Feature::Quality4k => Localized::new("4K Quality", "Qualité 4K"),
            Feature::Vod => Localized::new("VOD Library", "Bibliothèque VOD"),
            Feature::Support => Localized::new("24/7 Support", "Assistance 24/7"),
            Feature::MultiDevice => Localized::new("Multi-Device", "Multi-Appareils"),
            Feature::Updates => Localized::new("Regular Updates", "Mises à Jour Régulières"),
        };
        text.get(lang)
    }
}

const BASE_FEATURES: &[Feature] = &[
    Feature::FreeTrial,
    Feature::Channels,
    Feature::Quality4k,
    Feature::Vod,
    Feature::Support,
    Feature::MultiDevice,
];

const FULL_FEATURES: &[Feature] = &[
    Feature::FreeTrial,
    Feature::Channels,
    Feature::Quality4k,
    Feature::Vod,
    Feature::Support,
    Feature::MultiDevice,
    Feature::Updates,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    /// `None` for the trial.
    pub months: Option<u8>,
    pub devices: u8,
    pub price: &'static str,
    pub old_price: Option<&'static str>,
    /// Amount saved against `old_price`, e.g. `€30`.
    pub savings: Option<&'static str>,
    pub popular: bool,
    /// Whether the plan gets a card on the pricing view.
    pub listed: bool,
    pub features: &'static [Feature],
    display_name: Localized,
}

impl Plan {
    pub fn name(&self, lang: Language) -> String {
        match self.months {
            Some(months) => {
                let unit = Localized::new("Months", "Mois").get(lang);
                format!("{months} {unit}")
            }
            None => Localized::new("Free Trial", "Essai Gratuit").get(lang).to_string(),
        }
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        self.display_name.get(lang)
    }

    pub fn devices_label(&self, lang: Language) -> String {
        let unit = if self.devices == 1 {
            Localized::new("Device", "Appareil")
        } else {
            Localized::new("Devices", "Appareils")
        };
        format!("{} {}", self.devices, unit.get(lang))
    }

    pub fn savings_label(&self, lang: Language) -> Option<String> {
        let prefix = Localized::new("Save", "Économisez").get(lang);
        self.savings.map(|amount| format!("{prefix} {amount}"))
    }

    pub fn feature_labels(&self, lang: Language) -> Vec<String> {
        self.features
            .iter()
            .map(|feature| feature.label(lang).to_string())
            .collect()
    }

    pub fn summary(&self, lang: Language) -> PlanSummary {
        PlanSummary {
            id: self.id.to_string(),
            name: self.name(lang),
            display_name: self.display_name(lang).to_string(),
            price: self.price.to_string(),
            old_price: self.old_price.map(str::to_string),
            savings: self.savings_label(lang),
            devices: self.devices_label(lang),
            features: self.feature_labels(lang),
            popular: self.popular,
        }
    }
}

static PLANS: [Plan; 4] = [
    Plan {
        id: "trial",
        months: None,
        devices: 1,
        price: "€0",
        old_price: None,
        savings: None,
        popular: false,
        listed: false,
        features: &[Feature::FreeTrial, Feature::Channels, Feature::Quality4k],
        display_name: Localized::new("Free Trial (24-48h)", "Essai Gratuit (24-48h)"),
    },
    Plan {
        id: "6months-1device",
        months: Some(6),
        devices: 1,
        price: "€39.99",
        old_price: Some("€49.99"),
        savings: Some("€10"),
        popular: false,
        listed: true,
        features: BASE_FEATURES,
        display_name: Localized::new(
            "6 Months - 1 Device (€39.99)",
            "6 Mois - 1 Appareil (€39.99)",
        ),
    },
    Plan {
        id: "12months-1device",
        months: Some(12),
        devices: 1,
        price: "€59.99",
        old_price: Some("€89.99"),
        savings: Some("€30"),
        popular: true,
        listed: true,
        features: FULL_FEATURES,
        display_name: Localized::new(
            "12 Months - 1 Device (€59.99)",
            "12 Mois - 1 Appareil (€59.99)",
        ),
    },
    Plan {
        id: "12months-2devices",
        months: Some(12),
        devices: 2,
        price: "€99",
        old_price: Some("€159.99"),
        savings: Some("€60"),
        popular: false,
        listed: true,
        features: FULL_FEATURES,
        display_name: Localized::new(
            "12 Months - 2 Devices (€99)",
            "12 Mois - 2 Appareils (€99)",
        ),
    },
];

static STANDARD: PlanCatalog = PlanCatalog { plans: &PLANS };

#[derive(Debug)]
pub struct PlanCatalog {
    plans: &'static [Plan],
}

impl PlanCatalog {
    pub fn standard() -> &'static PlanCatalog {
        &STANDARD
    }

    pub fn get(&self, id: &str) -> Option<&'static Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn all(&self) -> &'static [Plan] {
        self.plans
    }

    pub fn listed(&self) -> impl Iterator<Item = &'static Plan> {
        self.plans.iter().filter(|plan| plan.listed)
    }

    /// Localized display name, or the raw identifier for unknown plans.
    pub fn display_name<'a>(&self, id: &'a str, lang: Language) -> Cow<'a, str> {
        match self.get(id) {
            Some(plan) => Cow::Borrowed(plan.display_name(lang)),
            None => Cow::Borrowed(id),
        }
    }

    pub fn summaries(&self, lang: Language) -> Vec<PlanSummary> {
        self.listed().map(|plan| plan.summary(lang)).collect()
    }
}
