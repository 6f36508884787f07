use serde::Serialize;
use shared::domain::Language;

pub const BRAND: &str = "AlphaTv";

/// Channels shown in the scrolling logo strip on the pricing view.
pub const CHANNELS: &[&str] = &[
    "Canal+",
    "beIN Sports",
    "Netflix",
    "Apple TV+",
    "HBO",
    "Disney+",
    "TF1",
    "France 2",
    "M6",
    "ARTE",
    "RMC Sport",
];

#[derive(Debug, Serialize)]
pub struct SiteCopy {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub shop: ShopCopy,
    pub install: InstallCopy,
    pub order: OrderCopy,
    pub thank_you: ThankYouCopy,
    pub footer: FooterCopy,
}

impl SiteCopy {
    pub fn for_language(lang: Language) -> &'static SiteCopy {
        match lang {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavCopy {
    pub home: &'static str,
    pub shop: &'static str,
    pub how_to_install: &'static str,
    pub order: &'static str,
    /// Label of the language toggle, naming the other language.
    pub switch_language: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub skip_to_pricing: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ShopCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub black_friday: &'static str,
    pub cta: &'static str,
    pub best_deal: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InstallCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub platforms: &'static str,
    pub step1: &'static str,
    pub step2: &'static str,
    pub step3: &'static str,
    pub install_instructions: &'static str,
    pub get_mac: &'static str,
    pub get_credentials: &'static str,
    pub video_tutorial: &'static str,
    pub tutorial_coming: &'static str,
    pub screenshot: &'static str,
    pub screenshot_coming: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OrderCopy {
    pub step_badge: &'static str,
    pub back: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub device_key_placeholder: &'static str,
    pub mac_address_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub required: &'static str,
    pub optional: &'static str,
    pub selected_plan: &'static str,
    pub missing_fields: &'static str,
    pub in_flight: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThankYouCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub message: &'static str,
    pub contact_number: &'static str,
    pub whatsapp: &'static str,
    pub go_home: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterCopy {
    pub tagline: &'static str,
    pub quick_links: &'static str,
    pub support: &'static str,
    pub legal: &'static str,
    pub home: &'static str,
    pub shop: &'static str,
    pub install: &'static str,
    pub contact: &'static str,
    pub faq: &'static str,
    pub terms: &'static str,
    pub privacy: &'static str,
    pub rights: &'static str,
}

static EN: SiteCopy = SiteCopy {
    nav: NavCopy {
        home: "Home",
        shop: "Plans",
        how_to_install: "Installation",
        order: "Order Now",
        switch_language: "Français",
    },
    hero: HeroCopy {
        title: "Premium IPTV",
        subtitle: "Black Friday Special",
        description: "Access 10,000+ channels in 4K. Free trial available!",
        cta: "View Pricing",
        skip_to_pricing: "See Our Plans",
    },
    shop: ShopCopy {
        title: "Choose Your Plan",
        subtitle: "All plans include 24h free trial",
        black_friday: "🔥 BLACK FRIDAY SALE 🔥",
        cta: "Subscribe Now",
        best_deal: "Best Deal",
    },
    install: InstallCopy {
        title: "How to Install",
        subtitle: "Get started in 3 easy steps",
        platforms: "Select Your Platform",
        step1: "Download Cap Player",
        step2: "Get Your Credentials",
        step3: "Start Watching",
        install_instructions: "Installation Instructions",
        get_mac: "Find Your MAC Address",
        get_credentials: "Get Credentials",
        video_tutorial: "Video Tutorial",
        tutorial_coming: "Tutorial video coming soon",
        screenshot: "Installation Screenshot",
        screenshot_coming: "Screenshot coming soon",
    },
    order: OrderCopy {
        step_badge: "Step 2: Your Information",
        back: "Back to Plans",
        title: "Complete Your Order",
        subtitle: "Fill in your details to get started",
        name_placeholder: "Full Name",
        phone_placeholder: "Phone Number",
        device_key_placeholder: "Device Key (Optional)",
        mac_address_placeholder: "MAC Address (Optional)",
        submit: "Place Order",
        submitting: "Processing...",
        required: "Required",
        optional: "Optional",
        selected_plan: "Selected Plan",
        missing_fields: "Please fill in your name and phone number.",
        in_flight: "Your order is already being processed.",
    },
    thank_you: ThankYouCopy {
        title: "Thank You!",
        subtitle: "Order Submitted Successfully",
        message: "Your request is being processed. We will contact you soon.",
        contact_number: "Contact Number",
        whatsapp: "Contact us on WhatsApp",
        go_home: "Return to Home",
    },
    footer: FooterCopy {
        tagline: "Premium IPTV Experience",
        quick_links: "Quick Links",
        support: "Support",
        legal: "Legal",
        home: "Home",
        shop: "Shop",
        install: "How to Install",
        contact: "Contact",
        faq: "FAQ",
        terms: "Terms of Service",
        privacy: "Privacy Policy",
        rights: "All rights reserved.",
    },
};

static FR: SiteCopy = SiteCopy {
    nav: NavCopy {
        home: "Accueil",
        shop: "Forfaits",
        how_to_install: "Installation",
        order: "Commander",
        switch_language: "English",
    },
    hero: HeroCopy {
        title: "IPTV Premium",
        subtitle: "Spécial Black Friday",
        description: "Accédez à plus de 10 000 chaînes en 4K. Essai gratuit disponible!",
        cta: "Voir les Tarifs",
        skip_to_pricing: "Voir Nos Forfaits",
    },
    shop: ShopCopy {
        title: "Choisissez Votre Forfait",
        subtitle: "Tous les forfaits incluent un essai gratuit de 24h",
        black_friday: "🔥 VENTE BLACK FRIDAY 🔥",
        cta: "S'abonner Maintenant",
        best_deal: "Meilleur Deal",
    },
    install: InstallCopy {
        title: "Comment Installer",
        subtitle: "Commencez en 3 étapes faciles",
        platforms: "Sélectionnez Votre Plateforme",
        step1: "Téléchargez Cap Player",
        step2: "Obtenez Vos Identifiants",
        step3: "Commencez à Regarder",
        install_instructions: "Instructions d'Installation",
        get_mac: "Trouvez Votre Adresse MAC",
        get_credentials: "Obtenir les Identifiants",
        video_tutorial: "Tutoriel Vidéo",
        tutorial_coming: "Vidéo tutoriel bientôt disponible",
        screenshot: "Capture d'écran d'installation",
        screenshot_coming: "Capture d'écran bientôt disponible",
    },
    order: OrderCopy {
        step_badge: "Étape 2: Vos Informations",
        back: "Retour aux Forfaits",
        title: "Complétez Votre Commande",
        subtitle: "Remplissez vos détails pour commencer",
        name_placeholder: "Nom Complet",
        phone_placeholder: "Numéro de Téléphone",
        device_key_placeholder: "Clé de l'Appareil (Optionnel)",
        mac_address_placeholder: "Adresse MAC (Optionnel)",
        submit: "Commander",
        submitting: "En cours...",
        required: "Requis",
        optional: "Optionnel",
        selected_plan: "Forfait Sélectionné",
        missing_fields: "Veuillez indiquer votre nom et votre numéro de téléphone.",
        in_flight: "Votre commande est déjà en cours de traitement.",
    },
    thank_you: ThankYouCopy {
        title: "Merci!",
        subtitle: "Commande Soumise avec Succès",
        message: "Votre demande est en cours. Nous allons vous contacter bientôt.",
        contact_number: "Numéro de Contact",
        whatsapp: "Contactez-nous sur WhatsApp",
        go_home: "Retour à l'Accueil",
    },
    footer: FooterCopy {
        tagline: "Expérience IPTV Premium",
        quick_links: "Liens Rapides",
        support: "Assistance",
        legal: "Légal",
        home: "Accueil",
        shop: "Boutique",
        install: "Comment Installer",
        contact: "Contact",
        faq: "FAQ",
        terms: "Conditions d'Utilisation",
        privacy: "Politique de Confidentialité",
        rights: "Tous droits réservés.",
    },
};
