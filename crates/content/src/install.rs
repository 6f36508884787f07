use shared::domain::Language;

pub const DEFAULT_PLATFORM: &str = "android";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    pub details: &'static str,
    steps_en: &'static [&'static str],
    steps_fr: &'static [&'static str],
}

impl Platform {
    pub fn steps(&self, lang: Language) -> &'static [&'static str] {
        match lang {
            Language::En => self.steps_en,
            Language::Fr => self.steps_fr,
        }
    }

    /// Looks up a platform tab, falling back to [`DEFAULT_PLATFORM`].
    pub fn find_or_default(id: Option<&str>) -> &'static Platform {
        id.and_then(|id| PLATFORMS.iter().find(|platform| platform.id == id))
            .or_else(|| PLATFORMS.iter().find(|p| p.id == DEFAULT_PLATFORM))
            .unwrap_or(&PLATFORMS[0])
    }
}

pub static PLATFORMS: [Platform; 5] = [
    Platform {
        id: "ios",
        name: "iOS & tvOS",
        details: "iPhone, iPad, Apple TV",
        steps_en: &[
            "Open the App Store on your device",
            "Search for \"Cap Player\"",
            "Download and install the app",
            "Open the app and select \"Login with Mac & Password\"",
            "Enter your MAC address and password provided by us",
            "Start watching!",
        ],
        steps_fr: &[
            "Ouvrez l'App Store sur votre appareil",
            "Recherchez \"Cap Player\"",
            "Téléchargez et installez l'application",
            "Ouvrez l'app et sélectionnez \"Connexion avec MAC & Mot de passe\"",
            "Entrez votre adresse MAC et le mot de passe fourni par nous",
            "Commencez à regarder !",
        ],
    },
    Platform {
        id: "android",
        name: "Android & Android TV",
        details: "Phones, Tablets, Android TV Boxes",
        steps_en: &[
            "Open Google Play Store",
            "Search for \"Cap Player\"",
            "Install the application",
            "Launch Cap Player",
            "Select \"Login with Mac & Password\"",
            "Enter your credentials",
            "Enjoy your content!",
        ],
        steps_fr: &[
            "Ouvrez Google Play Store",
            "Recherchez \"Cap Player\"",
            "Installez l'application",
            "Lancez Cap Player",
            "Sélectionnez \"Connexion avec MAC & Mot de passe\"",
            "Entrez vos identifiants",
            "Profitez de votre contenu !",
        ],
    },
    Platform {
        id: "streaming",
        name: "Roku & Fire TV",
        details: "Amazon Fire TV, Roku Stick/Box",
        steps_en: &[
            "Fire TV: Use Downloader app code \"628699\"",
            "Roku: Add channel with code \"CAPPLAYER\" or visit my.roku.com/account/add/CAPPLAYER",
            "Install Cap Player",
            "Open app and choose \"Login with Mac & Password\"",
            "Enter your credentials",
            "Start streaming!",
        ],
        steps_fr: &[
            "Fire TV: Utilisez le code Downloader \"628699\"",
            "Roku: Ajoutez la chaîne avec le code \"CAPPLAYER\" ou visitez my.roku.com/account/add/CAPPLAYER",
            "Installez Cap Player",
            "Ouvrez l'app et choisissez \"Connexion avec MAC & Mot de passe\"",
            "Entrez vos identifiants",
            "Commencez le streaming !",
        ],
    },
    Platform {
        id: "smarttv",
        name: "Smart TV",
        details: "Samsung (Tizen), LG (WebOS), Hisense (Vidaa), Philips/TCL (Zeasn)",
        steps_en: &[
            "Go to your TV's App Store (Samsung Apps, LG Content Store, etc.)",
            "Search for \"Cap Player\"",
            "Install the application",
            "Launch Cap Player",
            "Select \"Login with Mac & Password\"",
            "Enter your credentials",
            "Enjoy on the big screen!",
        ],
        steps_fr: &[
            "Allez sur l'App Store de votre TV (Samsung Apps, LG Content Store, etc.)",
            "Recherchez \"Cap Player\"",
            "Installez l'application",
            "Lancez Cap Player",
            "Sélectionnez \"Connexion avec MAC & Mot de passe\"",
            "Entrez vos identifiants",
            "Profitez sur grand écran !",
        ],
    },
    Platform {
        id: "windows",
        name: "Windows",
        details: "Windows 10/11 PC & Laptop",
        steps_en: &[
            "Visit capplayer.com/windows or Microsoft Store",
            "Download Cap Player",
            "Install and launch the application",
            "Select \"Login with Mac & Password\"",
            "Enter your credentials",
            "Watch on your PC!",
        ],
        steps_fr: &[
            "Visitez capplayer.com/windows ou Microsoft Store",
            "Téléchargez Cap Player",
            "Installez et lancez l'application",
            "Sélectionnez \"Connexion avec MAC & Mot de passe\"",
            "Entrez vos identifiants",
            "Regardez sur votre PC !",
        ],
    },
];
