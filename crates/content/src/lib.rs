//! Static storefront content: the plan catalog, the bilingual copy tables and
//! the per-platform install guide. Everything here is immutable and lives for
//! the whole process.

pub mod copy;
pub mod install;
pub mod plans;

pub use copy::{SiteCopy, BRAND, CHANNELS};
pub use install::{Platform, DEFAULT_PLATFORM, PLATFORMS};
pub use plans::{Feature, Plan, PlanCatalog};

use shared::domain::Language;

/// A string available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub fr: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, fr: &'static str) -> Self {
        Self { en, fr }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Fr => self.fr,
        }
    }
}
