//! Server-side HTML for the three checkout views.

use checkout::Effect;
use chrono::Datelike;
use content::{Platform, PlanCatalog, SiteCopy, BRAND, CHANNELS, PLATFORMS};
use minijinja::Environment;
use serde::Serialize;
use shared::{
    domain::{Language, Step},
    protocol::{OrderDraft, PlanSummary},
};

use crate::sessions::Session;

/// Everything a page needs from the session, copied out so rendering
/// happens without holding the session lock.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub step: Step,
    pub language: Language,
    pub selected_plan: String,
    pub draft: OrderDraft,
    pub error: Option<String>,
    pub submitting: bool,
    pub effect: Option<Effect>,
}

impl SessionView {
    /// Snapshots the session and consumes its pending scroll effect.
    pub fn capture(session: &mut Session) -> Self {
        Self {
            step: session.flow.step(),
            language: session.language,
            selected_plan: session.flow.selected_plan().to_string(),
            draft: session.draft.clone(),
            error: session.form_error(),
            submitting: session.flow.is_submitting(),
            effect: session.pending_effect.take(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub whatsapp_number: String,
}

impl SiteInfo {
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self
            .whatsapp_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        format!("https://wa.me/{digits}")
    }
}

#[derive(Serialize)]
struct PlatformTab {
    id: &'static str,
    name: &'static str,
    details: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct PageContext {
    lang: &'static str,
    brand: &'static str,
    year: i32,
    copy: &'static SiteCopy,
    scroll_delay_ms: Option<u128>,
    plans: Vec<PlanSummary>,
    channels: &'static [&'static str],
    platforms: Vec<PlatformTab>,
    install_steps: &'static [&'static str],
    selected_plan: Option<String>,
    draft: OrderDraft,
    error: Option<String>,
    submitting: bool,
    whatsapp_number: String,
    whatsapp_url: String,
}

#[derive(Clone)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("pricing.html", include_str!("../templates/pricing.html"))?;
        env.add_template("order.html", include_str!("../templates/order.html"))?;
        env.add_template("thank_you.html", include_str!("../templates/thank_you.html"))?;
        Ok(Self { env })
    }

    pub fn render(
        &self,
        view: &SessionView,
        platform: Option<&str>,
        site: &SiteInfo,
    ) -> Result<String, minijinja::Error> {
        let lang = view.language;
        let mut ctx = PageContext {
            lang: lang.code(),
            brand: BRAND,
            year: chrono::Utc::now().year(),
            copy: SiteCopy::for_language(lang),
            scroll_delay_ms: view.effect.map(|Effect::ScrollToTop { delay }| delay.as_millis()),
            plans: Vec::new(),
            channels: CHANNELS,
            platforms: Vec::new(),
            install_steps: &[],
            selected_plan: None,
            draft: OrderDraft::default(),
            error: None,
            submitting: false,
            whatsapp_number: site.whatsapp_number.clone(),
            whatsapp_url: site.whatsapp_url(),
        };

        let template = match view.step {
            Step::Pricing => {
                let active = Platform::find_or_default(platform);
                ctx.plans = PlanCatalog::standard().summaries(lang);
                ctx.platforms = PLATFORMS
                    .iter()
                    .map(|p| PlatformTab {
                        id: p.id,
                        name: p.name,
                        details: p.details,
                        active: p.id == active.id,
                    })
                    .collect();
                ctx.install_steps = active.steps(lang);
                "pricing.html"
            }
            Step::Form => {
                ctx.selected_plan = (!view.selected_plan.is_empty()).then(|| {
                    PlanCatalog::standard()
                        .display_name(&view.selected_plan, lang)
                        .into_owned()
                });
                ctx.draft = view.draft.clone();
                ctx.error = view.error.clone();
                ctx.submitting = view.submitting;
                "order.html"
            }
            Step::ThankYou => "thank_you.html",
        };

        self.env.get_template(template)?.render(ctx)
    }
}
