use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use content::PlanCatalog;
use lead_gateway::{GatewayConfig, OrderGateway, DEFAULT_DEMO_DELAY};
use shared::{domain::Language, protocol::OrderData};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the plan catalog.
    Plans {
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// Send one test lead through the order gateway.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "trial")]
        plan: String,
        #[arg(long)]
        device_key: Option<String>,
        #[arg(long)]
        mac_address: Option<String>,
        /// Collection endpoint; omitted means demo mode.
        #[arg(long, env = "GOOGLE_SHEETS_URL")]
        endpoint: Option<String>,
        #[arg(long, default_value_t = DEFAULT_DEMO_DELAY.as_millis() as u64)]
        demo_delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();

    match cli.command {
        Command::Plans { lang } => {
            for plan in PlanCatalog::standard().all() {
                let marker = if plan.popular { " *" } else { "" };
                let hidden = if plan.listed { "" } else { " (unlisted)" };
                println!(
                    "{:<20} {:>8}  {}{marker}{hidden}",
                    plan.id,
                    plan.price,
                    plan.display_name(lang)
                );
            }
        }
        Command::Submit {
            name,
            phone,
            plan,
            device_key,
            mac_address,
            endpoint,
            demo_delay_ms,
        } => {
            let order = OrderData::new(name, phone, device_key, mac_address, plan)?;
            let config = GatewayConfig::from_endpoint(
                endpoint.as_deref(),
                Duration::from_millis(demo_delay_ms),
            )?;
            let gateway = OrderGateway::new(config);
            let result = gateway.submit(&order).await;
            match result.error {
                None => println!(
                    "submitted plan={} demo={}",
                    order.plan(),
                    gateway.is_demo()
                ),
                Some(error) => bail!("submission failed: {error}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_defaults_to_the_gateway_demo_delay() {
        let cli = Cli::try_parse_from(["tools", "submit", "--name", "A", "--phone", "1"])
            .expect("parse");
        let Command::Submit {
            plan,
            demo_delay_ms,
            ..
        } = cli.command
        else {
            panic!("expected submit");
        };
        assert_eq!(plan, "trial");
        assert_eq!(demo_delay_ms, 1000);
    }

    #[test]
    fn plans_accepts_upper_case_language() {
        let cli = Cli::try_parse_from(["tools", "plans", "--lang", "FR"]).expect("parse");
        assert!(matches!(cli.command, Command::Plans { lang: Language::Fr }));
    }
}
