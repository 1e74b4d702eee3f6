//! Harvest command implementation.

use crate::cli::HarvestArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::read_titles;
use crate::output::Formatter;
use tracing::{info, warn};
use vitae_domain::Locale;
use vitae_extractor::Extractor;
use vitae_gatekeeper::Gatekeeper;
use vitae_harvester::{HarvestConfig, Harvester};
use vitae_wiki::{MediaWikiClient, WikibaseClient};

/// Execute the harvest command.
pub async fn execute_harvest(args: HarvestArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // Locale first: an unsupported code must fail before any input is read
    let locale = Locale::from_code(&args.locale)?;

    let harvest = harvest_config(&args, &config.harvest)?;
    let titles = read_titles(&args.list)?;
    if titles.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} contains no titles",
            args.list.display()
        )));
    }

    let extractor = Extractor::new(locale, Gatekeeper::new(config.validation.clone())?)?;
    let articles = MediaWikiClient::new(locale, &config.wiki)?;
    let mut knowledge_base = WikibaseClient::new(locale, &config.wiki)?;

    let username = args.username.clone().or_else(|| config.wiki.username.clone());
    match (username, args.password.clone()) {
        (Some(user), Some(password)) => {
            knowledge_base = knowledge_base.with_credentials(user, password);
        }
        _ if harvest.dry_run => {}
        _ => {
            return Err(CliError::Config(
                "bot credentials required: set wiki.username (or --username) and VITAE_BOT_PASSWORD".into(),
            ))
        }
    }

    info!(%locale, subjects = titles.len(), dry_run = harvest.dry_run, "starting harvest");
    let mut harvester = Harvester::new(extractor, articles, knowledge_base, harvest)?;

    let stop = harvester.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, finishing the current subject");
            stop.stop();
        }
    });

    let metrics = harvester
        .run(&titles, |report| {
            for line in formatter.subject_report(report) {
                println!("{}", line);
            }
        })
        .await;

    println!();
    println!("{}", formatter.summary_table(metrics));
    Ok(())
}

/// Apply command-line overrides to the configured pacing.
fn harvest_config(args: &HarvestArgs, base: &HarvestConfig) -> Result<HarvestConfig> {
    let config = HarvestConfig {
        min_delay_secs: args.min_delay.unwrap_or(base.min_delay_secs),
        max_delay_secs: args.max_delay.unwrap_or(base.max_delay_secs),
        dry_run: args.dry_run || base.dry_run,
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> HarvestArgs {
        HarvestArgs {
            locale: "sv".to_string(),
            list: PathBuf::from("titles.txt"),
            dry_run: false,
            min_delay: None,
            max_delay: None,
            username: None,
            password: None,
        }
    }

    #[test]
    fn test_config_without_overrides() {
        let config = harvest_config(&args(), &HarvestConfig::default()).unwrap();
        assert_eq!(config, HarvestConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let args = HarvestArgs {
            dry_run: true,
            min_delay: Some(1),
            max_delay: Some(3),
            ..args()
        };
        let config = harvest_config(&args, &HarvestConfig::default()).unwrap();
        assert!(config.dry_run);
        assert_eq!(config.min_delay_secs, 1);
        assert_eq!(config.max_delay_secs, 3);
    }

    #[test]
    fn test_inverted_override_rejected() {
        let args = HarvestArgs {
            min_delay: Some(100),
            ..args()
        };
        assert!(harvest_config(&args, &HarvestConfig::default()).is_err());
    }

    #[tokio::test]
    async fn test_unsupported_locale_before_reading_list() {
        let args = HarvestArgs {
            locale: "de".to_string(),
            list: PathBuf::from("/nonexistent/titles.txt"),
            ..args()
        };
        let result = execute_harvest(args, &Config::default(), &Formatter::new(false)).await;
        assert!(matches!(result, Err(CliError::Domain(_))));
    }

    #[tokio::test]
    async fn test_credentials_required_outside_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("titles.txt");
        std::fs::write(&list, "Greta Garbo\n").unwrap();

        let args = HarvestArgs { list, ..args() };
        let result = execute_harvest(args, &Config::default(), &Formatter::new(false)).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
