use crate::domain::a001_card::CardRecord;
use crate::domain::a002_profile::Profile;
use crate::shared::validation::ValidationSettings;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Startup data of the page: validation hooks, the profile and the seed cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub initial_cards: Vec<CardRecord>,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("page_config.json");

/// Parse and check a configuration document.
pub fn parse_config(json: &str) -> anyhow::Result<PageConfig> {
    let config: PageConfig =
        serde_json::from_str(json).context("page config is not valid JSON")?;
    for (index, card) in config.initial_cards.iter().enumerate() {
        card.validate()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("initialCards[{index}] is invalid"))?;
    }
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. `external`, the document supplied by the host page
/// 2. Falls back to embedded default config
pub fn load_config(external: Option<&str>) -> anyhow::Result<PageConfig> {
    if let Some(json) = external {
        match parse_config(json) {
            Ok(config) => {
                log::info!(
                    "Loaded page config from host page ({} cards)",
                    config.initial_cards.len()
                );
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring host page config: {:#}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).context("embedded page config is broken")
}
