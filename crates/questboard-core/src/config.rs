use std::collections::BTreeSet;

use anyhow::{
  Context,
  bail
};
use serde::Deserialize;
use tracing::{
  info,
  warn
};

use crate::request::QuestEndpoints;

fn default_api_base() -> String {
  "/api/quests".to_string()
}

fn default_theme_storage_key()
-> String {
  "theme".to_string()
}

fn default_show_completed() -> bool {
  true
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct ClientConfig {
  #[serde(default = "default_api_base")]
  pub api_base:          String,
  #[serde(
    default = "default_theme_storage_key"
  )]
  pub theme_storage_key: String,
  #[serde(
    default = "default_show_completed"
  )]
  pub show_completed:    bool,
  #[serde(default)]
  pub quest_types:       Vec<String>
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base:          default_api_base(
      ),
      theme_storage_key:
        default_theme_storage_key(),
      show_completed:
        default_show_completed(),
      quest_types:       Vec::new()
    }
  }
}

impl ClientConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<ClientConfig>(raw)
        .context(
          "failed to parse client \
           config"
        )?;
    config.sanitize()?;
    info!(
      api_base = %config.api_base,
      theme_storage_key = %config.theme_storage_key,
      show_completed = config.show_completed,
      quest_types = config.quest_types.len(),
      "loaded client config"
    );
    Ok(config)
  }

  /// Parses the bundled config, falling back to defaults when it is
  /// unusable.
  pub fn from_toml_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => config,
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "invalid client config; using \
           defaults"
        );
        Self::default()
      }
    }
  }

  pub fn endpoints(
    &self
  ) -> QuestEndpoints {
    QuestEndpoints::new(&self.api_base)
  }

  fn sanitize(
    &mut self
  ) -> anyhow::Result<()> {
    let base = self
      .api_base
      .trim()
      .trim_end_matches('/')
      .to_string();
    if base.is_empty() {
      bail!("api_base must not be empty");
    }
    self.api_base = base;

    if self
      .theme_storage_key
      .trim()
      .is_empty()
    {
      warn!(
        "blank theme storage key; using \
         default"
      );
      self.theme_storage_key =
        default_theme_storage_key();
    }

    let mut seen = BTreeSet::new();
    self.quest_types.retain(|value| {
      !value.trim().is_empty()
        && seen.insert(value.clone())
    });
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_takes_defaults() {
    let config =
      ClientConfig::from_toml_str("")
        .expect("parse empty config");
    assert_eq!(
      config,
      ClientConfig::default()
    );
    assert_eq!(
      config.endpoints().base(),
      "/api/quests"
    );
  }

  #[test]
  fn values_are_sanitized() {
    let config =
      ClientConfig::from_toml_str(
        r#"
api_base = "https://quests.example.com/api/quests/"
theme_storage_key = " "
show_completed = false
quest_types = ["Fetch", "", "Fetch", "Escort"]
"#
      )
      .expect("parse config");

    assert_eq!(
      config.api_base,
      "https://quests.example.com/api/quests"
    );
    assert_eq!(
      config.theme_storage_key,
      "theme"
    );
    assert!(!config.show_completed);
    assert_eq!(
      config.quest_types,
      vec![
        "Fetch".to_string(),
        "Escort".to_string()
      ]
    );
  }

  #[test]
  fn blank_api_base_is_rejected() {
    let err =
      ClientConfig::from_toml_str(
        "api_base = \"/\""
      )
      .expect_err("blank base");
    assert!(
      err
        .to_string()
        .contains("api_base")
    );
  }

  #[test]
  fn broken_toml_falls_back() {
    let config =
      ClientConfig::from_toml_or_default(
        "api_base = ["
      );
    assert_eq!(
      config,
      ClientConfig::default()
    );
  }
}
