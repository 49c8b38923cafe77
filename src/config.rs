//! Startup configuration: default quote parameters and the fee schedule.
//!
//! The built-in schedule mirrors the standard sea-freight quote sheet. A
//! `quote.toml` in the platform config directory (or the file named by
//! `QUOTE_CONFIG`) replaces it.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{ContainerClass, Currency, FeeBasis, FeeItem, Parameters};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "LogiSRM";
const APP_NAME: &str = "LogisticsQuote";
const CONFIG_FILE: &str = "quote.toml";
pub const CONFIG_ENV: &str = "QUOTE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuoteConfig {
    #[serde(default = "default_supplier_name")]
    pub supplier_name: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub params: Parameters,
    #[serde(default = "default_fee_seeds")]
    pub fees: Vec<FeeSeed>,
}

/// A fee line as written in the config file. The container class is optional
/// and falls back to the code convention.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeeSeed {
    pub id: String,
    pub basis: FeeBasis,
    pub code: String,
    pub name: String,
    pub unit_price: Decimal,
    pub currency: Currency,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub container_class: Option<ContainerClass>,
}

impl FeeSeed {
    fn new(
        id: &str,
        basis: FeeBasis,
        code: &str,
        name: &str,
        unit_price: Decimal,
        currency: Currency,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            basis,
            code: code.to_string(),
            name: name.to_string(),
            unit_price,
            currency,
            description: description.map(str::to_string),
            container_class: None,
        }
    }

    pub fn to_fee_item(&self) -> FeeItem {
        let mut fee = FeeItem::new(
            self.id.clone(),
            self.basis,
            self.code.clone(),
            self.name.clone(),
            self.unit_price,
            self.currency,
        );
        if let Some(description) = &self.description {
            fee = fee.with_description(description.clone());
        }
        if let Some(class) = self.container_class {
            fee.container_class = class;
        }
        fee
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            supplier_name: default_supplier_name(),
            route: String::new(),
            params: Parameters::default(),
            fees: default_fee_seeds(),
        }
    }
}

impl QuoteConfig {
    pub fn fee_items(&self) -> Vec<FeeItem> {
        self.fees.iter().map(FeeSeed::to_fee_item).collect()
    }

    pub fn from_toml_str(contents: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Reads the config file if one exists. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let shown = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, &shown)?;
        info!(path = %shown, fees = config.fees.len(), "Loaded quote configuration");
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "Falling back to the built-in fee schedule");
                Self::default()
            }
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn default_supplier_name() -> String {
    "示例供应商 A".to_string()
}

fn default_fee_seeds() -> Vec<FeeSeed> {
    use Currency::{Rmb, Usd};
    use FeeBasis::{PerContainer, PerShipment};

    vec![
        FeeSeed::new("1", PerContainer, "OF", "海运费 (OF)", dec!(850), Usd, Some("按箱计费")),
        FeeSeed::new("2", PerContainer, "THC-20", "20GP码头操作费", dec!(850), Rmb, None),
        FeeSeed::new("3", PerContainer, "THC-40", "40GP/HQ码头操作费", dec!(1250), Rmb, None),
        FeeSeed::new("4", PerShipment, "DOC", "文件费 (DOC)", dec!(500), Rmb, None),
        FeeSeed::new("5", PerShipment, "CUS", "报关费 (CUS)", dec!(350), Rmb, Some("超过50项需加收")),
        FeeSeed::new("6", PerContainer, "PICKUP", "提货费 (PICK UP)", dec!(800), Rmb, None),
        FeeSeed::new("7", PerShipment, "CLEARANCE", "目的港清关派送", dec!(450), Usd, None),
    ]
}
