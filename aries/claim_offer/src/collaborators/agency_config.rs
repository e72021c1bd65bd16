use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use shared::validation::url::validate_url;

use crate::errors::error::prelude::*;

/// Where claim requests get submitted. Read once per accept run, so a changed
/// agency takes effect on the next run.
#[cfg_attr(test, mockall::automock)]
pub trait AgencyUrlSource: Send + Sync {
    fn agency_url(&self) -> ClaimOfferResult<String>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyConfig {
    pub agency_url: String,
}

impl AgencyConfig {
    pub fn new(agency_url: &str) -> ClaimOfferResult<Self> {
        let config = Self {
            agency_url: agency_url.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(config: &str) -> ClaimOfferResult<Self> {
        let config: Self = serde_json::from_str(config).map_err(|err| {
            err_msg(
                ClaimOfferErrorKind::InvalidConfiguration,
                format!("Cannot deserialize agency config: {err}"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClaimOfferResult<()> {
        validate_url(&self.agency_url)
            .map(|_| ())
            .map_err(|err| ClaimOfferError::from(err).extend("Agency config has invalid agencyUrl"))
    }
}

impl AgencyUrlSource for AgencyConfig {
    fn agency_url(&self) -> ClaimOfferResult<String> {
        Ok(self.agency_url.clone())
    }
}

/// Agency configuration that can be switched while the wallet is running.
#[derive(Debug)]
pub struct SharedAgencyConfig {
    config: RwLock<AgencyConfig>,
}

impl SharedAgencyConfig {
    pub fn new(config: AgencyConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    pub fn set_agency_url(&self, agency_url: &str) -> ClaimOfferResult<()> {
        let config = AgencyConfig::new(agency_url)?;
        info!("Switching agency url to {}", config.agency_url);
        *self.config.write().map_err(|err| {
            err_msg(
                ClaimOfferErrorKind::LockError,
                format!("Unable to lock agency config: {err}"),
            )
        })? = config;
        Ok(())
    }
}

impl AgencyUrlSource for SharedAgencyConfig {
    fn agency_url(&self) -> ClaimOfferResult<String> {
        self.config
            .read()
            .map(|config| config.agency_url.clone())
            .map_err(|err| {
                err_msg(
                    ClaimOfferErrorKind::LockError,
                    format!("Unable to lock agency config: {err}"),
                )
            })
    }
}
