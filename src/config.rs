// Copyright 2022-2023 Launcheth Developers.
// This file is part of launcheth.

// launcheth is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// launcheth is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with launcheth.  If not, see <http://www.gnu.org/licenses/>.

use crate::{error::Error, utils, Result};
use ethcontract::{transport::DynTransport, Account, Http, PrivateKey, Web3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct NetworkConfig {
  pub chain_id: u64,
  pub eth_url: String,
  pub api_url: Option<String>,
  pub browser_url: Option<String>,
  pub private_key: String,
  pub gas_limit: Option<u64>,
  pub deployer_admin: String,
  pub presale_beneficiary: String,
}

impl NetworkConfig {
  // config problems are rejected here instead of surfacing as an opaque
  // RPC failure on the first call
  pub fn validate(&self) -> Result<()> {
    if self.eth_url.is_empty() {
      return Err(Error::Config("eth_url is missing".to_string()));
    }
    if self.private_key.is_empty() {
      return Err(Error::Config("private_key is missing".to_string()));
    }
    if self.chain_id == 0 {
      return Err(Error::Config("chain_id is missing".to_string()));
    }
    utils::parse_address(self.deployer_admin.as_str())
      .map_err(|_| Error::Config(format!("bad deployer_admin: {}", self.deployer_admin)))?;
    utils::parse_address(self.presale_beneficiary.as_str()).map_err(|_| {
      Error::Config(format!(
        "bad presale_beneficiary: {}",
        self.presale_beneficiary
      ))
    })?;
    Ok(())
  }

  pub fn deployer_admin(&self) -> Result<ethcontract::H160> {
    utils::parse_address(self.deployer_admin.as_str())
  }

  pub fn presale_beneficiary(&self) -> Result<ethcontract::H160> {
    utils::parse_address(self.presale_beneficiary.as_str())
  }
}

// utils for binaries
pub fn load_config(network: &str) -> Result<NetworkConfig> {
  load_config_from(Path::new("config"), network)
}

pub fn load_config_from(dir: &Path, network: &str) -> Result<NetworkConfig> {
  let fp = dir.join(format!("config.{}.json", network));
  let mut settings = config::Config::default();
  settings
    .merge(config::File::from(fp))
    .map_err(|e| Error::Config(e.to_string()))?;
  // LAUNCHETH_ETH_URL etc override the profile file
  settings
    .merge(config::Environment::with_prefix("LAUNCHETH"))
    .map_err(|e| Error::Config(e.to_string()))?;
  let conf = settings
    .try_into::<NetworkConfig>()
    .map_err(|e| Error::Config(e.to_string()))?;
  conf.validate()?;
  Ok(conf)
}

// utils for binaries
pub async fn init_web3(
  network: &str,
  check_balance: bool,
) -> Result<(Web3<DynTransport>, Account, NetworkConfig)> {
  let conf = load_config(network)?;
  let priv_key = PrivateKey::from_str(conf.private_key.trim_start_matches("0x"))
    .map_err(|e| Error::Config(format!("bad private_key: {:?}", e)))?;
  let web3 = Web3::new(DynTransport::new(Http::new(conf.eth_url.as_str())?));
  // either imported account from metamask
  let my_account = Account::Offline(priv_key, Some(conf.chain_id));

  if check_balance {
    let my_address = my_account.address();
    log::info!("deployer address {:?}", my_address);
    let balance = web3.eth().balance(my_address, None).await?;
    log::info!("deployer ETH balance {}", balance);
    if balance.is_zero() {
      return Err(Error::Config(
        "no ETH balance in the provided privkey (for deployment gas fees)".to_string(),
      ));
    }
  }
  Ok((web3, my_account, conf))
}
