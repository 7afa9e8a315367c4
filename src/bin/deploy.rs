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

use env_logger::Env;
use launcheth::{chain::EthLaunchpad, config, deployer::Deployer, error::Error};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
  env_logger::init_from_env(Env::default().default_filter_or("info"));

  if let Err(err) = run().await {
    log::error!("deploy failed: {}", err);
    std::process::exit(1);
  }
}

async fn run() -> launcheth::Result<()> {
  let net = std::env::var("NETWORK").map_err(|_| Error::Config("NETWORK required".to_string()))?;
  let out_dir: PathBuf = std::env::var("OUT_DIR")
    .unwrap_or_else(|_| "./deploy".to_string())
    .into();

  println!("Start deploy on {}...", net);
  let (web3, my_account, conf) = config::init_web3(net.as_str(), true).await?;

  let chain = EthLaunchpad::new(&web3, my_account, conf.gas_limit);
  let deployer = Deployer::new(
    chain,
    conf.deployer_admin()?,
    conf.presale_beneficiary()?,
    out_dir,
  );
  let deployment = deployer.run().await?;

  println!("===============");
  for deployed in deployment.contracts.values() {
    println!("{} {:?}", deployed.name, deployed.address);
    if let Some(browser) = &conf.browser_url {
      if !browser.is_empty() {
        println!(
          "{}/address/{:?}",
          browser.trim_end_matches('/'),
          deployed.address
        );
      }
    }
  }
  println!("===============");
  println!("Completed deploy!");
  Ok(())
}
