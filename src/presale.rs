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

use crate::{utils, Result};
use ethcontract::{prelude::*, transport::DynTransport};

ethcontract::contract!("./artifacts/contracts/Presale.sol/Presale.json");

#[derive(Clone)]
pub struct PresaleClient {
  web3: Web3<DynTransport>,
  address: Address,
}

impl PresaleClient {
  pub fn new(web3: &Web3<DynTransport>, address: Option<&str>) -> Result<Self> {
    Ok(Self {
      address: utils::address_or_default(address)?,
      web3: web3.clone(),
    })
  }

  pub fn address(&self) -> H160 {
    self.address
  }

  pub fn set_address(&mut self, address: H160) {
    self.address = address;
  }

  // the beneficiary collects the presale proceeds
  pub async fn deploy(
    &mut self,
    from_account: Account,
    beneficiary: H160,
    gas: Option<u64>,
  ) -> Result<Address> {
    let nonce = self
      .web3
      .eth()
      .transaction_count(from_account.address(), None)
      .await?;
    let mut builder = Presale::builder(&self.web3, beneficiary)
      .from(from_account)
      .nonce(nonce);
    if let Some(g) = gas {
      builder = builder.gas(g.into());
    }
    let presale = builder.deploy().await?;
    self.address = presale.address();
    Ok(presale.address())
  }

  pub async fn add_admin(&self, from_account: Account, admin: H160) -> Result<()> {
    let presale = Presale::at(&self.web3, self.address);
    let nonce = self
      .web3
      .eth()
      .transaction_count(from_account.address(), None)
      .await?;
    presale
      .add_admin(admin)
      .from(from_account)
      .nonce(nonce)
      .send()
      .await?;
    Ok(())
  }

  pub async fn is_admin(&self, account: H160) -> Result<bool> {
    let presale = Presale::at(&self.web3, self.address);
    Ok(presale.is_admin(account).call().await?)
  }

  pub async fn beneficiary(&self) -> Result<H160> {
    let presale = Presale::at(&self.web3, self.address);
    Ok(presale.beneficiary().call().await?)
  }
}
