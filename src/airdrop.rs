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

ethcontract::contract!("./artifacts/contracts/Airdrop.sol/Airdrop.json");

#[derive(Clone)]
pub struct AirdropClient {
  web3: Web3<DynTransport>,
  address: Address,
}

impl AirdropClient {
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

  pub async fn deploy(
    &mut self,
    from_account: Account,
    gas: Option<u64>,
  ) -> Result<Address> {
    let nonce = self
      .web3
      .eth()
      .transaction_count(from_account.address(), None)
      .await?;
    let mut builder = Airdrop::builder(&self.web3).from(from_account).nonce(nonce);
    if let Some(g) = gas {
      builder = builder.gas(g.into());
    }
    let airdrop = builder.deploy().await?;
    self.address = airdrop.address();
    Ok(airdrop.address())
  }

  pub async fn add_admin(&self, from_account: Account, admin: H160) -> Result<()> {
    let airdrop = Airdrop::at(&self.web3, self.address);
    let nonce = self
      .web3
      .eth()
      .transaction_count(from_account.address(), None)
      .await?;
    airdrop
      .add_admin(admin)
      .from(from_account)
      .nonce(nonce)
      .send()
      .await?;
    Ok(())
  }

  pub async fn is_admin(&self, account: H160) -> Result<bool> {
    let airdrop = Airdrop::at(&self.web3, self.address);
    Ok(airdrop.is_admin(account).call().await?)
  }
}
