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

use crate::{
  airdrop::AirdropClient, erc721_factory::Erc721FactoryClient, error::Error,
  plan::ContractKind, presale::PresaleClient, presales_factory::PresalesFactoryClient,
  record::DeployedContract, Result,
};
use async_trait::async_trait;
use ethcontract::{transport::DynTransport, Account, Address, Web3};

// The chain capability the deployer runs against. `deploy` resolves once the
// deployment transaction is confirmed; `add_admin` once the grant is mined.
#[async_trait]
pub trait Launchpad {
  async fn deploy(&self, kind: ContractKind, args: &[Address]) -> Result<DeployedContract>;
  async fn add_admin(&self, on: ContractKind, contract: Address, admin: Address) -> Result<()>;
}

#[async_trait]
impl<L: Launchpad + Sync> Launchpad for &L {
  async fn deploy(&self, kind: ContractKind, args: &[Address]) -> Result<DeployedContract> {
    (**self).deploy(kind, args).await
  }

  async fn add_admin(&self, on: ContractKind, contract: Address, admin: Address) -> Result<()> {
    (**self).add_admin(on, contract, admin).await
  }
}

#[derive(Clone)]
pub struct EthLaunchpad {
  web3: Web3<DynTransport>,
  account: Account,
  gas_limit: Option<u64>,
}

impl EthLaunchpad {
  pub fn new(
    web3: &Web3<DynTransport>,
    account: Account,
    gas_limit: Option<u64>,
  ) -> Self {
    Self {
      web3: web3.clone(),
      account,
      gas_limit,
    }
  }

  async fn confirmation_block(&self) -> Option<u64> {
    match self.web3.eth().block_number().await {
      Ok(n) => Some(n.as_u64()),
      Err(_) => None,
    }
  }

  fn expect_args(kind: ContractKind, args: &[Address], want: usize) -> Result<()> {
    if args.len() != want {
      return Err(Error::Plan(format!(
        "{} constructor takes {} args, got {}",
        kind,
        want,
        args.len()
      )));
    }
    Ok(())
  }
}

#[async_trait]
impl Launchpad for EthLaunchpad {
  async fn deploy(&self, kind: ContractKind, args: &[Address]) -> Result<DeployedContract> {
    let address = match kind {
      ContractKind::Airdrop => {
        Self::expect_args(kind, args, 0)?;
        AirdropClient::new(&self.web3, None)?
          .deploy(self.account.clone(), self.gas_limit)
          .await?
      }
      ContractKind::Presale => {
        Self::expect_args(kind, args, 1)?;
        PresaleClient::new(&self.web3, None)?
          .deploy(self.account.clone(), args[0], self.gas_limit)
          .await?
      }
      ContractKind::Erc721Factory => {
        Self::expect_args(kind, args, 3)?;
        Erc721FactoryClient::new(&self.web3, None)?
          .deploy(self.account.clone(), args[0], args[1], args[2], self.gas_limit)
          .await?
      }
      ContractKind::PresalesFactory => {
        Self::expect_args(kind, args, 0)?;
        PresalesFactoryClient::new(&self.web3, None)?
          .deploy(self.account.clone(), self.gas_limit)
          .await?
      }
    };
    let block_number = self.confirmation_block().await;
    Ok(DeployedContract::new(kind, address, block_number, args))
  }

  async fn add_admin(&self, on: ContractKind, contract: Address, admin: Address) -> Result<()> {
    match on {
      ContractKind::Airdrop => {
        let mut client = AirdropClient::new(&self.web3, None)?;
        client.set_address(contract);
        client.add_admin(self.account.clone(), admin).await
      }
      ContractKind::Presale => {
        let mut client = PresaleClient::new(&self.web3, None)?;
        client.set_address(contract);
        client.add_admin(self.account.clone(), admin).await
      }
      _ => Err(Error::Plan(format!("{} has no admin role", on))),
    }
  }
}
