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
  chain::Launchpad,
  error::Error,
  plan::{self, Action, ContractKind, Grantee},
  record::{self, DeployedContract},
  utils, Result,
};
use ethcontract::Address;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Deployment {
  pub contracts: BTreeMap<ContractKind, DeployedContract>,
}

impl Deployment {
  pub fn address(&self, kind: ContractKind) -> Option<Address> {
    self.contracts.get(&kind).map(|c| c.address)
  }
}

// Walks the deployment plan strictly in order against any Launchpad. Each
// action completes (transaction confirmed) before the next one starts.
// Failures short-circuit; whatever is already on chain stays there.
pub struct Deployer<L> {
  chain: L,
  admin: Address,
  beneficiary: Address,
  out_dir: PathBuf,
}

impl<L: Launchpad> Deployer<L> {
  pub fn new(chain: L, admin: Address, beneficiary: Address, out_dir: PathBuf) -> Self {
    Self {
      chain,
      admin,
      beneficiary,
      out_dir,
    }
  }

  pub async fn run(&self) -> Result<Deployment> {
    self.run_plan(&plan::deployment_plan()).await
  }

  pub async fn run_plan(&self, actions: &[Action]) -> Result<Deployment> {
    plan::validate(actions)?;
    record::ensure_out_dir(&self.out_dir)?;
    let mut contracts: BTreeMap<ContractKind, DeployedContract> = BTreeMap::new();
    for action in actions {
      match *action {
        Action::Deploy(kind) => {
          let args = self.constructor_args(kind, &contracts)?;
          log::info!("deploying {}", kind);
          let deployed = self.chain.deploy(kind, &args).await?;
          log::info!("{} {:?}", kind, deployed.address);
          contracts.insert(kind, deployed);
        }
        Action::GrantAdmin { on, to } => {
          let contract = Self::address_of(on, &contracts)?;
          let admin = match to {
            Grantee::ConfiguredAdmin => self.admin,
            Grantee::Deployed(kind) => Self::address_of(kind, &contracts)?,
          };
          log::info!("adding admin {:?} on {}", admin, on);
          self.chain.add_admin(on, contract, admin).await?;
        }
        Action::Persist(kind) => {
          let deployed = contracts
            .get(&kind)
            .ok_or_else(|| Error::Plan(format!("persist of undeployed {}", kind)))?;
          let path = record::write_record(&self.out_dir, deployed)?;
          log::info!("wrote {}", path.display());
        }
      }
    }
    Ok(Deployment { contracts })
  }

  fn constructor_args(
    &self,
    kind: ContractKind,
    contracts: &BTreeMap<ContractKind, DeployedContract>,
  ) -> Result<Vec<Address>> {
    Ok(match kind {
      ContractKind::Airdrop | ContractKind::PresalesFactory => vec![],
      ContractKind::Presale => vec![self.beneficiary],
      ContractKind::Erc721Factory => vec![
        Self::address_of(ContractKind::Presale, contracts)?,
        Self::address_of(ContractKind::Airdrop, contracts)?,
        // the master copy slot stays empty at rollout
        utils::zero_address(),
      ],
    })
  }

  fn address_of(
    kind: ContractKind,
    contracts: &BTreeMap<ContractKind, DeployedContract>,
  ) -> Result<Address> {
    contracts
      .get(&kind)
      .map(|c| c.address)
      .ok_or_else(|| Error::Plan(format!("{} is not deployed yet", kind)))
  }
}
