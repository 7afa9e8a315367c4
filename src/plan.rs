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

use crate::{error::Error, Result};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractKind {
  Airdrop,
  Presale,
  Erc721Factory,
  PresalesFactory,
}

impl ContractKind {
  pub const ALL: [ContractKind; 4] = [
    ContractKind::Airdrop,
    ContractKind::Presale,
    ContractKind::Erc721Factory,
    ContractKind::PresalesFactory,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      ContractKind::Airdrop => "Airdrop",
      ContractKind::Presale => "Presale",
      ContractKind::Erc721Factory => "ERC721Factory",
      ContractKind::PresalesFactory => "PresalesFactory",
    }
  }

  // addresses of other contracts consumed by the constructor
  pub fn constructor_deps(&self) -> &'static [ContractKind] {
    match self {
      ContractKind::Erc721Factory => &[ContractKind::Presale, ContractKind::Airdrop],
      _ => &[],
    }
  }

  pub fn has_admin_role(&self) -> bool {
    matches!(self, ContractKind::Airdrop | ContractKind::Presale)
  }
}

impl fmt::Display for ContractKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grantee {
  ConfiguredAdmin,
  Deployed(ContractKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
  Deploy(ContractKind),
  GrantAdmin { on: ContractKind, to: Grantee },
  Persist(ContractKind),
}

// The fixed launchpad rollout. A contract's record is only persisted after
// the admin grants that precede it here, so the written file set doubles as
// a "fully provisioned" marker.
pub fn deployment_plan() -> Vec<Action> {
  use ContractKind::*;
  vec![
    Action::Deploy(Airdrop),
    Action::GrantAdmin {
      on: Airdrop,
      to: Grantee::ConfiguredAdmin,
    },
    Action::Persist(Airdrop),
    Action::Deploy(Presale),
    Action::GrantAdmin {
      on: Presale,
      to: Grantee::ConfiguredAdmin,
    },
    Action::Persist(Presale),
    Action::Deploy(Erc721Factory),
    Action::Persist(Erc721Factory),
    Action::Deploy(PresalesFactory),
    Action::Persist(PresalesFactory),
    // let the factory administer the presales it creates
    Action::GrantAdmin {
      on: Presale,
      to: Grantee::Deployed(PresalesFactory),
    },
  ]
}

// Every address consumed by an action must come from a contract deployed by
// an earlier action.
pub fn validate(plan: &[Action]) -> Result<()> {
  let mut deployed: BTreeSet<ContractKind> = BTreeSet::new();
  for action in plan {
    match *action {
      Action::Deploy(kind) => {
        if deployed.contains(&kind) {
          return Err(Error::Plan(format!("{} deployed twice", kind)));
        }
        for dep in kind.constructor_deps() {
          if !deployed.contains(dep) {
            return Err(Error::Plan(format!(
              "{} constructor needs {} before it is deployed",
              kind, dep
            )));
          }
        }
        deployed.insert(kind);
      }
      Action::GrantAdmin { on, to } => {
        if !deployed.contains(&on) {
          return Err(Error::Plan(format!("admin grant on undeployed {}", on)));
        }
        if !on.has_admin_role() {
          return Err(Error::Plan(format!("{} has no admin role", on)));
        }
        if let Grantee::Deployed(grantee) = to {
          if !deployed.contains(&grantee) {
            return Err(Error::Plan(format!(
              "admin grant to undeployed {} on {}",
              grantee, on
            )));
          }
        }
      }
      Action::Persist(kind) => {
        if !deployed.contains(&kind) {
          return Err(Error::Plan(format!("persist of undeployed {}", kind)));
        }
      }
    }
  }
  Ok(())
}
