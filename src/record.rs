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

use crate::{plan::ContractKind, Result};
use ethcontract::Address;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Snapshot of a confirmed deployment, one JSON file per contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeployedContract {
  pub name: String,
  pub address: Address,
  pub block_number: Option<u64>,
  pub constructor_args: Vec<String>,
}

impl DeployedContract {
  pub fn new(
    kind: ContractKind,
    address: Address,
    block_number: Option<u64>,
    constructor_args: &[Address],
  ) -> Self {
    Self {
      name: kind.name().to_string(),
      address,
      block_number,
      constructor_args: constructor_args
        .iter()
        .map(|a| format!("0x{}", hex::encode(a.as_bytes())))
        .collect(),
    }
  }
}

// idempotent, leaves existing records alone
pub fn ensure_out_dir(dir: &Path) -> Result<()> {
  fs::create_dir_all(dir)?;
  Ok(())
}

pub fn record_path(dir: &Path, kind: ContractKind) -> PathBuf {
  dir.join(format!("{}.json", kind.name()))
}

pub fn write_record(dir: &Path, record: &DeployedContract) -> Result<PathBuf> {
  let path = dir.join(format!("{}.json", record.name));
  fs::write(&path, serde_json::to_vec_pretty(record)?)?;
  Ok(path)
}

pub fn read_record(dir: &Path, kind: ContractKind) -> Result<DeployedContract> {
  let raw = fs::read(record_path(dir, kind))?;
  Ok(serde_json::from_slice(&raw)?)
}
