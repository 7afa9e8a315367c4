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

use crate::Result;
use ethcontract::prelude::{Address, H160};
use std::str::FromStr;

pub fn zero_address() -> Address {
  "0x0000000000000000000000000000000000000000"
    .parse()
    .unwrap()
}

pub fn parse_address(address: &str) -> Result<H160> {
  let trimmed = address.trim_start_matches("0x");
  Ok(H160::from_str(trimmed)?)
}

pub fn address_or_default(address: Option<&str>) -> Result<H160> {
  if let Some(a) = address {
    parse_address(a)
  } else {
    Ok(zero_address())
  }
}
