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

use launcheth::airdrop::AirdropClient;
use launcheth::config;
use launcheth::erc721_factory::Erc721FactoryClient;
use launcheth::plan::ContractKind;
use launcheth::presale::PresaleClient;
use launcheth::presales_factory::PresalesFactoryClient;
use launcheth::record;
use launcheth::utils;
use std::path::Path;

#[tokio::main]
async fn main() {
  let net = std::env::var("NETWORK").expect("NETWORK REQUIRED");
  let out_dir = std::env::var("OUT_DIR").unwrap_or_else(|_| "./deploy".to_string());
  let (web3, _, conf) = config::init_web3(net.as_str(), false)
    .await
    .expect("failed to init web3");

  let dir = Path::new(out_dir.as_str());
  let airdrop_rec = record::read_record(dir, ContractKind::Airdrop).expect("no Airdrop record");
  let presale_rec = record::read_record(dir, ContractKind::Presale).expect("no Presale record");
  let erc721_rec =
    record::read_record(dir, ContractKind::Erc721Factory).expect("no ERC721Factory record");
  let factory_rec =
    record::read_record(dir, ContractKind::PresalesFactory).expect("no PresalesFactory record");

  let admin = conf.deployer_admin().expect("bad deployer_admin");

  let mut airdrop = AirdropClient::new(&web3, None).expect("couldnt make airdrop client");
  airdrop.set_address(airdrop_rec.address);
  let is_admin = airdrop
    .is_admin(admin)
    .await
    .expect("couldnt call isAdmin on Airdrop");
  assert!(is_admin, "deployer admin missing on Airdrop");
  println!("Deployer is admin of Airdrop");

  let mut presale = PresaleClient::new(&web3, None).expect("couldnt make presale client");
  presale.set_address(presale_rec.address);
  let is_admin = presale
    .is_admin(admin)
    .await
    .expect("couldnt call isAdmin on Presale");
  assert!(is_admin, "deployer admin missing on Presale");
  let factory_is_admin = presale
    .is_admin(factory_rec.address)
    .await
    .expect("couldnt call isAdmin on Presale");
  assert!(factory_is_admin, "PresalesFactory admin missing on Presale");
  println!("Deployer and PresalesFactory are admins of Presale");

  let beneficiary = presale.beneficiary().await.expect("couldnt call beneficiary");
  assert_eq!(
    beneficiary,
    conf.presale_beneficiary().expect("bad presale_beneficiary"),
    "wrong presale beneficiary"
  );

  let mut erc721 = Erc721FactoryClient::new(&web3, None).expect("couldnt make factory client");
  erc721.set_address(erc721_rec.address);
  let wired_presale = erc721.presale().await.expect("couldnt call presale");
  assert_eq!(wired_presale, presale_rec.address, "ERC721Factory presale mismatch");
  let wired_airdrop = erc721.airdrop().await.expect("couldnt call airdrop");
  assert_eq!(wired_airdrop, airdrop_rec.address, "ERC721Factory airdrop mismatch");
  let master = erc721.master().await.expect("couldnt call master");
  assert_eq!(master, utils::zero_address(), "ERC721Factory master should be unset");
  println!("ERC721Factory is wired to Presale and Airdrop");

  let mut factory = PresalesFactoryClient::new(&web3, None).expect("couldnt make presales client");
  factory.set_address(factory_rec.address);
  let count = factory
    .presales_count()
    .await
    .expect("couldnt call presalesCount");
  println!("PresalesFactory at {:?} with {} presales", factory.address(), count);

  println!("Launchpad wiring OK");
}
