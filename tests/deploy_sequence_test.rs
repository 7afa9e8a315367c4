use ethcontract::Address;
use launcheth::deployer::Deployer;
use launcheth::fake::{FakeCall, FakeLaunchpad};
use launcheth::plan::ContractKind;
use launcheth::record;
use std::fs;
use std::path::PathBuf;

fn rand_address() -> Address {
  Address::from_slice(&rand::random::<[u8; 20]>())
}

fn out_dir(tmp: &tempfile::TempDir) -> PathBuf {
  tmp.path().join("deploy")
}

#[tokio::test]
async fn writes_one_record_per_contract() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let chain = FakeLaunchpad::new();
  let deployer = Deployer::new(chain, rand_address(), rand_address(), out.clone());

  let deployment = deployer.run().await.expect("deploy failed");

  for kind in ContractKind::ALL.iter() {
    let rec = record::read_record(&out, *kind).expect("missing record");
    assert_eq!(rec.name, kind.name());
    assert!(!rec.address.is_zero(), "{} has no address", kind);
    assert_eq!(Some(rec.address), deployment.address(*kind));
  }
  assert_eq!(fs::read_dir(&out).expect("read_dir").count(), 4);
}

#[tokio::test]
async fn factory_record_references_recorded_addresses() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let deployer = Deployer::new(
    FakeLaunchpad::new(),
    rand_address(),
    rand_address(),
    out.clone(),
  );
  deployer.run().await.expect("deploy failed");

  let airdrop = record::read_record(&out, ContractKind::Airdrop).expect("no airdrop record");
  let presale = record::read_record(&out, ContractKind::Presale).expect("no presale record");
  let erc721 = record::read_record(&out, ContractKind::Erc721Factory).expect("no factory record");

  let hex_of = |a: Address| format!("0x{}", hex::encode(a.as_bytes()));
  assert_eq!(
    erc721.constructor_args,
    vec![
      hex_of(presale.address),
      hex_of(airdrop.address),
      hex_of(Address::zero()),
    ]
  );
}

#[tokio::test]
async fn presale_record_references_beneficiary() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let beneficiary = rand_address();
  let deployer = Deployer::new(FakeLaunchpad::new(), rand_address(), beneficiary, out.clone());
  deployer.run().await.expect("deploy failed");

  let presale = record::read_record(&out, ContractKind::Presale).expect("no presale record");
  assert_eq!(
    presale.constructor_args,
    vec![format!("0x{}", hex::encode(beneficiary.as_bytes()))]
  );
}

#[tokio::test]
async fn first_deploy_failure_writes_nothing() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let chain = FakeLaunchpad::new().with_failing_deploy(ContractKind::Airdrop);
  let deployer = Deployer::new(chain, rand_address(), rand_address(), out.clone());

  deployer.run().await.expect_err("deploy should fail");

  assert_eq!(fs::read_dir(&out).expect("read_dir").count(), 0);
}

#[tokio::test]
async fn admin_failure_leaves_record_unwritten() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let chain = FakeLaunchpad::new().with_failing_admin(ContractKind::Airdrop, 1);
  let deployer = Deployer::new(chain, rand_address(), rand_address(), out.clone());

  deployer.run().await.expect_err("deploy should fail");

  // the airdrop itself went out, but it is not recorded as provisioned
  assert!(!record::record_path(&out, ContractKind::Airdrop).exists());
  assert_eq!(fs::read_dir(&out).expect("read_dir").count(), 0);
}

#[tokio::test]
async fn final_grant_failure_keeps_all_records() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  // the second grant on Presale is the PresalesFactory one, after every
  // record has been written
  let chain = FakeLaunchpad::new().with_failing_admin(ContractKind::Presale, 2);
  let deployer = Deployer::new(chain, rand_address(), rand_address(), out.clone());

  deployer.run().await.expect_err("deploy should fail");

  assert_eq!(fs::read_dir(&out).expect("read_dir").count(), 4);
}

#[tokio::test]
async fn rerun_deploys_fresh_contracts() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let chain = FakeLaunchpad::new();
  let deployer = Deployer::new(&chain, rand_address(), rand_address(), out.clone());

  let first = deployer.run().await.expect("first run failed");
  let second = deployer.run().await.expect("second run failed");

  for kind in ContractKind::ALL.iter() {
    assert_ne!(first.address(*kind), second.address(*kind));
    // records now point at the second rollout
    let rec = record::read_record(&out, *kind).expect("missing record");
    assert_eq!(Some(rec.address), second.address(*kind));
  }
}

#[tokio::test]
async fn existing_output_dir_is_left_alone() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  fs::create_dir_all(&out).expect("mkdir");
  fs::write(out.join("notes.txt"), b"keep me").expect("write");

  let deployer = Deployer::new(
    FakeLaunchpad::new(),
    rand_address(),
    rand_address(),
    out.clone(),
  );
  deployer.run().await.expect("deploy failed");

  assert_eq!(fs::read(out.join("notes.txt")).expect("read"), b"keep me");
  assert_eq!(fs::read_dir(&out).expect("read_dir").count(), 5);
}

#[tokio::test]
async fn calls_follow_rollout_order() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let out = out_dir(&tmp);
  let chain = FakeLaunchpad::new();
  let admin = rand_address();
  let deployer = Deployer::new(&chain, admin, rand_address(), out);

  let deployment = deployer.run().await.expect("deploy failed");
  let factory = deployment
    .address(ContractKind::PresalesFactory)
    .expect("no factory address");

  assert_eq!(
    chain.calls(),
    vec![
      FakeCall::Deploy(ContractKind::Airdrop),
      FakeCall::AddAdmin {
        on: ContractKind::Airdrop,
        admin,
      },
      FakeCall::Deploy(ContractKind::Presale),
      FakeCall::AddAdmin {
        on: ContractKind::Presale,
        admin,
      },
      FakeCall::Deploy(ContractKind::Erc721Factory),
      FakeCall::Deploy(ContractKind::PresalesFactory),
      FakeCall::AddAdmin {
        on: ContractKind::Presale,
        admin: factory,
      },
    ]
  );
}
