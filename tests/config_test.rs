use launcheth::config;
use launcheth::error::Error;
use std::fs;

fn write_profile(dir: &std::path::Path, network: &str, body: &str) {
  fs::write(dir.join(format!("config.{}.json", network)), body).expect("write profile");
}

#[test]
fn loads_a_complete_profile() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_profile(
    tmp.path(),
    "testnet",
    r#"{
      "chain_id": 11155111,
      "eth_url": "http://127.0.0.1:8545/",
      "api_url": "https://api-sepolia.etherscan.io/api",
      "browser_url": "https://sepolia.etherscan.io",
      "private_key": "0xdf57089febbacf7ba0bc227dafbffa9fc08a93fdc68e1e42411a14efcf23656e",
      "gas_limit": 60000000,
      "deployer_admin": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
      "presale_beneficiary": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
    }"#,
  );

  let conf = config::load_config_from(tmp.path(), "testnet").expect("load failed");
  assert_eq!(conf.chain_id, 11155111);
  assert_eq!(conf.eth_url, "http://127.0.0.1:8545/");
  assert_eq!(conf.gas_limit, Some(60000000));
  assert_eq!(
    conf.browser_url.as_deref(),
    Some("https://sepolia.etherscan.io")
  );
  conf.deployer_admin().expect("admin should parse");
  conf.presale_beneficiary().expect("beneficiary should parse");
}

#[test]
fn explorer_urls_and_gas_limit_are_optional() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_profile(
    tmp.path(),
    "bare",
    r#"{
      "chain_id": 1337,
      "eth_url": "http://127.0.0.1:8545/",
      "private_key": "0xdf57089febbacf7ba0bc227dafbffa9fc08a93fdc68e1e42411a14efcf23656e",
      "deployer_admin": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
      "presale_beneficiary": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
    }"#,
  );

  let conf = config::load_config_from(tmp.path(), "bare").expect("load failed");
  assert_eq!(conf.api_url, None);
  assert_eq!(conf.gas_limit, None);
}

#[test]
fn rejects_missing_credential() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_profile(
    tmp.path(),
    "nokey",
    r#"{
      "chain_id": 1337,
      "eth_url": "http://127.0.0.1:8545/",
      "private_key": "",
      "deployer_admin": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
      "presale_beneficiary": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
    }"#,
  );

  let err = config::load_config_from(tmp.path(), "nokey").unwrap_err();
  assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn rejects_missing_rpc_url() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_profile(
    tmp.path(),
    "nourl",
    r#"{
      "chain_id": 1337,
      "eth_url": "",
      "private_key": "0xdf57089febbacf7ba0bc227dafbffa9fc08a93fdc68e1e42411a14efcf23656e",
      "deployer_admin": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
      "presale_beneficiary": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
    }"#,
  );

  let err = config::load_config_from(tmp.path(), "nourl").unwrap_err();
  assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn rejects_bad_admin_address() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_profile(
    tmp.path(),
    "badadmin",
    r#"{
      "chain_id": 1337,
      "eth_url": "http://127.0.0.1:8545/",
      "private_key": "0xdf57089febbacf7ba0bc227dafbffa9fc08a93fdc68e1e42411a14efcf23656e",
      "deployer_admin": "not-an-address",
      "presale_beneficiary": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
    }"#,
  );

  let err = config::load_config_from(tmp.path(), "badadmin").unwrap_err();
  assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn rejects_unknown_network() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let err = config::load_config_from(tmp.path(), "missing").unwrap_err();
  assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}
