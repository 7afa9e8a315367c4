use ethcontract::{transport::DynTransport, Account, Http, Web3};
use launcheth::chain::EthLaunchpad;
use launcheth::deployer::Deployer;
use launcheth::plan::ContractKind;
use launcheth::presale::PresaleClient;
use launcheth::record;

// Needs a dev node on localhost:8545 (hardhat node or anvil) with the
// launchpad artifacts compiled in. Run with --ignored.
#[tokio::test]
#[ignore]
async fn deploys_launchpad_against_local_node() {
  dotenv::dotenv().ok();
  let eth_url = std::env::var("ETH_URL").unwrap_or("http://localhost:8545".to_string());
  let web3 = Web3::new(DynTransport::new(
    Http::new(eth_url.as_str()).expect("couldnt setup web3"),
  ));

  let accounts = web3.eth().accounts().await.expect("getAccounts failed");
  let zero_account = Account::Local(accounts[0], None);
  let admin = accounts[1];
  let beneficiary = accounts[2];

  let tmp = tempfile::tempdir().expect("tempdir");
  let out = tmp.path().join("deploy");
  let chain = EthLaunchpad::new(&web3, zero_account, None);
  let deployer = Deployer::new(chain, admin, beneficiary, out.clone());
  let deployment = deployer.run().await.expect("deploy failed");

  let presale_rec = record::read_record(&out, ContractKind::Presale).expect("no presale record");
  assert_eq!(Some(presale_rec.address), deployment.address(ContractKind::Presale));

  let mut presale = PresaleClient::new(&web3, None).expect("couldnt make presale client");
  presale.set_address(presale_rec.address);
  assert!(presale.is_admin(admin).await.expect("couldnt call isAdmin"));
  let factory = deployment
    .address(ContractKind::PresalesFactory)
    .expect("no factory address");
  assert!(presale.is_admin(factory).await.expect("couldnt call isAdmin"));
  assert_eq!(
    presale.beneficiary().await.expect("couldnt call beneficiary"),
    beneficiary
  );
}
