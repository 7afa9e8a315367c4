use crate::{chain::Launchpad, error::Error, plan::ContractKind, record::DeployedContract, Result};
use async_trait::async_trait;
use ethcontract::Address;
use std::collections::BTreeMap;
use std::sync::Mutex;

// In-memory stand-in for the chain, for exercising the rollout sequence
// without a node. Addresses come off a monotonic counter, so a second run
// hands out fresh ones the way fresh deployments would.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakeCall {
  Deploy(ContractKind),
  AddAdmin { on: ContractKind, admin: Address },
}

#[derive(Default)]
struct FakeState {
  deployed: u64,
  block_number: u64,
  admin_calls: BTreeMap<ContractKind, usize>,
  calls: Vec<FakeCall>,
}

#[derive(Default)]
pub struct FakeLaunchpad {
  state: Mutex<FakeState>,
  fail_deploy: Option<ContractKind>,
  // (contract, nth grant on it, 1-based)
  fail_admin: Option<(ContractKind, usize)>,
}

impl FakeLaunchpad {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_failing_deploy(mut self, kind: ContractKind) -> Self {
    self.fail_deploy = Some(kind);
    self
  }

  pub fn with_failing_admin(mut self, kind: ContractKind, nth: usize) -> Self {
    self.fail_admin = Some((kind, nth));
    self
  }

  pub fn calls(&self) -> Vec<FakeCall> {
    self.state.lock().unwrap().calls.clone()
  }
}

#[async_trait]
impl Launchpad for FakeLaunchpad {
  async fn deploy(&self, kind: ContractKind, args: &[Address]) -> Result<DeployedContract> {
    if self.fail_deploy == Some(kind) {
      return Err(Error::Other(format!("{} deployment reverted", kind)));
    }
    let mut state = self.state.lock().unwrap();
    state.deployed += 1;
    state.block_number += 1;
    state.calls.push(FakeCall::Deploy(kind));
    let address = Address::from_low_u64_be(0xface_0000 + state.deployed);
    Ok(DeployedContract::new(
      kind,
      address,
      Some(state.block_number),
      args,
    ))
  }

  async fn add_admin(&self, on: ContractKind, _contract: Address, admin: Address) -> Result<()> {
    if !on.has_admin_role() {
      return Err(Error::Plan(format!("{} has no admin role", on)));
    }
    let mut state = self.state.lock().unwrap();
    let nth = state.admin_calls.entry(on).or_insert(0);
    *nth += 1;
    if self.fail_admin == Some((on, *nth)) {
      return Err(Error::Other(format!("addAdmin reverted on {}", on)));
    }
    state.block_number += 1;
    state.calls.push(FakeCall::AddAdmin { on, admin });
    Ok(())
  }
}
