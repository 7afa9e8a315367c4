pub mod airdrop;
pub mod chain;
pub mod config;
pub mod deployer;
pub mod erc721_factory;
pub mod error;
pub mod fake;
pub mod plan;
pub mod presale;
pub mod presales_factory;
pub mod record;
pub mod utils;

pub type Result<T> = std::result::Result<T, error::Error>;
