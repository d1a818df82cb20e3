// src/nn/mod.rs
// Network topology, learnable parameters, weight sharing and the forward pass.

pub mod activation;
pub mod config;
pub mod init;
pub mod losses;
pub mod network;
pub mod parameter;
pub mod state;
pub mod tags;

// Re-export common items
pub use activation::{Activation, LayerMeta};
pub use config::NetworkConfig;
pub use init::InitPolicy;
pub use losses::CostKind;
pub use network::Network;
pub use parameter::{ParamId, ParamKind, Parameter};
pub use state::NetState;
pub use tags::{Share, ShareTable, TagArena, TagId};
