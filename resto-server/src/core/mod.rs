//! 核心模块
//!
//! - [`config`] - 环境变量配置
//! - [`state`] - 服务器状态 (内存数据库、购物车、支付网关)
//! - [`server`] - HTTP 服务器启动

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::{CartStore, ServerState};
