//! Resto Server - 餐厅管理系统服务端
//!
//! Backend for the "Restoran Saya" management system: the admin dashboard
//! (menu / category / table / staff / customer / payment-method /
//! reservation / order management plus a summary dashboard) and the
//! customer ordering flow (cart and checkout).
//!
//! All state is in-memory for the lifetime of the process. There is no
//! authentication and no persistence; every mutation is a synchronous,
//! local collection update behind a repository.
//!
//! # 模块结构
//!
//! ```text
//! resto-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 列表过滤和统计聚合
//! ├── cart/          # 购物车 (line-item ledger)
//! ├── payment/       # 支付确认网关
//! ├── db/            # 内存仓储层
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod db;
pub mod payment;
pub mod utils;

// Re-export 公共类型
pub use cart::{Cart, CartLine, CartTotals};
pub use core::{Config, Server, ServerState};
pub use db::Database;
pub use payment::{PaymentGateway, SimulatedGateway};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

/// Print startup banner
pub fn print_banner() {
    println!(
        r#"
    ____  _____ _____________   _____ __________ _    ________ ____
   / __ \/ ___//_  __/ __ \  | / / _// ____/ __ \ |  / / ____// __ \
  / /_/ / __/   / / / / / /  |/ /  |/___ \/ /_/ / | / / __/  / /_/ /
 / _, _/ /___  / / / /_/ / /|  / /|  ___/ / _, _/| |/ / /___ / _, _/
/_/ |_/_____/ /_/  \____/_/ |_/_/ |_|____/_/ |_| |___/_____//_/ |_|
"#
    );
    println!("  Restoran Saya - Management Server v{}", env!("CARGO_PKG_VERSION"));
    println!();
}
