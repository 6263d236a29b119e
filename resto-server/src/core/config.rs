//! 服务器配置

use crate::cart::DEFAULT_TAX_RATE_PERCENT;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TAX_RATE_PERCENT | 10 | 税率 (PPN, %) |
/// | PAYMENT_DELAY_MS | 2000 | 模拟支付确认延迟 (毫秒) |
/// | PAYMENT_TIMEOUT_MS | 10000 | 支付确认超时 (毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 TAX_RATE_PERCENT=11 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 税率 (百分比，应用于购物车小计)
    pub tax_rate_percent: u32,
    /// 模拟支付确认延迟 (毫秒)
    pub payment_delay_ms: u64,
    /// 支付确认超时 (毫秒)
    pub payment_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            tax_rate_percent: std::env::var("TAX_RATE_PERCENT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE_PERCENT),
            payment_delay_ms: std::env::var("PAYMENT_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            payment_timeout_ms: std::env::var("PAYMENT_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
