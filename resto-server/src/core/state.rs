//! 服务器状态

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use uuid::Uuid;

use crate::cart::Cart;
use crate::core::Config;
use crate::db::Database;
use crate::payment::{PaymentGateway, SimulatedGateway};

/// 购物车存储
///
/// One cart per ordering session, keyed by a server-issued id. Each
/// cart is an independent ledger; carts never observe each other.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<Uuid, Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new, empty cart and return its id
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.carts.insert(id, Cart::new());
        id
    }

    /// Snapshot of a cart's current state
    pub fn get(&self, id: &Uuid) -> Option<Cart> {
        self.carts.get(id).map(|c| c.clone())
    }

    /// Run `f` against the cart with `id`; None when the cart is unknown
    pub fn with_cart<R>(&self, id: &Uuid, f: impl FnOnce(&mut Cart) -> R) -> Option<R> {
        self.carts.get_mut(id).map(|mut c| f(&mut c))
    }

    /// Discard a cart entirely
    pub fn remove(&self, id: &Uuid) -> bool {
        self.carts.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务端的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Database | 内存数据库 |
/// | carts | Arc<CartStore> | 购物车存储 |
/// | payment | Arc<dyn PaymentGateway> | 支付确认网关 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存数据库
    pub db: Database,
    /// 购物车存储
    pub carts: Arc<CartStore>,
    /// 支付确认网关
    pub payment: Arc<dyn PaymentGateway>,
}

impl ServerState {
    /// Build the state for a live server: seeded database and the
    /// simulated payment gateway
    pub fn initialize(config: &Config) -> Self {
        let gateway = SimulatedGateway::new(Duration::from_millis(config.payment_delay_ms));
        Self {
            config: config.clone(),
            db: Database::seeded(),
            carts: Arc::new(CartStore::new()),
            payment: Arc::new(gateway),
        }
    }

    /// State with an empty database (tests)
    pub fn empty(config: &Config) -> Self {
        let gateway = SimulatedGateway::new(Duration::from_millis(0));
        Self {
            config: config.clone(),
            db: Database::new(),
            carts: Arc::new(CartStore::new()),
            payment: Arc::new(gateway),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carts_are_independent() {
        let store = CartStore::new();
        let a = store.create();
        let b = store.create();

        store.with_cart(&a, |cart| cart.add_or_increment(1, "Sate Ayam", 35000.0));

        assert_eq!(store.get(&a).unwrap().lines().len(), 1);
        assert!(store.get(&b).unwrap().is_empty());
    }

    #[test]
    fn unknown_cart_yields_none() {
        let store = CartStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
        assert!(store.with_cart(&Uuid::new_v4(), |_| ()).is_none());
        assert!(!store.remove(&Uuid::new_v4()));
    }
}
