//! Page modules - one per storefront view, plus the login gate

pub mod buy;
pub mod login;
pub mod market;
pub mod minecraft;
pub mod sell;

pub use buy::PaymentForm;
pub use login::LoginForm;
pub use market::MarketPage;
pub use minecraft::BuyMinecraftPage;
pub use sell::SellForm;
