mod boot;
mod strategy;

pub use boot::BootHandler;
pub use strategy::StrategyHandler;
