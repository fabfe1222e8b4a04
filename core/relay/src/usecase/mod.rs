//! ユースケース

pub mod relay;

pub use relay::RelayUseCase;
