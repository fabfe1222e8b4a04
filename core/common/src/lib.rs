//! orelay 共通ライブラリ
//!
//! `orelay` コマンドの中核となる型・ポート・アダプターを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプター実装
pub mod adapter;
