//! 環境変数解決 Outbound ポート
//!
//! モデル名・推論コマンド・ログ出力先を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::ModelName;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
/// 空文字列の値は未設定として扱う。
pub trait EnvResolver: Send + Sync {
    /// モデル名を環境変数 ORELAY_MODEL から取得
    fn model_from_env(&self) -> Option<ModelName>;

    /// 推論コマンドのパスを環境変数 ORELAY_OLLAMA_BIN から取得
    fn runner_bin_from_env(&self) -> Option<PathBuf>;

    /// JSONL ログファイルのパスを環境変数 ORELAY_LOG から取得
    ///
    /// 未設定ならログ出力は無効（NoopLog）。
    fn log_path_from_env(&self) -> Option<PathBuf>;
}
