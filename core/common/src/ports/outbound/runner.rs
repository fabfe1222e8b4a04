//! 推論コマンド実行の Outbound ポート
//!
//! プロンプトを子プロセスの標準入力へ渡し、stdout / stderr / 終了コードを
//! まとめて受け取る。relay は両ストリームをバイト単位でそのまま転送するため、
//! 出力は加工せずに保持する。

use crate::domain::ModelName;
use crate::error::Error;

/// 子プロセスの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOutput {
    /// 終了コード（シグナル終了は 1 に丸める）
    pub code: i32,
    /// 子プロセスの標準出力（無加工）
    pub stdout: Vec<u8>,
    /// 子プロセスの標準エラー（無加工）
    pub stderr: Vec<u8>,
}

/// 推論コマンド実行抽象（Outbound ポート）
///
/// 実装は `common::adapter::OllamaRunner`（std::process::Command）や
/// テスト用のモックなど。呼び出しは同期で、子プロセスの終了までブロックする。
pub trait InferenceRunner: Send + Sync {
    /// モデルを指定して推論コマンドを 1 回実行する
    ///
    /// 起動に失敗した場合のみ Err（Error::Unavailable / Error::Io）。
    /// 子プロセスの非ゼロ終了は RunnerOutput::code として返す。
    fn run(&self, model: &ModelName, prompt: &[u8]) -> Result<RunnerOutput, Error>;
}
