//! 転送先ストリームの Outbound ポート
//!
//! 子プロセスの出力をバイト単位でそのまま書き出す。成功時は stdout のみ、
//! 失敗時は stderr のみに書く、という使い分けは usecase が行う。

use common::error::Error;

/// 転送先（Outbound ポート）
///
/// 実装は `adapter::StdioRelaySink` やテスト用のキャプチャなど。
pub trait RelaySink: Send + Sync {
    /// 標準出力へ無加工で書き出す
    fn write_stdout(&self, bytes: &[u8]) -> Result<(), Error>;

    /// 標準エラーへ無加工で書き出す
    fn write_stderr(&self, bytes: &[u8]) -> Result<(), Error>;
}
