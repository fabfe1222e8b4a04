//! プロンプト読み込みの Outbound ポート
//!
//! 標準入力を EOF まで読み切ってプロンプトのバイト列を得る。

use common::error::Error;

/// プロンプトの供給元（Outbound ポート）
///
/// 実装は `adapter::StdinPromptSource` やテスト用の固定値など。
pub trait PromptSource: Send + Sync {
    /// 入力を EOF まで読み切る（無加工のバイト列）
    fn read_to_end(&self) -> Result<Vec<u8>, Error>;
}
