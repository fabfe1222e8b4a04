//! ドメイン型
//!
//! CLI の解析結果をコマンドとして表す。

use common::domain::ModelName;

/// orelay のコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum RelayCommand {
    /// ヘルプを表示して終了
    Help,
    /// 標準入力のプロンプトを推論コマンドへ転送
    Relay {
        /// -m / --model で明示されたモデル名（未指定なら環境変数→既定値）
        model: Option<ModelName>,
    },
}
