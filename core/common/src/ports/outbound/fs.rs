//! ファイルシステム Outbound ポート
//!
//! ログ出力が必要とする最小限の操作のみを持つ。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のモックなど。
pub trait FileSystem: Send + Sync {
    /// ディレクトリを（親ごと）作成する。既に在れば何もしない
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;

    /// 追記モードでファイルを開く。無ければ作成する
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
}
