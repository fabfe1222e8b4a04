//! エラーハンドリング
//!
//! メッセージを持つ enum で統一し、終了コードは sysexits 準拠
//! （64 usage / 69 unavailable / 74 io / 78 config）。

use thiserror::Error as ThisError;

/// エラー型
///
/// 子プロセスの非ゼロ終了はエラーではない（usecase が終了コードとして返す）。
/// この型は relay 自身の失敗のみを表す。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgs(String),

    /// 外部コマンドを起動できない（EX_UNAVAILABLE）
    #[error("{0}")]
    Unavailable(String),

    /// I/O 失敗（EX_IOERR）
    #[error("{0}")]
    Io(String),

    /// JSON シリアライズ失敗（EX_IOERR）
    #[error("{0}")]
    Json(String),

    /// 環境変数解決の失敗（EX_CONFIG）
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgs(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Error::Unavailable(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgs(_) => 64,
            Error::Unavailable(_) => 69,
            Error::Io(_) => 74,
            Error::Json(_) => 74,
            Error::Env(_) => 78,
        }
    }

    /// usage 表示を伴うエラーかどうか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgs(_))
    }
}
