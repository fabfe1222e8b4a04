//! Inbound ポート: CLI からユースケースを起動する

use crate::cli::Config;
use common::error::Error;

/// Config を受け取りコマンドを実行する（実装は main の Runner）
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
