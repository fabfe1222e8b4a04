//! Outbound ポート: ユースケースが標準入出力を使うための trait

pub mod prompt_source;
pub mod relay_sink;

pub use prompt_source::PromptSource;
pub use relay_sink::RelaySink;
