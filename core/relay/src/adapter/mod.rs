//! アダプター（標準入出力・モデル解決）

pub mod model_resolver;
pub mod stdin_prompt_source;
pub mod stdio_relay_sink;

pub use model_resolver::{ModelResolver, DEFAULT_MODEL};
pub use stdin_prompt_source::StdinPromptSource;
pub use stdio_relay_sink::StdioRelaySink;
