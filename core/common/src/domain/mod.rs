//! ドメイン型（Newtype）
//!
//! String / Vec<u8> を直接運ばず、意味のある型に包んで境界を明確にする。

/// 標準入力から読んだプロンプト
///
/// バイト列をそのまま保持する。空判定（is_blank）だけはテキストとして行うが、
/// 子プロセスへ渡すのは常に元のバイト列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(Vec<u8>);

impl Prompt {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 空白のみ（または空）なら true
    ///
    /// 判定は lossy UTF-8 + trim。元のバイト列は変更しない。
    pub fn is_blank(&self) -> bool {
        String::from_utf8_lossy(&self.0).trim().is_empty()
    }
}

impl From<Vec<u8>> for Prompt {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// モデル名（qwen2.5-coder:7b 等）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModelName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_blank_empty() {
        assert!(Prompt::new(Vec::new()).is_blank());
    }

    #[test]
    fn test_prompt_is_blank_whitespace_only() {
        assert!(Prompt::new(b"  \n\t \r\n".to_vec()).is_blank());
    }

    #[test]
    fn test_prompt_not_blank() {
        assert!(!Prompt::new(b" hello \n".to_vec()).is_blank());
    }

    #[test]
    fn test_prompt_keeps_original_bytes() {
        // is_blank の trim は保持するバイト列に影響しない
        let prompt = Prompt::new(b"  hello  \n".to_vec());
        assert!(!prompt.is_blank());
        assert_eq!(prompt.as_bytes(), b"  hello  \n");
    }

    #[test]
    fn test_prompt_invalid_utf8_is_not_blank() {
        // 非 UTF-8 バイトは置換文字になり空白扱いされない
        assert!(!Prompt::new(vec![0xff, 0xfe]).is_blank());
    }

    #[test]
    fn test_model_name_deref_and_display() {
        let model = ModelName::new("qwen2.5-coder:7b");
        assert_eq!(&*model, "qwen2.5-coder:7b");
        assert_eq!(model.to_string(), "qwen2.5-coder:7b");
    }
}
