//! クリップボードアクセス
//!
//! システムクリップボードはプロセス外の共有状態なので、`TextFile` は
//! `ClipboardProvider` を引数として受け取る。テストでは `MemoryClipboard` を使う。
//!
//! ```
//! use textfile::clipboard::{ClipboardProvider, MemoryClipboard};
//!
//! let mut clipboard = MemoryClipboard::new();
//! clipboard.set_text("hello").unwrap();
//! assert_eq!(clipboard.get_text().unwrap(), "hello");
//! ```

use crate::error::ClipboardError;

/// テキスト形式のクリップボード操作
pub trait ClipboardProvider {
    /// 現在のテキスト内容を取得（テキストがなければ `ClipboardError::NoText`）
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// テキスト内容を設定（既存の内容は置き換え）
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// プロセス内クリップボード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期内容付きで作成
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn clear(&mut self) {
        self.contents = None;
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.contents.clone().ok_or(ClipboardError::NoText)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "system-clipboard")]
mod system {
    use super::ClipboardProvider;
    use crate::error::ClipboardError;

    impl From<arboard::Error> for ClipboardError {
        fn from(err: arboard::Error) -> Self {
            match err {
                arboard::Error::ContentNotAvailable | arboard::Error::ConversionFailure => {
                    ClipboardError::NoText
                }
                arboard::Error::ClipboardOccupied => ClipboardError::Occupied,
                other => ClipboardError::Unavailable {
                    message: other.to_string(),
                },
            }
        }
    }

    /// `arboard` によるシステムクリップボード
    ///
    /// 取得に失敗しても再試行しない。Linuxではインスタンスが生きている間のみ
    /// 設定した内容が保持される場合がある。
    pub struct SystemClipboard {
        inner: arboard::Clipboard,
    }

    impl SystemClipboard {
        /// クリップボードサービスに接続
        pub fn new() -> Result<Self, ClipboardError> {
            Ok(Self {
                inner: arboard::Clipboard::new()?,
            })
        }
    }

    impl std::fmt::Debug for SystemClipboard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SystemClipboard").finish_non_exhaustive()
        }
    }

    impl ClipboardProvider for SystemClipboard {
        fn get_text(&mut self) -> Result<String, ClipboardError> {
            self.inner.get_text().map_err(Into::into)
        }

        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.inner.set_text(text).map_err(Into::into)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory_clipboard_has_no_text() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text(), Err(ClipboardError::NoText));
    }

    #[test]
    fn test_memory_clipboard_replaces_contents() {
        let mut clipboard = MemoryClipboard::with_text("first");
        clipboard.set_text("second").unwrap();
        assert_eq!(clipboard.contents(), Some("second"));

        clipboard.clear();
        assert!(clipboard.get_text().is_err());
    }
}
