//! パス処理ユーティリティ
//!
//! ハンドル作成前のパス展開

use crate::error::{Result, TextFileError};
use std::path::PathBuf;

/// `~` と環境変数（`$VAR`, `${VAR}`）を展開
pub fn expand_path(path: &str) -> Result<PathBuf> {
    match shellexpand::full(path) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => Err(TextFileError::Path(format!(
            "環境変数展開エラー: {}",
            e
        ))),
    }
}
