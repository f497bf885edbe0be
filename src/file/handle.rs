//! テキストファイルハンドル
//!
//! パスを保持し、呼び出しごとにファイルを開いて閉じる。内容はキャッシュしない。

use crate::clipboard::ClipboardProvider;
use crate::config::{AppendMode, TextFileOptions};
use crate::error::{Result, TextFileError};
use crate::file::io::{self, LineEndingProcessor};
use crate::file::path::expand_path;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// パスで識別されるテキストファイル
///
/// # Examples
/// ```
/// use textfile::TextFile;
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = TextFile::new(dir.path().join("notes.txt"));
/// file.write_all("hello").unwrap();
/// file.append(", world").unwrap();
/// assert_eq!(file.read_all().unwrap(), "hello, world");
/// assert!(file.contains("world"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
    options: TextFileOptions,
}

impl TextFile {
    /// デフォルト設定でハンドルを作成（パスの検証は最初の操作時）
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_options(path, TextFileOptions::default())
    }

    pub fn with_options<P: Into<PathBuf>>(path: P, options: TextFileOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// `~` と環境変数を展開してハンドルを作成
    pub fn expanded(path: &str) -> Result<Self> {
        Ok(Self::new(expand_path(path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> TextFileOptions {
        self.options
    }

    /// 通常ファイルとして存在するか
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// 全体を読み込み、改行をLFに統一して返す
    ///
    /// 末尾の改行は保持しない。空ファイルは `Ok("")`、読み込み失敗は `Err`。
    pub fn read_all(&self) -> Result<String> {
        let raw = io::read_raw(&self.path)?;
        Ok(LineEndingProcessor::join_lines(
            &LineEndingProcessor::split_lines(&raw),
        ))
    }

    /// 行ごとに読み込み（終端記号なし）
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let raw = io::read_raw(&self.path)?;
        Ok(LineEndingProcessor::split_lines(&raw))
    }

    /// ファイル全体を `text` で置き換え
    pub fn write_all(&self, text: &str) -> Result<()> {
        io::write_raw(&self.path, text, self.options.write_mode)
    }

    /// 各要素を区切りなしで連結して書き込み
    pub fn write_parts<I, S>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text: String = parts.into_iter().fold(String::new(), |mut acc, part| {
            acc.push_str(part.as_ref());
            acc
        });
        self.write_all(&text)
    }

    /// 末尾に `text` を追加（区切りは挿入しない）
    ///
    /// `AppendMode::ReadModifyWrite` では読み込みと書き込みの間に他の書き込みが
    /// 入り得る。存在しないファイルは空として扱い作成する。
    pub fn append(&self, text: &str) -> Result<()> {
        match self.options.append_mode {
            AppendMode::Native => io::append_raw(&self.path, text),
            AppendMode::ReadModifyWrite => {
                let current = match self.read_all() {
                    Ok(content) => content,
                    Err(TextFileError::File(e)) if e.is_not_found() => String::new(),
                    Err(e) => return Err(e),
                };
                self.write_all(&(current + text))
            }
        }
    }

    /// 内容を空にする
    pub fn clear(&self) -> Result<()> {
        self.write_all("")
    }

    /// 内容に `needle` が含まれるか（読み込めなければ `false`）
    pub fn contains(&self, needle: &str) -> bool {
        match self.read_all() {
            Ok(content) => content.contains(needle),
            Err(e) => {
                log::warn!("contains: cannot read {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// 内容を標準出力へ出力
    pub fn print(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock)
    }

    /// 内容を任意の出力先へ書き出し（末尾に改行は付けない）
    pub fn print_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let content = self.read_all()?;
        out.write_all(content.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| TextFileError::Output {
                message: e.to_string(),
            })
    }

    /// クリップボードのテキストでファイルを上書き
    ///
    /// クリップボードを読めない場合、ファイルは変更しない。
    pub fn paste_into(&self, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
        let text = clipboard.get_text()?;
        self.write_all(&text)?;
        log::debug!(
            "pasted {} bytes from clipboard into {}",
            text.len(),
            self.path.display()
        );
        Ok(())
    }

    /// ファイル内容をそのままクリップボードへコピー
    ///
    /// 改行コードも末尾の改行も変換しないので、`paste_into` で同じ内容に戻る。
    /// ファイルを読めない場合、クリップボードは変更しない。
    pub fn copy_from(&self, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
        let content = io::read_raw(&self.path)?;
        clipboard.set_text(&content)?;
        log::debug!(
            "copied {} bytes from {} to clipboard",
            content.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl AsRef<Path> for TextFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TextFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<PathBuf> for TextFile {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for TextFile {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for TextFile {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
