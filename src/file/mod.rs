//! ファイル操作モジュール
//!
//! - 読み込み失敗は `Err` で通知（空ファイルと区別）
//! - 操作ごとにファイルを開閉し、内容はキャッシュしない
//! - ファイルロックなし、同時アクセスは非対応

pub mod handle;
pub mod io;
pub mod path;

pub use handle::TextFile;
pub use io::LineEndingProcessor;
pub use path::expand_path;
