//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入文件。
//! core / provider 使用 `log` 宏，经 tracing-log 桥接到同一个订阅器。

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "translation-guess";
const LOG_FILE: &str = "translation-guess.log";

/// 日志文件路径：`<data_local_dir>/translation-guess/translation-guess.log`
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILE)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// 初始化日志
///
/// `filter` 使用 `EnvFilter` 语法，无效时回退到 `info`。
pub fn init_logging(filter: &str) -> Result<PathBuf> {
    let path = log_file_path();
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(path)
}
