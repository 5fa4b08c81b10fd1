//! 日志系统初始化
//!
//! 按配置的 logging 段构建 tracing subscriber：env-filter 级别、
//! text/json 输出格式、可选的按天轮转日志文件。

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, StaticConfig};

/// Initialize the tracing subscriber from the loaded configuration.
///
/// Call once at startup, after the configuration is loaded. The returned
/// guard must stay alive until shutdown so buffered log lines are flushed.
///
/// # Panics
/// * If the log file or rolling appender cannot be created
/// * If a global subscriber is already installed
pub fn init_logging(config: &StaticConfig) -> WorkerGuard {
    let log_to_file = config
        .logging
        .file
        .as_deref()
        .is_some_and(|f| !f.is_empty());

    let (writer, guard) = tracing_appender::non_blocking(build_writer(&config.logging));

    // 配置的级别不合法时回退到 info
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!log_to_file);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    guard
}

/// 根据配置选择日志输出目标：stdout、普通文件或按天轮转文件
fn build_writer(logging: &LoggingConfig) -> Box<dyn Write + Send + Sync> {
    let Some(log_file) = logging.file.as_deref().filter(|f| !f.is_empty()) else {
        return Box::new(std::io::stdout());
    };

    if logging.enable_rotation {
        let path = Path::new(log_file);
        let dir = path.parent().unwrap_or(Path::new("."));
        let prefix = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("aliasmap");

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(logging.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    }
}
