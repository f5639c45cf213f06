//! 命令行界面模块
//!
//! 命令解析、补全和结果打印

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_command, CommandResult, Session};
pub use completer::CommandCompleter;
pub use printer::{OutputFormat, Printer};
