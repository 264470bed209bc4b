//! 交互式命令行
//!
//! 命令解析与执行、Tab 补全、结果打印

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{Command, CommandResult, ConsoleGraph, Session, SharedGraph};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
