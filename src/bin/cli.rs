//! GraphBase CLI 工具
//!
//! 交互式命令行界面，在内存图上执行插入、删除与查询

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use graphbase::cli::{CommandCompleter, CommandResult, Session};
use graphbase::GraphConfig;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

const HISTORY_FILE: &str = ".graphbase_history";

#[derive(Parser, Debug)]
#[command(name = "graphbase-cli")]
#[command(about = "GraphBase 命令行工具", version)]
struct Args {
    /// 创建无向图（默认有向）
    #[arg(short, long)]
    undirected: bool,

    /// 顶点表预分配容量
    #[arg(long, default_value = "0")]
    vertex_capacity: usize,

    /// 执行以 ';' 分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（覆盖 RUST_LOG）
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let config = if args.undirected {
        GraphConfig::undirected()
    } else {
        GraphConfig::directed()
    }
    .with_vertex_capacity(args.vertex_capacity);

    let mut session = Session::new(config);

    // 单次执行模式
    if let Some(script) = args.execute {
        for line in script.split(';') {
            if !handle_result(session.execute_line(line)) {
                break;
            }
        }
        return Ok(());
    }

    println!("GraphBase CLI v{}", graphbase::VERSION);
    println!("=====================");
    println!(
        "{}图已创建，输入 'help' 查看命令列表，'quit' 退出\n",
        if config.directed { "有向" } else { "无向" }
    );

    let mut editor: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().context("无法初始化行编辑器")?;
    editor.set_helper(Some(CommandCompleter::new(session.graph())));

    let history = dirs::home_dir().map(|home| home.join(HISTORY_FILE));
    if let Some(path) = &history {
        // 首次运行时历史文件不存在
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("graphbase> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if !handle_result(session.execute_line(&line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        }
    }

    if let Some(path) = &history {
        editor
            .save_history(path)
            .with_context(|| format!("无法保存历史记录到 {:?}", path))?;
    }

    println!("再见！");
    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 打印结果，返回是否继续
fn handle_result(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(msg) => {
            println!("{}", msg.trim_end());
            true
        }
        CommandResult::Error(msg) => {
            println!("{} {}", "错误:".red().bold(), msg);
            true
        }
    }
}
