//! 控制台命令处理
//!
//! 解析命令行输入并在共享图上执行

use super::printer::{check_vertical_display, PrintMode, Printer};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// 控制台使用的图：顶点和边元素均为字符串
pub type ConsoleGraph = Graph<String, String>;

/// 会话与补全器共享的图句柄
pub type SharedGraph = Arc<RwLock<ConsoleGraph>>;

/// 默认边权重
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// 控制台命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    Show,
    Vertices,
    Edges,
    Clone,
    Clear,
    InsertVertex(String),
    RemoveVertex(String),
    Key(String),
    InsertEdge {
        origin: String,
        destination: String,
        element: String,
        weight: f64,
    },
    RemoveEdge(String, String),
    Adjacent(String),
    Outgoing(String),
    Incoming(String),
    Degree(String),
}

impl Command {
    /// 解析一行输入
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let cmd = parts
            .next()
            .ok_or_else(|| GraphError::CommandError("空命令".to_string()))?
            .to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match cmd.as_str() {
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "stats" | "info" => Command::Stats,
            "show" | "print" => Command::Show,
            "vertices" => Command::Vertices,
            "edges" => Command::Edges,
            "clone" => Command::Clone,
            "clear" => Command::Clear,
            "vertex" | "v" => Command::InsertVertex(single(&cmd, &args)?),
            "rmvertex" | "rv" => Command::RemoveVertex(single(&cmd, &args)?),
            "key" => Command::Key(single(&cmd, &args)?),
            "adj" | "n" => Command::Adjacent(single(&cmd, &args)?),
            "out" => Command::Outgoing(single(&cmd, &args)?),
            "in" => Command::Incoming(single(&cmd, &args)?),
            "degree" | "d" => Command::Degree(single(&cmd, &args)?),
            "rmedge" | "re" => match args.as_slice() {
                [origin, destination] => {
                    Command::RemoveEdge(origin.to_string(), destination.to_string())
                }
                _ => return Err(usage("rmedge <源> <目标>")),
            },
            "edge" | "e" => match args.as_slice() {
                [origin, destination, rest @ ..] if rest.len() <= 2 => {
                    let weight = match rest.get(1) {
                        Some(w) => w.parse::<f64>().map_err(|_| {
                            GraphError::CommandError(format!("无效的权重: {}", w))
                        })?,
                        None => DEFAULT_WEIGHT,
                    };
                    Command::InsertEdge {
                        origin: origin.to_string(),
                        destination: destination.to_string(),
                        element: rest.first().map(|e| e.to_string()).unwrap_or_default(),
                        weight,
                    }
                }
                _ => return Err(usage("edge <源> <目标> [元素] [权重]")),
            },
            _ => {
                return Err(GraphError::CommandError(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    cmd
                )))
            }
        };

        Ok(command)
    }
}

fn single(cmd: &str, args: &[&str]) -> Result<String> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(usage(&format!("{} <顶点>", cmd))),
    }
}

fn usage(text: &str) -> GraphError {
    GraphError::CommandError(format!("用法: {}", text))
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台会话
pub struct Session {
    graph: SharedGraph,
    printer: Printer,
}

impl Session {
    /// 以给定配置创建空图会话
    pub fn new(config: GraphConfig) -> Self {
        Self {
            graph: Arc::new(RwLock::new(Graph::with_config(config))),
            printer: Printer::default(),
        }
    }

    /// 共享图句柄（供补全器使用）
    pub fn graph(&self) -> SharedGraph {
        Arc::clone(&self.graph)
    }

    /// 解析并执行一行输入，末尾 \G 切换为垂直显示
    pub fn execute_line(&mut self, input: &str) -> CommandResult {
        let (line, vertical) = check_vertical_display(input);
        if line.is_empty() {
            return CommandResult::Continue;
        }

        self.printer.set_mode(if vertical {
            PrintMode::Vertical
        } else {
            PrintMode::Table
        });

        match Command::parse(&line) {
            Ok(command) => self.execute(command),
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    /// 执行命令
    pub fn execute(&mut self, command: Command) -> CommandResult {
        debug!(?command, "执行命令");
        match self.run(command) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    fn run(&mut self, command: Command) -> Result<CommandResult> {
        let printer = self.printer;
        let result = match command {
            Command::Help => CommandResult::Message(Printer::print_help()),
            Command::Quit => CommandResult::Exit,

            Command::Stats => {
                let graph = self.graph.read();
                CommandResult::Message(printer.print_stats(
                    graph.is_directed(),
                    graph.num_vertices(),
                    graph.num_edges(),
                ))
            }

            Command::Show => CommandResult::Message(self.graph.read().to_string()),

            Command::Vertices => {
                let graph = self.graph.read();
                let rows: Vec<Vec<String>> = graph
                    .key_vertices()
                    .into_iter()
                    .enumerate()
                    .map(|(key, v)| vec![key.to_string(), v])
                    .collect();
                CommandResult::Message(printer.print_result(&["key", "vertex"], &rows))
            }

            Command::Edges => CommandResult::Message(printer.print_edges(self.graph.read().edges())),

            Command::Clone => {
                let graph = self.graph.read();
                let copy = graph.clone();
                CommandResult::Message(format!(
                    "克隆完成: {} 顶点, {} 边, 与原图相等: {}",
                    copy.num_vertices(),
                    copy.num_edges(),
                    copy == *graph
                ))
            }

            Command::Clear => {
                let mut graph = self.graph.write();
                let config = *graph.config();
                *graph = Graph::with_config(config);
                CommandResult::Message("图已清空".to_string())
            }

            Command::InsertVertex(v) => {
                let key = self.graph.write().try_insert_vertex(v.clone())?;
                CommandResult::Message(format!("顶点 {} 已插入 (键 {})", v, key))
            }

            Command::RemoveVertex(v) => {
                let mut graph = self.graph.write();
                graph.try_remove_vertex(&v)?;
                CommandResult::Message(format!(
                    "顶点 {} 已删除，剩余 {} 顶点, {} 边",
                    v,
                    graph.num_vertices(),
                    graph.num_edges()
                ))
            }

            Command::Key(v) => {
                let key = self.graph.read().get_key(&v)?;
                CommandResult::Message(format!("{}: {}", v, key))
            }

            Command::InsertEdge {
                origin,
                destination,
                element,
                weight,
            } => {
                let mut graph = self.graph.write();
                let before = graph.num_edges();
                graph.try_insert_edge(origin.clone(), destination.clone(), element, weight)?;
                CommandResult::Message(format!(
                    "边 {} -> {} 已插入 (新增 {} 条有向弧)",
                    origin,
                    destination,
                    graph.num_edges() - before
                ))
            }

            Command::RemoveEdge(origin, destination) => {
                let mut graph = self.graph.write();
                let before = graph.num_edges();
                graph.try_remove_edge(&origin, &destination)?;
                CommandResult::Message(format!(
                    "边 {} -> {} 已删除 (移除 {} 条有向弧)",
                    origin,
                    destination,
                    before - graph.num_edges()
                ))
            }

            Command::Adjacent(v) => {
                let graph = self.graph.read();
                let adjacent: Vec<&str> = graph
                    .adj_vertices(&v)
                    .ok_or_else(|| not_found(&v))?
                    .map(String::as_str)
                    .collect();
                CommandResult::Message(format!("{} 的邻接顶点: [{}]", v, adjacent.join(", ")))
            }

            Command::Outgoing(v) => {
                let graph = self.graph.read();
                let edges = graph.outgoing_edges(&v).ok_or_else(|| not_found(&v))?;
                CommandResult::Message(printer.print_edges(edges))
            }

            Command::Incoming(v) => {
                let graph = self.graph.read();
                let edges: Vec<&Edge<String, String>> =
                    graph.incoming_edges(&v).ok_or_else(|| not_found(&v))?;
                CommandResult::Message(printer.print_edges(edges))
            }

            Command::Degree(v) => {
                let graph = self.graph.read();
                match (graph.out_degree(&v), graph.in_degree(&v)) {
                    (Some(out), Some(incoming)) => {
                        CommandResult::Message(format!("{}: 出度 {}, 入度 {}", v, out, incoming))
                    }
                    _ => return Err(not_found(&v)),
                }
            }
        };

        Ok(result)
    }
}

fn not_found(v: &str) -> GraphError {
    GraphError::VertexNotFound(format!("{:?}", v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(m) => m,
            other => panic!("期望消息, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("HELP").unwrap(), Command::Help);
        assert_eq!(
            Command::parse("v A").unwrap(),
            Command::InsertVertex("A".to_string())
        );
        assert_eq!(
            Command::parse("edge A B road 2.5").unwrap(),
            Command::InsertEdge {
                origin: "A".to_string(),
                destination: "B".to_string(),
                element: "road".to_string(),
                weight: 2.5,
            }
        );
        assert_eq!(
            Command::parse("e A B").unwrap(),
            Command::InsertEdge {
                origin: "A".to_string(),
                destination: "B".to_string(),
                element: String::new(),
                weight: DEFAULT_WEIGHT,
            }
        );
        assert_eq!(
            Command::parse("re A B").unwrap(),
            Command::RemoveEdge("A".to_string(), "B".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("edge A B x abc"),
            Err(GraphError::CommandError(_))
        ));
        assert!(matches!(Command::parse("vertex"), Err(GraphError::CommandError(_))));
        assert!(matches!(Command::parse("rmedge A"), Err(GraphError::CommandError(_))));
        assert!(matches!(Command::parse("bogus"), Err(GraphError::CommandError(_))));
        assert!(Command::parse("   ").is_err());
    }

    #[test]
    fn test_session_undirected_flow() {
        let mut session = Session::new(GraphConfig::undirected());

        let out = message(session.execute_line("edge A B x 2"));
        assert!(out.contains("新增 2 条有向弧"));

        let out = message(session.execute_line("edge A A loop"));
        assert!(out.contains("新增 1 条有向弧"));

        assert!(matches!(
            session.execute_line("edge B A dup"),
            CommandResult::Error(_)
        ));

        let out = message(session.execute_line("degree A"));
        assert_eq!(out, "A: 出度 2, 入度 2");

        let out = message(session.execute_line("rmedge B A"));
        assert!(out.contains("移除 2 条有向弧"));
        assert_eq!(session.graph().read().num_edges(), 1);
    }

    #[test]
    fn test_session_remove_vertex_rekeys() {
        let mut session = Session::new(GraphConfig::directed());
        for v in ["A", "B", "C", "D"] {
            message(session.execute_line(&format!("vertex {}", v)));
        }

        message(session.execute_line("rv B"));
        assert_eq!(message(session.execute_line("key C")), "C: 1");
        assert_eq!(message(session.execute_line("key D")), "D: 2");
        assert!(matches!(session.execute_line("key B"), CommandResult::Error(_)));
    }

    #[test]
    fn test_session_queries() {
        let mut session = Session::new(GraphConfig::directed());
        message(session.execute_line("edge A B ab 1.5"));
        message(session.execute_line("edge C B cb"));

        let out = message(session.execute_line("adj A"));
        assert_eq!(out, "A 的邻接顶点: [B]");

        let out = message(session.execute_line("in B \\G"));
        assert!(out.contains("2 row(s) in set"));
        assert!(out.contains("origin: C"));

        let out = message(session.execute_line("out B"));
        assert_eq!(out, "Empty set\n");

        let out = message(session.execute_line("clone"));
        assert!(out.ends_with("与原图相等: true"));

        assert!(matches!(session.execute_line("out Z"), CommandResult::Error(_)));
        assert_eq!(session.execute_line(""), CommandResult::Continue);
        assert_eq!(session.execute_line("quit"), CommandResult::Exit);
    }

    #[test]
    fn test_session_clear_keeps_config() {
        let mut session = Session::new(GraphConfig::undirected());
        message(session.execute_line("edge A B"));
        message(session.execute_line("clear"));

        let graph = session.graph();
        let graph = graph.read();
        assert!(graph.is_empty());
        assert!(!graph.is_directed());
    }
}
