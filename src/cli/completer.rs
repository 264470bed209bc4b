//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：第一个单词补全命令，其余单词补全顶点元素

use super::commands::SharedGraph;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
pub const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "stats", "info", "show", "print",
    "vertex", "rmvertex", "key", "vertices",
    "edge", "rmedge", "edges",
    "adj", "out", "in", "degree",
    "clone", "clear",
];

/// GraphBase CLI 补全器
pub struct CommandCompleter {
    graph: SharedGraph,
}

impl CommandCompleter {
    pub fn new(graph: SharedGraph) -> Self {
        Self { graph }
    }

    /// 计算补全候选，返回 (替换起点, 候选)
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let line_to_cursor = &line[..pos];
        // 空白可能是多字节字符（如全角空格 U+3000）
        let start = line_to_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let current_word = &line_to_cursor[start..];

        if line_to_cursor[..start].trim().is_empty() {
            let lower = current_word.to_lowercase();
            let completions = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(&lower))
                .map(|cmd| cmd.to_string())
                .collect();
            return (start, completions);
        }

        let graph = self.graph.read();
        let completions = graph
            .vertices()
            .filter(|v| v.starts_with(current_word))
            .cloned()
            .collect();
        (start, completions)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(line, pos);
        let completions = words
            .into_iter()
            .map(|w| Pair {
                display: w.clone(),
                replacement: w,
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
