//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::graph::Edge;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式 (\G)
    Vertical,
}

/// 结果打印器
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印结果集
    pub fn print_result(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 打印边列表
    pub fn print_edges<'a, I>(&self, edges: I) -> String
    where
        I: IntoIterator<Item = &'a Edge<String, String>>,
    {
        let rows: Vec<Vec<String>> = edges
            .into_iter()
            .map(|e| {
                vec![
                    e.origin().clone(),
                    e.destination().clone(),
                    e.element().clone(),
                    e.weight().to_string(),
                ]
            })
            .collect();
        self.print_result(&["origin", "destination", "element", "weight"], &rows)
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, directed: bool, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Directed", directed.to_string()]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   GraphBase CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  stats, info                显示图统计信息
  show, print                打印整张图

顶点:
  vertex, v <顶点>           插入顶点
  rmvertex, rv <顶点>        删除顶点（级联删除相关边）
  key <顶点>                 查看稠密键
  vertices                   列出全部顶点

边:
  edge, e <源> <目标> [元素] [权重]
                             插入边（缺失的顶点自动插入）
                             示例: edge A B road 2.5
  rmedge, re <源> <目标>     删除边
  edges                      列出全部边

邻接:
  adj, n <顶点>              邻接顶点
  out <顶点>                 出边
  in <顶点>                  入边
  degree, d <顶点>           出度和入度

整图:
  clone                      克隆并校验与原图相等
  clear                      清空图（保留配置）

提示: 在命令末尾加 \G 可垂直显示结果

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

/// 检查命令是否以 \G 结尾（垂直显示）
pub fn check_vertical_display(input: &str) -> (String, bool) {
    let trimmed = input.trim();
    if trimmed.ends_with("\\G") || trimmed.ends_with("\\g") {
        let clean = trimmed[..trimmed.len() - 2].trim().to_string();
        (clean, true)
    } else {
        (trimmed.to_string(), false)
    }
}
