//! 结果打印器
//!
//! 提供纯文本、表格和 JSON 三种输出格式

use crate::algorithm::PathFinder;
use crate::error::{Error, Result};
use crate::graph::{GroupRegistry, SocialGraph};
use crate::network::{format_path, Network};
use prettytable::{format, row, Cell, Row, Table};
use std::str::FromStr;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// 纯文本列表
    #[default]
    Plain,
    /// 表格
    Table,
    /// JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::ParseError(format!("未知的输出格式: {}", other))),
        }
    }
}

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 设置输出格式
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 打印社交图
    pub fn print_graph(&self, graph: &SocialGraph) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(graph.to_string()),
            OutputFormat::Table => {
                let mut table = new_table(&["User", "Friends"]);
                for (user, friends) in graph.iter() {
                    table.add_row(Row::new(vec![
                        Cell::new(user),
                        Cell::new(&friends.join(", ")),
                    ]));
                }
                Ok(table.to_string())
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)? + "\n"),
        }
    }

    /// 打印分组
    pub fn print_groups(&self, groups: &GroupRegistry) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(groups.to_string()),
            OutputFormat::Table => {
                let mut table = new_table(&["Group", "Members"]);
                for (name, members) in groups.groups() {
                    table.add_row(Row::new(vec![
                        Cell::new(name),
                        Cell::new(&members.join(", ")),
                    ]));
                }
                Ok(table.to_string())
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(groups)? + "\n"),
        }
    }

    /// 打印路径
    pub fn print_path(&self, path: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(format_path(path) + "\n"),
            OutputFormat::Table => {
                if path.is_empty() {
                    return Ok("No path found.\n".to_string());
                }
                let mut table = new_table(&["Hop", "User"]);
                for (hop, user) in path.iter().enumerate() {
                    table.add_row(Row::new(vec![
                        Cell::new(&hop.to_string()),
                        Cell::new(user),
                    ]));
                }
                Ok(table.to_string())
            }
            OutputFormat::Json => Ok(serde_json::to_string(path)? + "\n"),
        }
    }

    /// 演示报告：图结构、Alice 到 David 的 BFS/DFS 路径以及分组
    pub fn print_demo_report(&self, network: &Network) -> Result<String> {
        let finder = PathFinder::new(&network.graph);
        let mut out = self.print_graph(&network.graph)?;

        out.push_str("\nBFS Shortest Path from Alice to David:\n");
        out.push_str(&self.print_path(&finder.shortest_path("Alice", "David"))?);

        out.push_str("\nDFS Path from Alice to David:\n");
        out.push_str(&self.print_path(&finder.any_path("Alice", "David"))?);

        out.push_str("\nGroups:\n");
        out.push_str(&self.print_groups(&network.groups)?);
        Ok(out)
    }

    /// 打印统计信息
    pub fn print_stats(&self, network: &Network) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["User Count", network.graph.user_count().to_string()]);
        table.add_row(row!["Friendship Count", network.graph.edge_count().to_string()]);
        table.add_row(row!["Group Count", network.groups.group_count().to_string()]);
        table.to_string()
    }
}

fn new_table(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t)).collect()));
    table
}
