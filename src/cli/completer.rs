//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：命令名、用户名、分组名和输出格式

use crate::network::Network;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
pub const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "stats", "show", "graph", "groups", "adduser", "user", "friend",
    "neighbors", "path", "anypath", "hops", "join", "members", "format", "clear",
];

const FORMATS: &[&str] = &["plain", "table", "json"];

/// 参数类型
enum ArgKind {
    User,
    Group,
    Format,
    None,
}

/// 命令第 n 个参数（从 0 开始）应补全的内容
fn arg_kind(command: &str, index: usize) -> ArgKind {
    match (command, index) {
        ("user" | "neighbors" | "hops", 0) => ArgKind::User,
        ("friend" | "path" | "anypath", 0 | 1) => ArgKind::User,
        ("join" | "members", 0) => ArgKind::Group,
        ("join", 1) => ArgKind::User,
        ("format", 0) => ArgKind::Format,
        _ => ArgKind::None,
    }
}

/// SocialGraph 命令行补全器
#[derive(Default)]
pub struct CommandCompleter {
    users: Vec<String>,
    groups: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 根据当前网络刷新用户名和分组名
    pub fn refresh(&mut self, network: &Network) {
        self.users = network.graph.users().map(str::to_string).collect();
        self.groups = network
            .groups
            .groups()
            .map(|(name, _)| name.to_string())
            .collect();
    }

    /// 计算补全候选，返回 (替换起始位置, 候选列表)
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !words.is_empty() && !line_to_cursor.ends_with(char::is_whitespace);

        let (current, completed) = if at_word_end {
            (words.last().copied().unwrap_or(""), &words[..words.len() - 1])
        } else {
            ("", &words[..])
        };
        let start = pos - current.len();

        let pool: Vec<&str> = match completed.split_first() {
            None => COMMANDS.to_vec(),
            Some((command, args)) => match arg_kind(&command.to_lowercase(), args.len()) {
                ArgKind::User => self.users.iter().map(String::as_str).collect(),
                ArgKind::Group => self.groups.iter().map(String::as_str).collect(),
                ArgKind::Format => FORMATS.to_vec(),
                ArgKind::None => Vec::new(),
            },
        };

        let matches = pool
            .into_iter()
            .filter(|candidate| candidate.starts_with(current))
            .map(str::to_string)
            .collect();
        (start, matches)
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
        let (start, candidates) = self.candidates(line, pos);
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
