//! 控制台命令处理
//!
//! 解析并执行 shell 中输入的命令

use crate::algorithm::PathFinder;
use crate::cli::printer::{OutputFormat, Printer};
use crate::error::{Error, Result};
use crate::network::Network;

/// 控制台命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
    /// 清屏
    ClearScreen,
}

/// 控制台会话
#[derive(Debug, Default)]
pub struct Session {
    pub network: Network,
    pub printer: Printer,
}

impl Session {
    pub fn new(network: Network, format: OutputFormat) -> Self {
        Self {
            network,
            printer: Printer::new(format),
        }
    }
}

/// 解析并执行一条命令
pub fn execute_command(input: &str, session: &mut Session) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts[0].to_lowercase();
    let args = &parts[1..];

    match run(&cmd, args, session) {
        Ok(result) => result,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn run(cmd: &str, args: &[&str], session: &mut Session) -> Result<CommandResult> {
    let result = match cmd {
        "help" | "h" | "?" => CommandResult::Message(get_help_text()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "stats" | "info" => CommandResult::Message(session.printer.print_stats(&session.network)),

        "show" | "graph" => {
            CommandResult::Message(session.printer.print_graph(&session.network.graph)?)
        }

        "groups" => CommandResult::Message(session.printer.print_groups(&session.network.groups)?),

        "adduser" => {
            let [user] = expect_args::<1>(args, "adduser <用户>")?;
            if session.network.graph.add_user(user) {
                CommandResult::Message(format!("Added user {}", user))
            } else {
                CommandResult::Message(format!("User {} already exists", user))
            }
        }

        "user" | "u" => {
            let [user] = expect_args::<1>(args, "user <用户>")?;
            let graph = &session.network.graph;
            if !graph.contains_user(user) {
                return Err(Error::UserNotFound(user.to_string()));
            }
            let groups = session.network.groups.groups_of(user);
            CommandResult::Message(format!(
                "User {}\n  Friends ({}): {}\n  Groups: {}\n",
                user,
                graph.degree(user),
                graph.neighbors(user).join(" "),
                groups.join(" ")
            ))
        }

        "friend" => {
            let [a, b] = expect_args::<2>(args, "friend <用户> <用户>")?;
            session.network.graph.add_edge(a, b);
            CommandResult::Message(format!("{} and {} are now friends", a, b))
        }

        "neighbors" | "n" => {
            let [user] = expect_args::<1>(args, "neighbors <用户>")?;
            let graph = &session.network.graph;
            if !graph.contains_user(user) {
                return Err(Error::UserNotFound(user.to_string()));
            }
            CommandResult::Message(session.printer.print_path(graph.neighbors(user))?)
        }

        "path" | "shortest" => {
            let [start, end] = expect_args::<2>(args, "path <起点> <终点>")?;
            let path = PathFinder::new(&session.network.graph).checked_shortest_path(start, end)?;
            CommandResult::Message(session.printer.print_path(&path)?)
        }

        "anypath" | "dfs" => {
            let [start, end] = expect_args::<2>(args, "anypath <起点> <终点>")?;
            let path = PathFinder::new(&session.network.graph).checked_any_path(start, end)?;
            CommandResult::Message(session.printer.print_path(&path)?)
        }

        "hops" => {
            let [user, n] = expect_args::<2>(args, "hops <用户> <跳数>")?;
            let n: usize = n
                .parse()
                .map_err(|_| Error::ParseError(format!("无效的跳数: {}", n)))?;
            if !session.network.graph.contains_user(user) {
                return Err(Error::UserNotFound(user.to_string()));
            }
            let users = PathFinder::new(&session.network.graph).n_hop_neighbors(user, n);
            CommandResult::Message(session.printer.print_path(&users)?)
        }

        "join" => {
            let [group, user] = expect_args::<2>(args, "join <分组> <用户>")?;
            session.network.groups.add_member(group, user);
            CommandResult::Message(format!("Added {} to group {}", user, group))
        }

        "members" => {
            let [group] = expect_args::<1>(args, "members <分组>")?;
            let members = session
                .network
                .groups
                .members(group)
                .ok_or_else(|| Error::GroupNotFound(group.to_string()))?;
            CommandResult::Message(session.printer.print_path(members)?)
        }

        "format" => {
            let [format] = expect_args::<1>(args, "format <plain|table|json>")?;
            let format: OutputFormat = format.parse()?;
            session.printer.set_format(format);
            CommandResult::Message(format!("Output format set to {:?}", format))
        }

        "clear" => CommandResult::ClearScreen,

        _ => CommandResult::Error(format!("Unknown command: {}. Type help for help.", cmd)),
    };

    Ok(result)
}

/// 检查参数个数
fn expect_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| Error::ParseError(format!("用法: {}", usage)))
}

fn get_help_text() -> String {
    r#"
╔═══════════════════════════════════════════════════════════════╗
║                    SocialGraph Commands                       ║
╠═══════════════════════════════════════════════════════════════╣
║ help, h, ?                 Show this help                     ║
║ quit, exit, q              Exit the program                   ║
║ stats, info                Show user/friendship/group counts  ║
║ show, graph                List users and their friends       ║
║ groups                     List groups and their members      ║
║ adduser <user>             Add a user                         ║
║ user <user>                Show a user's friends and groups   ║
║ friend <a> <b>             Make two users friends             ║
║ neighbors <user>           List a user's friends              ║
║ path <from> <to>           Shortest path (BFS)                ║
║ anypath <from> <to>        Any path (DFS)                     ║
║ hops <user> <n>            Users exactly n hops away          ║
║ join <group> <user>        Add a user to a group              ║
║ members <group>            List a group's members             ║
║ format <plain|table|json>  Set output format                  ║
║ clear                      Clear the screen                   ║
╚═══════════════════════════════════════════════════════════════╝
"#
    .to_string()
}
