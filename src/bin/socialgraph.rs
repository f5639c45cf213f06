//! SocialGraph 命令行工具
//!
//! 默认运行内置演示场景；也可从 CSV 导入数据、执行单条命令或进入交互模式

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use socialgraph::cli::{execute_command, CommandCompleter, CommandResult, OutputFormat, Session};
use socialgraph::import::NetworkImporter;
use socialgraph::Network;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// ANSI 清屏并将光标移到左上角
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Parser, Debug)]
#[command(name = "socialgraph")]
#[command(version, about = "SocialGraph 社交网络关系图工具")]
struct Args {
    /// 好友关系 CSV 文件（表头: user,friend）
    #[arg(long)]
    edges: Option<PathBuf>,

    /// 分组成员 CSV 文件（表头: group,user）
    #[arg(long)]
    groups: Option<PathBuf>,

    /// 执行单条命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 加载数据后进入交互模式
    #[arg(short, long)]
    interactive: bool,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("socialgraph=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let use_demo = args.edges.is_none() && args.groups.is_none();

    let network = if use_demo {
        Network::demo()
    } else {
        load_network(&args)?
    };
    let mut session = Session::new(network, args.format);

    // 单条命令模式
    if let Some(command) = args.execute.as_deref() {
        return match execute_command(command, &mut session) {
            CommandResult::Message(m) => {
                print!("{}", ensure_newline(m));
                Ok(())
            }
            CommandResult::Error(e) => Err(e.into()),
            CommandResult::ClearScreen => {
                print!("{}", CLEAR_SCREEN);
                Ok(())
            }
            CommandResult::Continue | CommandResult::Exit => Ok(()),
        };
    }

    if args.interactive {
        return run_shell(session);
    }

    if use_demo {
        print!("{}", session.printer.print_demo_report(&session.network)?);
    } else {
        print!("{}", session.printer.print_graph(&session.network.graph)?);
        println!();
        print!("{}", session.printer.print_groups(&session.network.groups)?);
    }

    Ok(())
}

fn load_network(args: &Args) -> Result<Network, Box<dyn std::error::Error>> {
    let mut network = Network::new();
    let mut importer = NetworkImporter::new(&mut network);

    if let Some(path) = &args.edges {
        let stats = importer.import_edges_csv(path)?;
        eprintln!(
            "导入好友关系: {} 行, 错误 {} 行, 耗时 {} ms",
            stats.rows_imported, stats.errors, stats.duration_ms
        );
    }
    if let Some(path) = &args.groups {
        let stats = importer.import_groups_csv(path)?;
        eprintln!(
            "导入分组成员: {} 行, 错误 {} 行, 耗时 {} ms",
            stats.rows_imported, stats.errors, stats.duration_ms
        );
    }

    Ok(network)
}

fn run_shell(mut session: Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("SocialGraph {} - 社交网络关系图", socialgraph::VERSION);
    println!("  用户数: {}", session.network.graph.user_count());
    println!("  好友关系数: {}", session.network.graph.edge_count());
    println!("  分组数: {}", session.network.groups.group_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    let mut completer = CommandCompleter::new();
    completer.refresh(&session.network);
    rl.set_helper(Some(completer));

    loop {
        let line = match rl.readline("socialgraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(line.as_str())?;

        match execute_command(&line, &mut session) {
            CommandResult::Exit => break,
            CommandResult::Continue => {}
            CommandResult::Message(m) => print!("{}", ensure_newline(m)),
            CommandResult::Error(e) => println!("错误: {}", e),
            CommandResult::ClearScreen => print!("{}", CLEAR_SCREEN),
        }

        if let Some(helper) = rl.helper_mut() {
            helper.refresh(&session.network);
        }
    }

    println!("再见！");
    Ok(())
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
