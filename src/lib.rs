//! SocialGraph - 社交网络关系图
//!
//! 以用户名为节点的无向社交图，支持：
//! - 好友关系的增量构建
//! - BFS 最短路径与 DFS 任意路径查询
//! - 与图相互独立的用户分组
//! - CSV 批量导入与交互式命令行

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod network;

// 重导出常用类型
pub use algorithm::PathFinder;
pub use error::{Error, Result};
pub use graph::{GroupRegistry, SocialGraph};
pub use network::Network;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
