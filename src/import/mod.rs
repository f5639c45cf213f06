//! 数据导入模块
//!
//! 从 CSV 批量导入好友关系和分组成员

use crate::error::Result;
use crate::network::Network;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub rows_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 好友关系记录（表头 `user,friend`）
#[derive(Debug, Deserialize)]
struct FriendshipRecord {
    user: String,
    friend: String,
}

/// 分组成员记录（表头 `group,user`）
#[derive(Debug, Deserialize)]
struct MembershipRecord {
    group: String,
    user: String,
}

/// 批量导入器
pub struct NetworkImporter<'a> {
    network: &'a mut Network,
}

impl<'a> NetworkImporter<'a> {
    pub fn new(network: &'a mut Network) -> Self {
        Self { network }
    }

    /// 从 CSV 文件导入好友关系
    pub fn import_edges_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_edges(file)
    }

    /// 从任意读取器导入好友关系
    pub fn import_edges<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        for (line, record) in reader.deserialize::<FriendshipRecord>().enumerate() {
            match record {
                Ok(r) if !r.user.is_empty() && !r.friend.is_empty() => {
                    self.network.graph.add_edge(&r.user, &r.friend);
                    stats.rows_imported += 1;
                }
                Ok(_) => {
                    warn!(row = line + 1, "好友关系缺少用户名，已跳过");
                    stats.errors += 1;
                }
                Err(e) => {
                    warn!(row = line + 1, error = %e, "好友关系解析失败，已跳过");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            rows = stats.rows_imported,
            errors = stats.errors,
            "好友关系导入完成"
        );
        Ok(stats)
    }

    /// 从 CSV 文件导入分组成员
    pub fn import_groups_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_groups(file)
    }

    /// 从任意读取器导入分组成员
    pub fn import_groups<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        for (line, record) in reader.deserialize::<MembershipRecord>().enumerate() {
            match record {
                Ok(r) if !r.group.is_empty() && !r.user.is_empty() => {
                    self.network.groups.add_member(&r.group, &r.user);
                    stats.rows_imported += 1;
                }
                Ok(_) => {
                    warn!(row = line + 1, "分组记录缺少字段，已跳过");
                    stats.errors += 1;
                }
                Err(e) => {
                    warn!(row = line + 1, error = %e, "分组记录解析失败，已跳过");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            rows = stats.rows_imported,
            errors = stats.errors,
            "分组导入完成"
        );
        Ok(stats)
    }
}
