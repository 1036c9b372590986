use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::demo;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 写入演示数据
/// 仅在配置开启且数据库中没有任何科目时执行
async fn seed_demo_data(storage: &Arc<dyn Storage>) {
    if !AppConfig::get().app.seed_demo_data {
        debug!("Demo data seeding disabled");
        return;
    }

    match storage.count_subjects().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} subject(s), skipping demo data seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No subjects found in database, seeding demo data...");
        }
        Err(e) => {
            warn!("Failed to count subjects: {}, skipping demo data seed", e);
            return;
        }
    }

    match demo::seed(storage.as_ref()).await {
        Ok(summary) => info!(
            "Demo data seeded: {} subject(s), {} teacher(s), {} student(s), {} grade(s)",
            summary.subjects, summary.teachers, summary.students, summary.grades
        ),
        Err(e) => warn!("Failed to seed demo data: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化、数据库迁移与演示数据
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 写入演示数据（如果需要）
    seed_demo_data(&storage).await;

    StartupContext { storage }
}
