//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod grades;
mod home;
mod students;
mod subjects;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use crate::models::PageWindow;
use crate::utils::escape_like_pattern;
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    PaginatorTrait, Select,
};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::with_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(storage)
    }

    /// 使用已有连接创建存储实例，并执行数据库迁移
    pub async fn with_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 按页码窗口取一页数据：先统计总数，再把越界页码收敛到有效范围
    pub(crate) async fn fetch_page_window<E>(
        &self,
        select: Select<E>,
        page_size: u64,
        requested: Option<i64>,
        what: &str,
    ) -> Result<(Vec<E::Model>, PageWindow)>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        let paginator = select.paginate(&self.db, page_size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询{what}总数失败: {e}")))?;

        let window = PageWindow::resolve(requested, total, page_size);

        let items = paginator
            .fetch_page(window.zero_based())
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询{what}列表失败: {e}")))?;

        Ok((items, window))
    }
}

/// 不区分大小写的子串匹配：任一列包含关键字即命中
///
/// 列与关键字都转为小写后用 `LIKE '%needle%' ESCAPE '\'` 比较，关键字中的通配符按字面匹配。
pub(crate) fn icontains_any<C>(columns: &[C], needle: &str) -> Condition
where
    C: ColumnTrait + Copy,
{
    let pattern = format!("%{}%", escape_like_pattern(&needle.to_lowercase()));

    columns.iter().fold(Condition::any(), |cond, column| {
        cond.add(
            Expr::expr(Func::lower(Expr::col((column.entity_name(), *column))))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    })
}

// Storage trait 实现
use crate::models::{
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery},
        responses::GradeListResponse,
    },
    home::responses::HomeSummary,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
        responses::{StudentDetail, StudentListResponse},
    },
    subjects::{
        entities::Subject,
        requests::CreateSubjectRequest,
        responses::{SubjectDetail, SubjectWithStats},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery},
        responses::{TeacherDetail, TeacherListResponse},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 首页
    async fn get_home_summary(&self) -> Result<HomeSummary> {
        self.get_home_summary_impl().await
    }

    // 学生模块
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn get_student_detail(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_detail_impl(id).await
    }

    // 教师模块
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn get_teacher_detail(&self, id: i64) -> Result<Option<TeacherDetail>> {
        self.get_teacher_detail_impl(id).await
    }

    // 科目模块
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn list_subjects_with_stats(&self) -> Result<Vec<SubjectWithStats>> {
        self.list_subjects_with_stats_impl().await
    }

    async fn get_subject_detail(&self, id: i64) -> Result<Option<SubjectDetail>> {
        self.get_subject_detail_impl(id).await
    }

    // 成绩模块
    async fn list_grades_with_pagination(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        self.list_grades_with_pagination_impl(query).await
    }

    // 管理端写入
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(req).await
    }

    async fn set_student_active(&self, id: i64, is_active: bool) -> Result<bool> {
        self.set_student_active_impl(id, is_active).await
    }

    async fn set_teacher_active(&self, id: i64, is_active: bool) -> Result<bool> {
        self.set_teacher_active_impl(id, is_active).await
    }

    async fn count_subjects(&self) -> Result<u64> {
        self.count_subjects_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/school").unwrap(),
            "postgres://u:p@localhost/school"
        );
        assert!(SeaOrmStorage::build_database_url("school").is_err());
    }
}
