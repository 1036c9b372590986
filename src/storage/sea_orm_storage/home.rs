//! 首页统计

use super::SeaOrmStorage;
use crate::entity::prelude::{Grades, Students, Subjects, Teachers};
use crate::entity::{students, teachers};
use crate::errors::{Result, SchoolError};
use crate::models::home::responses::HomeSummary;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

// 首页展示的最近登记人数
const RECENT_LIMIT: u64 = 5;

impl SeaOrmStorage {
    pub async fn get_home_summary_impl(&self) -> Result<HomeSummary> {
        let total_students = Students::find()
            .filter(students::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计学生总数失败: {e}")))?;

        let total_teachers = Teachers::find()
            .filter(teachers::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计教师总数失败: {e}")))?;

        let total_subjects = Subjects::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计科目总数失败: {e}")))?;

        let total_grades = Grades::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计成绩总数失败: {e}")))?;

        let recent_students = Students::find()
            .filter(students::Column::IsActive.eq(true))
            .order_by_desc(students::Column::CreatedAt)
            .order_by_desc(students::Column::Id)
            .limit(RECENT_LIMIT)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询最近学生失败: {e}")))?;

        let recent_teachers = Teachers::find()
            .filter(teachers::Column::IsActive.eq(true))
            .order_by_desc(teachers::Column::CreatedAt)
            .order_by_desc(teachers::Column::Id)
            .limit(RECENT_LIMIT)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询最近教师失败: {e}")))?;

        Ok(HomeSummary {
            total_students: total_students as i64,
            total_teachers: total_teachers as i64,
            total_subjects: total_subjects as i64,
            total_grades: total_grades as i64,
            recent_students: recent_students.into_iter().map(|m| m.into_student()).collect(),
            recent_teachers: recent_teachers.into_iter().map(|m| m.into_teacher()).collect(),
        })
    }
}
