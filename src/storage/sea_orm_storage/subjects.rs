//! 科目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{Grades, StudentSubjects, Students, Subjects, TeacherSubjects, Teachers};
use crate::entity::{grades, student_subjects, students, subjects, teacher_subjects, teachers};
use crate::errors::{Result, SchoolError};
use crate::models::{
    grades::entities::average,
    subjects::{
        entities::Subject,
        requests::CreateSubjectRequest,
        responses::{SubjectDetail, SubjectWithStats},
    },
};
use crate::utils::validate::validate_required_text;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

// 科目详情中展示的最近成绩条数
const RECENT_GRADES_LIMIT: u64 = 10;

impl SeaOrmStorage {
    /// 全部科目，按名称排序
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(subjects::Column::Name)
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 全部科目及在籍学生数、在职教师数
    pub async fn list_subjects_with_stats_impl(&self) -> Result<Vec<SubjectWithStats>> {
        let subjects = self.list_subjects_impl().await?;

        // 每个科目的在籍学生数
        let students_count: HashMap<i64, i64> = StudentSubjects::find()
            .select_only()
            .column(student_subjects::Column::SubjectId)
            .column_as(student_subjects::Column::StudentId.count(), "students_count")
            .join(JoinType::InnerJoin, student_subjects::Relation::Student.def())
            .filter(students::Column::IsActive.eq(true))
            .group_by(student_subjects::Column::SubjectId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计科目学生数失败: {e}")))?
            .into_iter()
            .collect();

        // 每个科目的在职教师数
        let teachers_count: HashMap<i64, i64> = TeacherSubjects::find()
            .select_only()
            .column(teacher_subjects::Column::SubjectId)
            .column_as(teacher_subjects::Column::TeacherId.count(), "teachers_count")
            .join(JoinType::InnerJoin, teacher_subjects::Relation::Teacher.def())
            .filter(teachers::Column::IsActive.eq(true))
            .group_by(teacher_subjects::Column::SubjectId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计科目教师数失败: {e}")))?
            .into_iter()
            .collect();

        Ok(subjects
            .into_iter()
            .map(|subject| SubjectWithStats {
                students_count: students_count.get(&subject.id).copied().unwrap_or(0),
                teachers_count: teachers_count.get(&subject.id).copied().unwrap_or(0),
                subject,
            })
            .collect())
    }

    /// 科目详情
    pub async fn get_subject_detail_impl(&self, id: i64) -> Result<Option<SubjectDetail>> {
        let Some(subject) = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目失败: {e}")))?
        else {
            return Ok(None);
        };

        // 在职任课教师
        let teachers = subject
            .find_related(Teachers)
            .filter(teachers::Column::IsActive.eq(true))
            .order_by_asc(teachers::Column::FirstName)
            .order_by_asc(teachers::Column::LastName)
            .order_by_asc(teachers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目教师失败: {e}")))?;

        // 在籍选课学生
        let students = subject
            .find_related(Students)
            .filter(students::Column::IsActive.eq(true))
            .order_by_asc(students::Column::Grade)
            .order_by_asc(students::Column::FirstName)
            .order_by_asc(students::Column::LastName)
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目学生失败: {e}")))?;

        let recent = Grades::find()
            .filter(grades::Column::SubjectId.eq(id))
            .order_by_desc(grades::Column::ExamDate)
            .order_by_desc(grades::Column::Id)
            .limit(RECENT_GRADES_LIMIT)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目成绩失败: {e}")))?;
        let recent_grades = self.load_grade_records(recent).await?;

        // 平均分覆盖该科目的全部成绩，而不只是最近的几条
        let values = Grades::find()
            .select_only()
            .column(grades::Column::Grade)
            .filter(grades::Column::SubjectId.eq(id))
            .into_tuple::<Decimal>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目成绩失败: {e}")))?;

        Ok(Some(SubjectDetail {
            subject: subject.into_subject(),
            teachers: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            students: students.into_iter().map(|m| m.into_student()).collect(),
            recent_grades,
            avg_grade: average(&values),
        }))
    }

    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        validate_required_text(&req.name, 100)
            .map_err(|msg| SchoolError::validation(format!("name: {msg}")))?;
        validate_required_text(&req.code, 10)
            .map_err(|msg| SchoolError::validation(format!("code: {msg}")))?;

        let code = req.code.trim().to_string();
        let exists = Subjects::find()
            .filter(subjects::Column::Code.eq(&code))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目代码失败: {e}")))?;
        if exists > 0 {
            return Err(SchoolError::duplicate_code(format!(
                "Subject with this code already exists: {code}"
            )));
        }

        let model = subjects::ActiveModel {
            name: Set(req.name.trim().to_string()),
            code: Set(code),
            description: Set(req.description.filter(|d| !d.trim().is_empty())),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 科目总数
    pub async fn count_subjects_impl(&self) -> Result<u64> {
        Subjects::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目总数失败: {e}")))
    }

    /// 校验科目 ID 全部存在（去重后返回）
    pub(crate) async fn ensure_subjects_exist<C>(conn: &C, ids: &[i64]) -> Result<Vec<i64>>
    where
        C: sea_orm::ConnectionTrait,
    {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(ids);
        }

        let found = Subjects::find()
            .filter(subjects::Column::Id.is_in(ids.clone()))
            .count(conn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目失败: {e}")))?;
        if found != ids.len() as u64 {
            return Err(SchoolError::not_found(format!("Subject not found in {ids:?}")));
        }

        Ok(ids)
    }
}
