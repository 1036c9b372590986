//! 教师存储操作

use super::{SeaOrmStorage, icontains_any};
use crate::entity::prelude::{Grades, StudentSubjects, Students, Subjects, TeacherSubjects};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::{grades, student_subjects, students, subjects, teacher_subjects};
use crate::errors::{Result, SchoolError};
use crate::models::{
    common::normalize_search,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery},
        responses::{TeacherDetail, TeacherListResponse},
    },
};
use crate::utils::validate::{validate_email, validate_phone, validate_required_text};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Set, TransactionTrait,
};

// 教师列表每页条数
const TEACHER_PAGE_SIZE: u64 = 10;

// decimal(10,2) 能表示的上限（不含）
const SALARY_LIMIT: i64 = 100_000_000;

impl SeaOrmStorage {
    /// 列出在职教师（分页）
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let mut select = Teachers::find().filter(Column::IsActive.eq(true));

        // 搜索条件：名、姓或邮箱
        if let Some(search) = normalize_search(query.search.as_deref()) {
            select = select.filter(icontains_any(
                &[Column::FirstName, Column::LastName, Column::Email],
                &search,
            ));
        }

        // 科目筛选：子查询不产生重复行
        if let Some(subject_id) = query.subject_id {
            let teaching = TeacherSubjects::find()
                .select_only()
                .column(teacher_subjects::Column::TeacherId)
                .filter(teacher_subjects::Column::SubjectId.eq(subject_id))
                .into_query();
            select = select.filter(Column::Id.in_subquery(teaching));
        }

        // 排序：名、姓
        select = select
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::Id);

        let (teachers, window) = self
            .fetch_page_window(select, TEACHER_PAGE_SIZE, query.page, "教师")
            .await?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: window.into_info(),
        })
    }

    /// 教师详情：任课科目、所教学生数与录入成绩数
    pub async fn get_teacher_detail_impl(&self, id: i64) -> Result<Option<TeacherDetail>> {
        let Some(teacher) = Teachers::find_by_id(id)
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?
        else {
            return Ok(None);
        };

        let subjects = teacher
            .find_related(Subjects)
            .order_by_asc(subjects::Column::Name)
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师科目失败: {e}")))?;

        // 选修该教师任一科目的在籍学生（按学生去重）
        let taught_subjects = TeacherSubjects::find()
            .select_only()
            .column(teacher_subjects::Column::SubjectId)
            .filter(teacher_subjects::Column::TeacherId.eq(id))
            .into_query();
        let enrolled_students = StudentSubjects::find()
            .select_only()
            .column(student_subjects::Column::StudentId)
            .filter(student_subjects::Column::SubjectId.in_subquery(taught_subjects))
            .into_query();
        let students_count = Students::find()
            .filter(students::Column::IsActive.eq(true))
            .filter(students::Column::Id.in_subquery(enrolled_students))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计教师学生数失败: {e}")))?;

        let grades_count = Grades::find()
            .filter(grades::Column::TeacherId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计教师成绩数失败: {e}")))?;

        Ok(Some(TeacherDetail {
            teacher: teacher.into_teacher(),
            subjects: subjects.into_iter().map(|m| m.into_subject()).collect(),
            students_count: students_count as i64,
            grades_count: grades_count as i64,
        }))
    }

    /// 创建教师及任课关系
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        // 字段校验
        validate_required_text(&req.first_name, 50)
            .map_err(|msg| SchoolError::validation(format!("first_name: {msg}")))?;
        validate_required_text(&req.last_name, 50)
            .map_err(|msg| SchoolError::validation(format!("last_name: {msg}")))?;

        let email = req.email.trim().to_string();
        validate_email(&email).map_err(SchoolError::invalid_email_format)?;
        let phone = req.phone.trim().to_string();
        validate_phone(&phone).map_err(SchoolError::invalid_phone_format)?;

        if req.salary.is_sign_negative()
            || req.salary.abs() >= Decimal::from(SALARY_LIMIT)
            || req.salary.round_dp(2) != req.salary
        {
            return Err(SchoolError::validation(format!(
                "salary: invalid amount {}",
                req.salary
            )));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        // 唯一性校验
        let exists = Teachers::find()
            .filter(Column::Email.eq(&email))
            .count(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师邮箱失败: {e}")))?;
        if exists > 0 {
            return Err(SchoolError::duplicate_email(format!(
                "Teacher with this Email already exists: {email}"
            )));
        }

        let subject_ids = Self::ensure_subjects_exist(&txn, &req.subject_ids).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(email),
            phone: Set(phone),
            gender: Set(req.gender.to_string()),
            date_of_birth: Set(req.date_of_birth),
            hire_date: Set(req.hire_date),
            address: Set(req.address),
            salary: Set(req.salary),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建教师失败: {e}")))?;

        // 任课关系
        if !subject_ids.is_empty() {
            let links = subject_ids
                .into_iter()
                .map(|subject_id| teacher_subjects::ActiveModel {
                    teacher_id: Set(result.id),
                    subject_id: Set(subject_id),
                });
            TeacherSubjects::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("创建任课关系失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 停用或恢复教师
    pub async fn set_teacher_active_impl(&self, id: i64, is_active: bool) -> Result<bool> {
        let Some(teacher) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut model: ActiveModel = teacher.into();
        model.is_active = Set(is_active);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新教师状态失败: {e}")))?;

        Ok(true)
    }
}
