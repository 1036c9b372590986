//! 学生存储操作

use super::{SeaOrmStorage, icontains_any};
use crate::entity::prelude::{Grades, StudentSubjects, Subjects};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::{grades, student_subjects, subjects};
use crate::errors::{Result, SchoolError};
use crate::models::{
    common::{normalize_filter, normalize_search},
    grades::entities::average,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
        responses::{StudentDetail, StudentListResponse},
    },
};
use crate::utils::validate::{validate_email, validate_phone, validate_required_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

// 学生列表每页条数
const STUDENT_PAGE_SIZE: u64 = 10;

impl SeaOrmStorage {
    /// 列出在籍学生（分页）
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let mut select = Students::find().filter(Column::IsActive.eq(true));

        // 搜索条件：名、姓或学号
        if let Some(search) = normalize_search(query.search.as_deref()) {
            select = select.filter(icontains_any(
                &[Column::FirstName, Column::LastName, Column::StudentId],
                &search,
            ));
        }

        // 年级筛选（按标签原样比较）
        if let Some(grade) = normalize_filter(query.grade.as_deref()) {
            select = select.filter(Column::Grade.eq(grade));
        }

        // 排序：年级、名、姓
        select = select
            .order_by_asc(Column::Grade)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::Id);

        let (students, window) = self
            .fetch_page_window(select, STUDENT_PAGE_SIZE, query.page, "学生")
            .await?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: window.into_info(),
        })
    }

    /// 学生详情：选课科目、全部成绩（考试日期倒序）与平均分
    pub async fn get_student_detail_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        let Some(student) = Students::find_by_id(id)
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(None);
        };

        let subjects = student
            .find_related(Subjects)
            .order_by_asc(subjects::Column::Name)
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生科目失败: {e}")))?;

        let grades = Grades::find()
            .filter(grades::Column::StudentId.eq(id))
            .order_by_desc(grades::Column::ExamDate)
            .order_by_desc(grades::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生成绩失败: {e}")))?;

        let values: Vec<_> = grades.iter().map(|g| g.grade).collect();
        let grades = self.load_grade_records(grades).await?;

        Ok(Some(StudentDetail {
            student: student.into_student(),
            subjects: subjects.into_iter().map(|m| m.into_subject()).collect(),
            grades,
            avg_grade: average(&values),
        }))
    }

    /// 创建学生及选课关系
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        // 字段校验
        validate_required_text(&req.student_id, 20)
            .map_err(|msg| SchoolError::validation(format!("student_id: {msg}")))?;
        validate_required_text(&req.first_name, 50)
            .map_err(|msg| SchoolError::validation(format!("first_name: {msg}")))?;
        validate_required_text(&req.last_name, 50)
            .map_err(|msg| SchoolError::validation(format!("last_name: {msg}")))?;
        validate_required_text(&req.parent_name, 100)
            .map_err(|msg| SchoolError::validation(format!("parent_name: {msg}")))?;

        let email = req.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());
        if let Some(ref email) = email {
            validate_email(email).map_err(SchoolError::invalid_email_format)?;
        }
        let phone = req.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
        if let Some(ref phone) = phone {
            validate_phone(phone).map_err(SchoolError::invalid_phone_format)?;
        }
        validate_phone(req.parent_phone.trim()).map_err(SchoolError::invalid_phone_format)?;

        let student_id = req.student_id.trim().to_string();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        // 唯一性校验
        let exists = Students::find()
            .filter(Column::StudentId.eq(&student_id))
            .count(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学号失败: {e}")))?;
        if exists > 0 {
            return Err(SchoolError::duplicate_student_id(format!(
                "Student with this Student ID already exists: {student_id}"
            )));
        }

        let subject_ids = Self::ensure_subjects_exist(&txn, &req.subject_ids).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            student_id: Set(student_id),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(email),
            phone: Set(phone),
            gender: Set(req.gender.to_string()),
            date_of_birth: Set(req.date_of_birth),
            grade: Set(req.grade.to_string()),
            enrollment_date: Set(req.enrollment_date),
            address: Set(req.address),
            parent_name: Set(req.parent_name.trim().to_string()),
            parent_phone: Set(req.parent_phone.trim().to_string()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建学生失败: {e}")))?;

        // 选课关系
        if !subject_ids.is_empty() {
            let links = subject_ids
                .into_iter()
                .map(|subject_id| student_subjects::ActiveModel {
                    student_id: Set(result.id),
                    subject_id: Set(subject_id),
                });
            StudentSubjects::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("创建选课关系失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 停用或恢复学生
    pub async fn set_student_active_impl(&self, id: i64, is_active: bool) -> Result<bool> {
        let Some(student) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut model: ActiveModel = student.into();
        model.is_active = Set(is_active);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新学生状态失败: {e}")))?;

        Ok(true)
    }
}
