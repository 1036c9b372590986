//! 成绩存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, icontains_any};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Model};
use crate::entity::prelude::{Students, Subjects, Teachers};
use crate::entity::{students, subjects, teachers};
use crate::errors::{Result, SchoolError};
use crate::models::{
    common::normalize_search,
    grades::{
        entities::{Grade, GradeRecord},
        requests::{CreateGradeRequest, GradeListQuery},
        responses::GradeListResponse,
    },
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};
use tracing::warn;

// 成绩列表每页条数
const GRADE_PAGE_SIZE: u64 = 15;

// decimal(5,2) 能表示的上限（不含）
const GRADE_VALUE_LIMIT: i64 = 1000;

impl SeaOrmStorage {
    /// 列出成绩（分页），不区分学生是否在籍
    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let mut select = Grades::find();

        // 搜索条件：学生名、姓或学号
        if let Some(search) = normalize_search(query.search.as_deref()) {
            let matching_students = Students::find()
                .select_only()
                .column(students::Column::Id)
                .filter(icontains_any(
                    &[
                        students::Column::FirstName,
                        students::Column::LastName,
                        students::Column::StudentId,
                    ],
                    &search,
                ))
                .into_query();
            select = select.filter(Column::StudentId.in_subquery(matching_students));
        }

        // 科目筛选
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        // 排序：考试日期倒序
        select = select
            .order_by_desc(Column::ExamDate)
            .order_by_desc(Column::Id);

        let (grades, window) = self
            .fetch_page_window(select, GRADE_PAGE_SIZE, query.page, "成绩")
            .await?;

        Ok(GradeListResponse {
            items: self.load_grade_records(grades).await?,
            pagination: window.into_info(),
        })
    }

    /// 为成绩行批量加载学生、科目、教师摘要，保持输入顺序
    pub(crate) async fn load_grade_records(&self, grades: Vec<Model>) -> Result<Vec<GradeRecord>> {
        if grades.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<i64> = grades.iter().map(|g| g.student_id).collect();
        let subject_ids: Vec<i64> = grades.iter().map(|g| g.subject_id).collect();
        let teacher_ids: Vec<i64> = grades.iter().map(|g| g.teacher_id).collect();

        let students: HashMap<i64, _> = Students::find()
            .filter(students::Column::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩学生失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_student().summary()))
            .collect();

        let subjects: HashMap<i64, _> = Subjects::find()
            .filter(subjects::Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩科目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_subject().summary()))
            .collect();

        let teachers: HashMap<i64, _> = Teachers::find()
            .filter(teachers::Column::Id.is_in(teacher_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩教师失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_teacher().summary()))
            .collect();

        Ok(grades
            .into_iter()
            .filter_map(|m| {
                let student = students.get(&m.student_id).cloned();
                let subject = subjects.get(&m.subject_id).cloned();
                let teacher = teachers.get(&m.teacher_id).cloned();
                match (student, subject, teacher) {
                    (Some(student), Some(subject), Some(teacher)) => {
                        Some(GradeRecord::new(m.into_grade(), student, subject, teacher))
                    }
                    _ => {
                        warn!("成绩 {} 的关联记录缺失，已跳过", m.id);
                        None
                    }
                }
            })
            .collect())
    }

    /// 录入成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        validate_grade_values(req.grade, req.max_grade)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        let student = Students::find_by_id(req.student_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;
        if student.is_none() {
            return Err(SchoolError::not_found(format!(
                "Student not found: {}",
                req.student_id
            )));
        }

        let subject = Subjects::find_by_id(req.subject_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目失败: {e}")))?;
        if subject.is_none() {
            return Err(SchoolError::not_found(format!(
                "Subject not found: {}",
                req.subject_id
            )));
        }

        let teacher = Teachers::find_by_id(req.teacher_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;
        if teacher.is_none() {
            return Err(SchoolError::not_found(format!(
                "Teacher not found: {}",
                req.teacher_id
            )));
        }

        // 同一学生、同一科目、同一考试日期只能有一条成绩
        let duplicates = Grades::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::SubjectId.eq(req.subject_id))
            .filter(Column::ExamDate.eq(req.exam_date))
            .count(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩失败: {e}")))?;
        if duplicates > 0 {
            return Err(SchoolError::duplicate_student_subject_exam_date(format!(
                "Grade with this Student, Subject and Exam date already exists: {} / {} / {}",
                req.student_id, req.subject_id, req.exam_date
            )));
        }

        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            grade: Set(req.grade),
            max_grade: Set(req.max_grade),
            exam_date: Set(req.exam_date),
            notes: Set(req.notes.filter(|n| !n.trim().is_empty())),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("录入成绩失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_grade())
    }
}

/// 成绩取值校验：非负、满分大于 0，且都在 decimal(5,2) 范围内
fn validate_grade_values(grade: Decimal, max_grade: Decimal) -> Result<()> {
    let limit = Decimal::from(GRADE_VALUE_LIMIT);
    let fits = |v: Decimal| v.abs() < limit && v.round_dp(2) == v;

    if grade.is_sign_negative() && !grade.is_zero() {
        return Err(SchoolError::invalid_grade_value(format!(
            "Grade must not be negative: {grade}"
        )));
    }
    if max_grade <= Decimal::ZERO {
        return Err(SchoolError::invalid_grade_value(format!(
            "Max grade must be greater than zero: {max_grade}"
        )));
    }
    if !fits(grade) || !fits(max_grade) {
        return Err(SchoolError::invalid_grade_value(
            "Grade values must have at most 3 integer digits and 2 decimal places",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_grade_values() {
        assert!(validate_grade_values(Decimal::from(85), Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_grade_values(Decimal::ZERO, Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_grade_values(Decimal::new(9975, 2), Decimal::ONE_HUNDRED).is_ok());
    }

    #[test]
    fn test_reject_invalid_grade_values() {
        let err = validate_grade_values(Decimal::from(-1), Decimal::ONE_HUNDRED).unwrap_err();
        assert_eq!(err.code(), "E106");
        assert!(validate_grade_values(Decimal::from(10), Decimal::ZERO).is_err());
        assert!(validate_grade_values(Decimal::from(1000), Decimal::from(1000)).is_err());
        assert!(validate_grade_values(Decimal::new(85125, 3), Decimal::ONE_HUNDRED).is_err());
    }
}
