use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{
    students::entities::StudentSummary, subjects::entities::SubjectSummary,
    teachers::entities::TeacherSummary,
};

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    #[ts(type = "string")]
    pub grade: Decimal,
    #[ts(type = "string")]
    pub max_grade: Decimal,
    pub exam_date: chrono::NaiveDate,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Grade {
    pub fn percentage(&self) -> Option<Decimal> {
        percentage(self.grade, self.max_grade)
    }
}

// 成绩行（附带学生、科目、教师摘要，供列表与详情页展示）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeRecord {
    pub id: i64,
    pub student: StudentSummary,
    pub subject: SubjectSummary,
    pub teacher: TeacherSummary,
    #[ts(type = "string")]
    pub grade: Decimal,
    #[ts(type = "string")]
    pub max_grade: Decimal,
    // max_grade 为 0 时为 null
    #[ts(type = "string | null")]
    pub percentage: Option<Decimal>,
    // 保留一位小数，如 "85.0%"
    pub percentage_display: Option<String>,
    pub exam_date: chrono::NaiveDate,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl GradeRecord {
    pub fn new(
        grade: Grade,
        student: StudentSummary,
        subject: SubjectSummary,
        teacher: TeacherSummary,
    ) -> Self {
        let percentage = grade.percentage();
        Self {
            id: grade.id,
            student,
            subject,
            teacher,
            grade: grade.grade,
            max_grade: grade.max_grade,
            percentage,
            percentage_display: percentage.map(format_percentage),
            exam_date: grade.exam_date,
            notes: grade.notes,
            created_at: grade.created_at,
        }
    }
}

/// 百分比 = grade / max_grade * 100；max_grade 为 0 时返回 None
pub fn percentage(grade: Decimal, max_grade: Decimal) -> Option<Decimal> {
    grade
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(max_grade)
}

pub fn format_percentage(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

/// 算术平均值；没有数据时返回 None
pub fn average(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().copied().sum();
    sum.checked_div(Decimal::from(values.len() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(
            percentage(Decimal::from(85), Decimal::from(100)),
            Some(Decimal::from(85))
        );
        assert_eq!(
            percentage(Decimal::from(45), Decimal::from(50)),
            Some(Decimal::from(90))
        );
        assert_eq!(percentage(Decimal::from(10), Decimal::ZERO), None);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Decimal::from(85)), "85.0%");
        let two_thirds = percentage(Decimal::from(2), Decimal::from(3)).unwrap();
        assert_eq!(format_percentage(two_thirds), "66.7%");
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[Decimal::from(85)]), Some(Decimal::from(85)));
        assert_eq!(
            average(&[Decimal::from(80), Decimal::from(91)]),
            Some(Decimal::new(855, 1))
        );
    }
}
