use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 查询方法只读、无副作用；停用（is_active = false）的学生和教师不会出现在任何查询结果中。
/// 写入方法供管理端与初始化流程使用，负责字段校验与唯一性约束。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 首页
    // 首页统计与最近登记的学生、教师
    async fn get_home_summary(&self) -> Result<HomeSummary>;

    /// 学生查询
    // 按姓名/学号搜索、按年级筛选的分页列表
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 学生详情（含成绩与平均分），不存在或已停用时返回 None
    async fn get_student_detail(&self, id: i64) -> Result<Option<StudentDetail>>;

    /// 教师查询
    // 按姓名/邮箱搜索、按科目筛选的分页列表
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 教师详情（含学生数、成绩数），不存在或已停用时返回 None
    async fn get_teacher_detail(&self, id: i64) -> Result<Option<TeacherDetail>>;

    /// 科目查询
    // 全部科目（按名称排序），用于筛选下拉框
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 全部科目及其在籍学生数、在职教师数
    async fn list_subjects_with_stats(&self) -> Result<Vec<SubjectWithStats>>;
    // 科目详情，不存在时返回 None
    async fn get_subject_detail(&self, id: i64) -> Result<Option<SubjectDetail>>;

    /// 成绩查询
    // 按学生姓名/学号搜索、按科目筛选的分页列表
    async fn list_grades_with_pagination(&self, query: GradeListQuery)
    -> Result<GradeListResponse>;

    /// 管理端写入
    // 创建科目
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    // 创建教师（含任课科目）
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher>;
    // 创建学生（含选课科目）
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    // 录入成绩
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade>;
    // 停用/恢复学生
    async fn set_student_active(&self, id: i64, is_active: bool) -> Result<bool>;
    // 停用/恢复教师
    async fn set_teacher_active(&self, id: i64, is_active: bool) -> Result<bool>;
    // 科目总数
    async fn count_subjects(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
