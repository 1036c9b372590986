mod common;

use common::*;
use rust_decimal::Decimal;
use school_records::errors::SchoolError;
use school_records::models::{
    GradeLevel,
    grades::requests::{CreateGradeRequest, GradeListQuery},
    students::requests::StudentListQuery,
    subjects::requests::CreateSubjectRequest,
    teachers::requests::TeacherListQuery,
};
use school_records::storage::Storage;

#[tokio::test]
async fn student_detail_reports_average_and_percentage() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![math.id]).await;
    grade(&storage, &omar, &math, &amina, 85, "2024-01-10").await;

    let detail = storage
        .get_student_detail(omar.id)
        .await
        .unwrap()
        .expect("active student is visible");

    assert_eq!(detail.student.full_name, "Omar Z");
    assert_eq!(detail.avg_grade, Some(Decimal::from(85)));
    assert_eq!(detail.grades.len(), 1);
    assert_eq!(detail.grades[0].percentage, Some(Decimal::from(85)));
    assert_eq!(detail.grades[0].percentage_display.as_deref(), Some("85.0%"));
    assert_eq!(detail.grades[0].teacher.full_name, "Amina K");
    assert_eq!(detail.subjects.len(), 1);
    assert_eq!(detail.subjects[0].code, "MTH1");
}

#[tokio::test]
async fn student_detail_orders_grades_by_exam_date_desc() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![math.id]).await;
    grade(&storage, &omar, &math, &amina, 80, "2024-01-10").await;
    grade(&storage, &omar, &math, &amina, 91, "2024-03-02").await;

    let detail = storage.get_student_detail(omar.id).await.unwrap().unwrap();
    let dates: Vec<_> = detail.grades.iter().map(|g| g.exam_date).collect();
    assert_eq!(dates, vec![date("2024-03-02"), date("2024-01-10")]);
    assert_eq!(detail.avg_grade, Some(Decimal::new(855, 1)));
}

#[tokio::test]
async fn student_without_grades_has_no_average() {
    let storage = setup_storage().await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![]).await;

    let detail = storage.get_student_detail(omar.id).await.unwrap().unwrap();
    assert!(detail.grades.is_empty());
    assert_eq!(detail.avg_grade, None);
}

#[tokio::test]
async fn unknown_or_inactive_student_is_not_found() {
    let storage = setup_storage().await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![]).await;

    assert!(storage.get_student_detail(omar.id + 100).await.unwrap().is_none());

    assert!(storage.set_student_active(omar.id, false).await.unwrap());
    assert!(storage.get_student_detail(omar.id).await.unwrap().is_none());

    // 恢复后重新可见
    assert!(storage.set_student_active(omar.id, true).await.unwrap());
    assert!(storage.get_student_detail(omar.id).await.unwrap().is_some());
}

#[tokio::test]
async fn duplicate_grade_triple_is_rejected() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![math.id]).await;
    grade(&storage, &omar, &math, &amina, 85, "2024-01-10").await;

    let err = storage
        .create_grade(grade_request(&omar, &math, &amina, 90, "2024-01-10"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolError::DuplicateStudentSubjectExamDate(_)));
    assert!(err.is_validation());

    let listed = storage
        .list_grades_with_pagination(GradeListQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.pagination.total, 1);
}

#[tokio::test]
async fn list_grades_search_by_student_id() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let science = subject(&storage, "Science", "SCI1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id, science.id]).await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![]).await;
    let layla = student(&storage, "S002", "Layla", "M", GradeLevel::Sixth, vec![]).await;
    grade(&storage, &omar, &math, &amina, 85, "2024-01-10").await;
    grade(&storage, &omar, &science, &amina, 70, "2024-02-15").await;
    grade(&storage, &layla, &math, &amina, 92, "2024-03-01").await;

    let result = storage
        .list_grades_with_pagination(GradeListQuery {
            page: Some(1),
            search: Some("S001".to_string()),
            subject_id: None,
        })
        .await
        .unwrap();

    assert_eq!(result.pagination.total, 2);
    assert!(result.items.iter().all(|g| g.student.student_id == "S001"));
    assert_eq!(result.items[0].exam_date, date("2024-02-15"));
    assert_eq!(result.items[1].exam_date, date("2024-01-10"));

    // 大小写不敏感
    let lower = storage
        .list_grades_with_pagination(GradeListQuery {
            search: Some("  s001 ".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(lower.pagination.total, 2);

    let by_subject = storage
        .list_grades_with_pagination(GradeListQuery {
            subject_id: Some(math.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_subject.pagination.total, 2);
    assert_eq!(by_subject.items[0].student.student_id, "S002");
}

#[tokio::test]
async fn list_grades_includes_inactive_students() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![math.id]).await;
    grade(&storage, &omar, &math, &amina, 85, "2024-01-10").await;

    storage.set_student_active(omar.id, false).await.unwrap();

    let grades = storage
        .list_grades_with_pagination(GradeListQuery::default())
        .await
        .unwrap();
    assert_eq!(grades.pagination.total, 1);

    let students = storage
        .list_students_with_pagination(StudentListQuery::default())
        .await
        .unwrap();
    assert_eq!(students.pagination.total, 0);
}

#[tokio::test]
async fn list_students_filters_and_orders() {
    let storage = setup_storage().await;
    student(&storage, "S010", "Zara", "B", GradeLevel::Fifth, vec![]).await;
    student(&storage, "S011", "Adam", "C", GradeLevel::Fifth, vec![]).await;
    student(&storage, "S012", "Mona", "D", GradeLevel::Third, vec![]).await;

    let all = storage
        .list_students_with_pagination(StudentListQuery::default())
        .await
        .unwrap();
    let names: Vec<_> = all.items.iter().map(|s| s.first_name.as_str()).collect();
    assert_eq!(names, vec!["Mona", "Adam", "Zara"]);

    let fifth = storage
        .list_students_with_pagination(StudentListQuery {
            grade: Some("5".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(fifth.pagination.total, 2);
    assert!(fifth.items.iter().all(|s| s.grade == GradeLevel::Fifth));

    // 无效年级标签只会得到空结果
    let invalid = storage
        .list_students_with_pagination(StudentListQuery {
            grade: Some("12".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(invalid.pagination.total, 0);
    assert_eq!(invalid.pagination.page, 1);
    assert_eq!(invalid.pagination.total_pages, 0);

    let searched = storage
        .list_students_with_pagination(StudentListQuery {
            search: Some("ZAR".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.pagination.total, 1);
    assert_eq!(searched.items[0].student_id, "S010");
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let storage = setup_storage().await;
    student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![]).await;

    for needle in ["%", "_", "O_ar"] {
        let result = storage
            .list_students_with_pagination(StudentListQuery {
                search: Some(needle.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(result.pagination.total, 0, "needle {needle:?}");
    }
}

#[tokio::test]
async fn pagination_clamps_out_of_range_pages() {
    let storage = setup_storage().await;
    for i in 0..12 {
        let sid = format!("S{:03}", i + 100);
        let first = format!("Student{i:02}");
        student(&storage, &sid, &first, "X", GradeLevel::First, vec![]).await;
    }

    let page = |p: Option<i64>| StudentListQuery {
        page: p,
        ..Default::default()
    };

    let first = storage.list_students_with_pagination(page(Some(0))).await.unwrap();
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.pagination.total_pages, 2);
    assert!(first.pagination.has_next);
    assert_eq!(first.pagination.next_page, Some(2));
    assert!(!first.pagination.has_previous);

    let last = storage.list_students_with_pagination(page(Some(99))).await.unwrap();
    assert_eq!(last.pagination.page, 2);
    assert_eq!(last.items.len(), 2);
    assert_eq!(last.pagination.previous_page, Some(1));
    assert!(!last.pagination.has_next);

    let none = storage.list_students_with_pagination(page(None)).await.unwrap();
    assert_eq!(none.pagination.page, 1);
    assert_eq!(none.items[0].first_name, "Student00");
}

#[tokio::test]
async fn list_teachers_subject_filter_is_distinct() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let science = subject(&storage, "Science", "SCI1").await;
    teacher(&storage, "Amina", "K", vec![math.id, science.id]).await;
    teacher(&storage, "Yusuf", "H", vec![science.id]).await;
    let retired = teacher(&storage, "Bilal", "R", vec![math.id]).await;
    storage.set_teacher_active(retired.id, false).await.unwrap();

    let math_teachers = storage
        .list_teachers_with_pagination(TeacherListQuery {
            subject_id: Some(math.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(math_teachers.pagination.total, 1);
    assert_eq!(math_teachers.items[0].full_name, "Amina K");

    let all = storage
        .list_teachers_with_pagination(TeacherListQuery::default())
        .await
        .unwrap();
    let names: Vec<_> = all.items.iter().map(|t| t.first_name.as_str()).collect();
    assert_eq!(names, vec!["Amina", "Yusuf"]);

    let by_email = storage
        .list_teachers_with_pagination(TeacherListQuery {
            search: Some("YUSUF.H@".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_email.pagination.total, 1);

    let unknown = storage
        .list_teachers_with_pagination(TeacherListQuery {
            subject_id: Some(9999),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(unknown.pagination.total, 0);
}

#[tokio::test]
async fn teacher_detail_counts_distinct_active_students() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let science = subject(&storage, "Science", "SCI1").await;
    let art = subject(&storage, "Art", "ART1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id, science.id]).await;

    // 同时选修两门课的学生只统计一次
    let omar = student(
        &storage,
        "S001",
        "Omar",
        "Z",
        GradeLevel::Fifth,
        vec![math.id, science.id],
    )
    .await;
    student(&storage, "S002", "Layla", "M", GradeLevel::Sixth, vec![science.id]).await;
    student(&storage, "S003", "Nour", "A", GradeLevel::Sixth, vec![art.id]).await;
    let gone = student(&storage, "S004", "Sami", "Q", GradeLevel::Sixth, vec![math.id]).await;
    storage.set_student_active(gone.id, false).await.unwrap();

    grade(&storage, &omar, &math, &amina, 85, "2024-01-10").await;
    grade(&storage, &omar, &science, &amina, 75, "2024-01-11").await;

    let detail = storage.get_teacher_detail(amina.id).await.unwrap().unwrap();
    assert_eq!(detail.students_count, 2);
    assert_eq!(detail.grades_count, 2);
    let codes: Vec<_> = detail.subjects.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["MTH1", "SCI1"]);

    storage.set_teacher_active(amina.id, false).await.unwrap();
    assert!(storage.get_teacher_detail(amina.id).await.unwrap().is_none());
}

#[tokio::test]
async fn subjects_report_active_counts() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let art = subject(&storage, "Art", "ART1").await;
    teacher(&storage, "Amina", "K", vec![math.id]).await;
    let retired = teacher(&storage, "Bilal", "R", vec![math.id]).await;
    storage.set_teacher_active(retired.id, false).await.unwrap();
    student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![math.id]).await;
    let gone = student(&storage, "S002", "Sami", "Q", GradeLevel::Fifth, vec![math.id]).await;
    storage.set_student_active(gone.id, false).await.unwrap();

    let subjects = storage.list_subjects_with_stats().await.unwrap();
    let names: Vec<_> = subjects.iter().map(|s| s.subject.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Math"]);

    assert_eq!(subjects[0].subject.id, art.id);
    assert_eq!(subjects[0].students_count, 0);
    assert_eq!(subjects[0].teachers_count, 0);
    assert_eq!(subjects[1].students_count, 1);
    assert_eq!(subjects[1].teachers_count, 1);
}

#[tokio::test]
async fn subject_detail_limits_recent_grades_but_averages_all() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![math.id]).await;
    let layla = student(&storage, "S002", "Layla", "M", GradeLevel::Fourth, vec![math.id]).await;

    // 12 次考试，分数 60..=82（偶数），平均 71
    for i in 0..12 {
        let exam_date = format!("2024-01-{:02}", i + 1);
        grade(&storage, &omar, &math, &amina, 60 + 2 * i, &exam_date).await;
    }

    let detail = storage.get_subject_detail(math.id).await.unwrap().unwrap();
    assert_eq!(detail.subject.to_string(), "Math (MTH1)");
    assert_eq!(detail.recent_grades.len(), 10);
    assert_eq!(detail.recent_grades[0].exam_date, date("2024-01-12"));
    assert_eq!(detail.avg_grade, Some(Decimal::from(71)));
    assert_eq!(detail.teachers.len(), 1);

    // 按年级排序：4 年级的 Layla 在前
    let ids: Vec<_> = detail.students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![layla.id, omar.id]);

    assert!(storage.get_subject_detail(math.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn home_summary_counts_and_recent_entries() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;
    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let mut students = Vec::new();
    for i in 0..6 {
        let sid = format!("S{:03}", i + 1);
        let first = format!("Kid{i}");
        students.push(student(&storage, &sid, &first, "Y", GradeLevel::Second, vec![]).await);
    }
    storage.set_student_active(students[5].id, false).await.unwrap();
    grade(&storage, &students[0], &math, &amina, 90, "2024-01-10").await;

    let summary = storage.get_home_summary().await.unwrap();
    assert_eq!(summary.total_students, 5);
    assert_eq!(summary.total_teachers, 1);
    assert_eq!(summary.total_subjects, 1);
    assert_eq!(summary.total_grades, 1);
    assert_eq!(summary.recent_students.len(), 5);
    // 最新登记的在籍学生排在最前
    assert_eq!(summary.recent_students[0].id, students[4].id);
    assert_eq!(summary.recent_teachers.len(), 1);
}

#[tokio::test]
async fn write_layer_validates_fields_and_uniqueness() {
    let storage = setup_storage().await;
    let math = subject(&storage, "Math", "MTH1").await;

    let err = storage
        .create_subject(CreateSubjectRequest {
            name: "Mathematics".to_string(),
            code: "MTH1".to_string(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolError::DuplicateCode(_)));

    let mut bad_email = teacher_request("Amina", "K", vec![math.id]);
    bad_email.email = "amina-at-school".to_string();
    let err = storage.create_teacher(bad_email).await.unwrap_err();
    assert!(matches!(err, SchoolError::InvalidEmailFormat(_)));

    let mut bad_phone = teacher_request("Amina", "K", vec![math.id]);
    bad_phone.phone = "12-34".to_string();
    let err = storage.create_teacher(bad_phone).await.unwrap_err();
    assert!(matches!(err, SchoolError::InvalidPhoneFormat(_)));

    let amina = teacher(&storage, "Amina", "K", vec![math.id]).await;
    let err = storage
        .create_teacher(teacher_request("Amina", "K", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolError::DuplicateEmail(_)));

    let omar = student(&storage, "S001", "Omar", "Z", GradeLevel::Fifth, vec![]).await;
    let err = storage
        .create_student(student_request("S001", "Other", "Kid", GradeLevel::First, vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolError::DuplicateStudentId(_)));

    let err = storage
        .create_grade(CreateGradeRequest {
            max_grade: Decimal::ZERO,
            ..grade_request(&omar, &math, &amina, 10, "2024-01-10")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolError::InvalidGradeValue(_)));

    // 失败的写入不会留下部分数据
    let err = storage
        .create_student(student_request("S002", "Layla", "M", GradeLevel::Sixth, vec![9999]))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolError::NotFound(_)));
    let students = storage
        .list_students_with_pagination(StudentListQuery::default())
        .await
        .unwrap();
    assert_eq!(students.pagination.total, 1);
}

#[tokio::test]
async fn demo_seed_runs_through_write_layer() {
    let storage = setup_storage().await;
    let summary = school_records::runtime::lifetime::demo::seed(&storage)
        .await
        .unwrap();
    assert_eq!(summary.grades, 3);
    assert_eq!(storage.count_subjects().await.unwrap(), 2);

    let omar = storage
        .list_grades_with_pagination(GradeListQuery {
            search: Some("S001".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(omar.pagination.total, 2);
}
