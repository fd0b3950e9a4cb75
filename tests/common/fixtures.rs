use serde_json::{Value, json};

/// The subjects table used in the end-to-end scenarios.
pub fn subjects_table(rows: usize) -> Value {
    json!({
        "type": "table", "x": 40, "y": 300, "width": 714, "height": 120,
        "metadata": {
            "rows": rows, "cols": 6,
            "headers": ["Subject", "CA1", "CA2", "Exam", "Total", "Grade"],
            "tableType": "subjects"
        }
    })
}

pub fn affective_table() -> Value {
    json!({
        "type": "table", "x": 40, "y": 500, "width": 400, "height": 120,
        "metadata": {
            "rows": 3, "cols": 4,
            "headers": ["Trait", "1", "2", "3"],
            "tableType": "affective",
            "traits": ["Punctuality", "Neatness", "Honesty"]
        }
    })
}

pub fn subject_result(name: &str, ca1: f64, ca2: f64, exam: f64, grade: &str) -> Value {
    json!({
        "subject": { "name": name },
        "total": ca1 + ca2 + exam,
        "grade": grade,
        "remark": "Good",
        "componentScores": [
            { "component": { "name": "CA1" }, "score": ca1 },
            { "component": { "name": "CA2" }, "score": ca2 },
            { "component": { "name": "Exam" }, "score": exam }
        ],
        "affectiveTraits": { "Punctuality": "2", "Neatness": 3 }
    })
}

/// A complete record for one student.
pub fn student_record() -> Value {
    json!({
        "student": {
            "admissionNumber": "ADM-001",
            "user": { "name": "Ada Lovelace" }
        },
        "school": {
            "name": "Analytical Academy",
            "address": "12 Engine Row",
            "motto": "Numbers and Poetry"
        },
        "studentClass": { "class": { "name": "JSS 2" }, "section": { "name": "A" } },
        "academicSession": { "name": "2025/2026" },
        "period": { "name": "First Term" },
        "results": [
            subject_result("Mathematics", 15.0, 18.0, 40.0, "B"),
            subject_result("English", 12.0, 14.0, 45.0, "B")
        ],
        "gradingScale": [
            { "min": 70, "max": 100, "grade": "A", "remark": "Excellent" },
            { "min": 0, "max": 39, "grade": "F", "remark": "Fail" }
        ],
        "summary": { "totalScore": 144, "average": 72, "overallGrade": "A", "position": "3", "studentsInClass": 40 }
    })
}

/// A report-card layout touching every element type.
pub fn report_card_template() -> Value {
    json!({
        "content": {
            "elements": [
                { "type": "shape", "x": 0, "y": 0, "width": 794, "height": 120,
                  "style": { "backgroundColor": "#1f3a5f" } },
                { "type": "image", "x": 20, "y": 20, "width": 80, "height": 80,
                  "metadata": { "field": "school_logo", "isPlaceholder": true } },
                { "type": "dynamic", "x": 120, "y": 30, "width": 600, "height": 30,
                  "style": { "fontSize": 22, "fontWeight": "bold", "color": "#ffffff" },
                  "metadata": { "field": "school_name" } },
                { "type": "text", "x": 40, "y": 150, "width": 120, "height": 20, "content": "Student:" },
                { "type": "dynamic", "x": 170, "y": 150, "width": 300, "height": 20,
                  "metadata": { "field": "student_name" } },
                { "type": "line", "x": 40, "y": 175, "width": 714, "height": 1,
                  "style": { "borderBottom": "1px dashed #999999" } },
                { "type": "image", "x": 650, "y": 140, "width": 100, "height": 120,
                  "metadata": { "field": "student_photo", "isPlaceholder": true } },
                subjects_table(2),
                affective_table(),
                { "type": "dynamic", "x": 40, "y": 650, "width": 400, "height": 60,
                  "metadata": { "field": "grading_scale", "displayType": "list" } },
                { "type": "signature", "x": 0, "y": 0, "width": 10, "height": 10 }
            ]
        }
    })
}
