//! Dynamic field resolution.
//!
//! Every symbol maps to exactly one derivation from the record. Missing data
//! yields an empty string, except `position`, which reads `N/A`.

use itertools::Itertools;
use reportcard_record::{GradeBand, RenderData, format_number};
use reportcard_template::{DisplayType, DynamicField, ImageField};

const NOT_AVAILABLE: &str = "N/A";

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn number(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

fn percent(value: Option<f64>) -> String {
    value.map(|v| format!("{}%", format_number(v))).unwrap_or_default()
}

/// Resolves `field` to display text. Never fails.
pub fn resolve(field: &DynamicField, display: DisplayType, data: &RenderData) -> String {
    let student = data.student.as_ref();
    let school = data.school.as_ref();
    let summary = data.summary.as_ref();
    let cumulative = data.cumulative.as_ref();
    let first = data.first_result();

    match field {
        DynamicField::StudentName => text(data.student_name()),
        DynamicField::AdmissionNumber => text(student.and_then(|s| s.admission_number.as_deref())),
        DynamicField::StudentGender => text(student.and_then(|s| s.gender.as_deref())),
        DynamicField::DateOfBirth => text(student.and_then(|s| s.date_of_birth.as_deref())),
        DynamicField::ClassName => text(data.class_name()),
        DynamicField::SectionName => text(data.section_name()),
        DynamicField::ClassSection => [data.class_name(), data.section_name()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .join(" "),
        DynamicField::SchoolName => text(school.and_then(|s| s.name.as_deref())),
        DynamicField::SchoolAddress => text(school.and_then(|s| s.address.as_deref())),
        DynamicField::SchoolPhone => text(school.and_then(|s| s.phone.as_deref())),
        DynamicField::SchoolEmail => text(school.and_then(|s| s.email.as_deref())),
        DynamicField::SchoolMotto => text(school.and_then(|s| s.motto.as_deref())),
        DynamicField::SessionName => {
            text(data.academic_session.as_ref().and_then(|s| s.name.as_deref()))
        }
        DynamicField::TermName => text(data.period.as_ref().and_then(|p| p.name.as_deref())),
        DynamicField::TotalScore => number(summary.and_then(|s| s.total_score)),
        DynamicField::AverageScore => percent(summary.and_then(|s| s.average)),
        DynamicField::OverallGrade => text(summary.and_then(|s| s.overall_grade.as_deref())),
        DynamicField::Position => summary
            .and_then(|s| s.position.as_deref())
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        DynamicField::StudentsInClass => summary
            .and_then(|s| s.students_in_class)
            .map(|n| n.to_string())
            .unwrap_or_default(),
        DynamicField::PositionInClass => {
            let position = summary
                .and_then(|s| s.position.as_deref())
                .filter(|p| !p.trim().is_empty());
            match (position, summary.and_then(|s| s.students_in_class)) {
                (Some(position), Some(count)) => format!("{} of {}", position, count),
                (Some(position), None) => position.to_string(),
                (None, _) => NOT_AVAILABLE.to_string(),
            }
        }
        DynamicField::TeacherComment => text(first.and_then(|r| r.teacher_comment.as_deref())),
        DynamicField::AdminComment => text(first.and_then(|r| r.admin_comment.as_deref())),
        DynamicField::CumulativeTotal => {
            let previous = cumulative.and_then(|c| c.previous_total);
            let current = summary.and_then(|s| s.total_score);
            if previous.is_none() && current.is_none() {
                String::new()
            } else {
                format_number(previous.unwrap_or(0.0) + current.unwrap_or(0.0))
            }
        }
        DynamicField::CumulativeAverage => percent(cumulative.and_then(|c| c.average)),
        DynamicField::TermCount => cumulative
            .and_then(|c| c.term_count)
            .map(|n| n.to_string())
            .unwrap_or_default(),
        DynamicField::SubjectCount => data.results.len().to_string(),
        DynamicField::GradingScale => grading_scale(&data.grading_scale, display),
        DynamicField::Other(name) => {
            log::debug!("Unknown dynamic field '{}' resolves to empty text", name);
            String::new()
        }
    }
}

fn grading_scale(bands: &[GradeBand], display: DisplayType) -> String {
    let range = |band: &GradeBand| {
        format!(
            "{}: {}-{}",
            band.grade.as_deref().unwrap_or_default(),
            number(band.min),
            number(band.max)
        )
    };
    match display {
        DisplayType::Inline => bands.iter().map(range).join(", "),
        DisplayType::List => bands
            .iter()
            .map(|band| match band.remark.as_deref().filter(|r| !r.is_empty()) {
                Some(remark) => format!("{}% ({})", range(band), remark),
                None => format!("{}%", range(band)),
            })
            .join("\n"),
    }
}

/// The location an image slot points at, if the record has one.
pub fn image_location<'a>(field: &ImageField, data: &'a RenderData) -> Option<&'a str> {
    let location = match field {
        ImageField::SchoolLogo => data.school_logo(),
        ImageField::StudentPhoto => data.student_photo(),
        ImageField::Other(name) => {
            log::debug!("Unknown image field '{}'", name);
            None
        }
    };
    location.map(str::trim)
}
