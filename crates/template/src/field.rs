//! Symbolic field names that bind template elements to record data.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The closed set of text fields a `dynamic` element can display.
///
/// Names outside the set decode to [`DynamicField::Other`] and render as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DynamicField {
    StudentName,
    AdmissionNumber,
    StudentGender,
    DateOfBirth,
    ClassName,
    SectionName,
    ClassSection,
    SchoolName,
    SchoolAddress,
    SchoolPhone,
    SchoolEmail,
    SchoolMotto,
    SessionName,
    TermName,
    TotalScore,
    AverageScore,
    OverallGrade,
    Position,
    StudentsInClass,
    PositionInClass,
    TeacherComment,
    AdminComment,
    CumulativeTotal,
    CumulativeAverage,
    TermCount,
    SubjectCount,
    GradingScale,
    Other(String),
}

const DYNAMIC_FIELDS: &[(&str, DynamicField)] = &[
    ("student_name", DynamicField::StudentName),
    ("admission_number", DynamicField::AdmissionNumber),
    ("student_gender", DynamicField::StudentGender),
    ("date_of_birth", DynamicField::DateOfBirth),
    ("class_name", DynamicField::ClassName),
    ("section_name", DynamicField::SectionName),
    ("class_section", DynamicField::ClassSection),
    ("school_name", DynamicField::SchoolName),
    ("school_address", DynamicField::SchoolAddress),
    ("school_phone", DynamicField::SchoolPhone),
    ("school_email", DynamicField::SchoolEmail),
    ("school_motto", DynamicField::SchoolMotto),
    ("session_name", DynamicField::SessionName),
    ("term_name", DynamicField::TermName),
    ("total_score", DynamicField::TotalScore),
    ("average_score", DynamicField::AverageScore),
    ("overall_grade", DynamicField::OverallGrade),
    ("position", DynamicField::Position),
    ("students_in_class", DynamicField::StudentsInClass),
    ("position_in_class", DynamicField::PositionInClass),
    ("teacher_comment", DynamicField::TeacherComment),
    ("admin_comment", DynamicField::AdminComment),
    ("cumulative_total", DynamicField::CumulativeTotal),
    ("cumulative_average", DynamicField::CumulativeAverage),
    ("term_count", DynamicField::TermCount),
    ("subject_count", DynamicField::SubjectCount),
    ("grading_scale", DynamicField::GradingScale),
];

impl DynamicField {
    pub fn as_str(&self) -> &str {
        match self {
            DynamicField::Other(name) => name,
            known => DYNAMIC_FIELDS
                .iter()
                .find(|(_, field)| field == known)
                .map(|(name, _)| *name)
                .unwrap_or_default(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DynamicField::Other(_))
    }
}

impl FromStr for DynamicField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Ok(DYNAMIC_FIELDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, field)| field.clone())
            .unwrap_or_else(|| DynamicField::Other(key.to_string())))
    }
}

impl fmt::Display for DynamicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The image slots a template can bind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageField {
    SchoolLogo,
    StudentPhoto,
    Other(String),
}

impl ImageField {
    pub fn as_str(&self) -> &str {
        match self {
            ImageField::SchoolLogo => "school_logo",
            ImageField::StudentPhoto => "student_photo",
            ImageField::Other(name) => name,
        }
    }

    /// The caption drawn on a placeholder box: `school_logo` becomes `SCHOOL LOGO`.
    pub fn placeholder_caption(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl FromStr for ImageField {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "school_logo" => ImageField::SchoolLogo,
            "student_photo" => ImageField::StudentPhoto,
            other => ImageField::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ImageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dynamic_fields_round_trip_their_names() {
        for (name, field) in DYNAMIC_FIELDS {
            let parsed: DynamicField = name.parse().unwrap();
            assert_eq!(&parsed, field);
            assert_eq!(parsed.as_str(), *name);
        }
    }

    #[test]
    fn unknown_dynamic_field_is_kept_verbatim() {
        let parsed: DynamicField = "favourite_colour".parse().unwrap();
        assert_eq!(parsed, DynamicField::Other("favourite_colour".to_string()));
        assert!(!parsed.is_known());
    }

    #[test]
    fn dynamic_field_names_are_case_sensitive() {
        let parsed: DynamicField = "Student_Name".parse().unwrap();
        assert!(!parsed.is_known());
    }

    #[test]
    fn placeholder_caption_is_uppercased_with_spaces() {
        assert_eq!(ImageField::SchoolLogo.placeholder_caption(), "SCHOOL LOGO");
        assert_eq!(ImageField::StudentPhoto.placeholder_caption(), "STUDENT PHOTO");
        let other: ImageField = "class_teacher_signature".parse().unwrap();
        assert_eq!(other.placeholder_caption(), "CLASS TEACHER SIGNATURE");
    }
}
