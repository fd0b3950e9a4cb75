use crate::lenient::{null_as_default, opt_count, opt_number, opt_text, ratings};
use serde::Deserialize;

/// Everything a single report card can show.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderData {
    pub student: Option<Student>,
    pub school: Option<School>,
    pub student_class: Option<StudentClass>,
    pub academic_session: Option<AcademicSession>,
    pub period: Option<Period>,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<SubjectResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub grading_scale: Vec<GradeBand>,
    pub summary: Option<Summary>,
    pub cumulative: Option<Cumulative>,
}

impl RenderData {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// The first subject result; comments and ratings are read from it.
    pub fn first_result(&self) -> Option<&SubjectResult> {
        self.results.first()
    }

    pub fn student_name(&self) -> Option<&str> {
        self.student.as_ref()?.user.as_ref()?.name.as_deref()
    }

    /// `user.image`, falling back to the student's own `profileImage`.
    pub fn student_photo(&self) -> Option<&str> {
        let student = self.student.as_ref()?;
        student
            .user
            .as_ref()
            .and_then(|u| non_blank(u.image.as_deref()))
            .or_else(|| non_blank(student.profile_image.as_deref()))
    }

    pub fn school_logo(&self) -> Option<&str> {
        non_blank(self.school.as_ref()?.logo.as_deref())
    }

    pub fn class_name(&self) -> Option<&str> {
        self.student_class.as_ref()?.class.as_ref()?.name.as_deref()
    }

    pub fn section_name(&self) -> Option<&str> {
        self.student_class.as_ref()?.section.as_ref()?.name.as_deref()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    #[serde(deserialize_with = "opt_text")]
    pub admission_number: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub profile_image: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct School {
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub motto: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub logo: Option<String>,
}

/// An entity that only contributes its display name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Named {
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
}

pub type ClassInfo = Named;
pub type AcademicSession = Named;
pub type Period = Named;
pub type ComponentRef = Named;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudentClass {
    pub class: Option<ClassInfo>,
    pub section: Option<Named>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubjectResult {
    pub subject: Option<Named>,
    #[serde(deserialize_with = "opt_number")]
    pub total: Option<f64>,
    #[serde(deserialize_with = "opt_text")]
    pub grade: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub remark: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub component_scores: Vec<ComponentScore>,
    #[serde(deserialize_with = "opt_text")]
    pub teacher_comment: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub admin_comment: Option<String>,
    #[serde(deserialize_with = "ratings")]
    pub affective_traits: Vec<(String, String)>,
    #[serde(deserialize_with = "ratings")]
    pub psychomotor_skills: Vec<(String, String)>,
}

impl SubjectResult {
    pub fn subject_name(&self) -> Option<&str> {
        self.subject.as_ref()?.name.as_deref()
    }

    pub fn affective_rating(&self, name: &str) -> Option<&str> {
        lookup(&self.affective_traits, name)
    }

    pub fn psychomotor_rating(&self, name: &str) -> Option<&str> {
        lookup(&self.psychomotor_skills, name)
    }
}

fn lookup<'a>(ratings: &'a [(String, String)], name: &str) -> Option<&'a str> {
    ratings
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, rating)| rating.as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentScore {
    pub component: Option<ComponentRef>,
    #[serde(deserialize_with = "opt_number")]
    pub score: Option<f64>,
}

impl ComponentScore {
    pub fn component_name(&self) -> Option<&str> {
        self.component.as_ref()?.name.as_deref()
    }
}

/// One band of the grading scale, e.g. `A: 70-100 (Excellent)`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradeBand {
    #[serde(alias = "minScore", deserialize_with = "opt_number")]
    pub min: Option<f64>,
    #[serde(alias = "maxScore", deserialize_with = "opt_number")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "opt_text")]
    pub grade: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Summary {
    #[serde(deserialize_with = "opt_number")]
    pub total_score: Option<f64>,
    #[serde(deserialize_with = "opt_number")]
    pub average: Option<f64>,
    #[serde(deserialize_with = "opt_text")]
    pub overall_grade: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub position: Option<String>,
    #[serde(deserialize_with = "opt_count")]
    pub students_in_class: Option<u32>,
}

/// Running totals from earlier terms of the same session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cumulative {
    #[serde(deserialize_with = "opt_number")]
    pub previous_total: Option<f64>,
    #[serde(deserialize_with = "opt_number")]
    pub average: Option<f64>,
    #[serde(deserialize_with = "opt_count")]
    pub term_count: Option<u32>,
}
