//! The read-only academic-record bundle handed to a render.
//!
//! Shapes follow the JSON the surrounding application produces (camelCase
//! keys, nested `user`/`class`/`section` objects). Every field is optional:
//! a report card with partial data must still render.

mod lenient;
mod record;

pub use lenient::format_number;
pub use record::{
    AcademicSession, ClassInfo, ComponentRef, ComponentScore, Cumulative, GradeBand, Named,
    Period, RenderData, School, Student, StudentClass, SubjectResult, Summary, User,
};
