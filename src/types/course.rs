use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::display::TerminalDisplay;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code. Left empty by the builder when the caller did
    /// not pick one; the store assigns a sequential code on save.
    #[serde(default)]
    pub code: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_credits")]
    pub credits: u32,

    pub instructor: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<String>,

    #[serde(default)]
    pub create_time: u64,
}

impl Course {
    pub fn builder(name: impl ToString, instructor: impl ToString) -> CourseBuilder {
        CourseBuilder {
            course: Course {
                code: String::new(),
                name: name.to_string(),
                description: String::new(),
                credits: default_credits(),
                instructor: instructor.to_string(),
                students: Vec::new(),
                create_time: crate::time::now(),
            },
        }
    }

    pub fn is_enrolled(&self, student: &str) -> bool {
        self.students.iter().any(|s| s == student)
    }
}

/// Step-wise course construction; all fields except name and instructor
/// are optional.
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn code(mut self, code: impl ToString) -> Self {
        self.course.code = code.to_string();
        self
    }

    pub fn description(mut self, description: impl ToString) -> Self {
        self.course.description = description.to_string();
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.course.credits = credits;
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}

impl TerminalDisplay for Course {
    fn table_titles() -> Vec<&'static str> {
        vec!["Code", "Name", "Instructor", "Credits", "Students"]
    }

    fn table_row(self) -> Vec<String> {
        vec![
            self.code,
            self.name,
            self.instructor,
            self.credits.to_string(),
            self.students.len().to_string(),
        ]
    }

    fn csv_titles() -> Vec<&'static str> {
        vec!["code", "name", "instructor", "credits", "students"]
    }

    fn csv_row(self) -> HashMap<&'static str, String> {
        vec![
            ("code", self.code),
            ("name", self.name),
            ("instructor", self.instructor),
            ("credits", self.credits.to_string()),
            ("students", self.students.len().to_string()),
        ]
        .into_iter()
        .collect()
    }
}

fn default_credits() -> u32 {
    3
}
