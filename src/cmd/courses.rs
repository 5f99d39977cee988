use anyhow::Result;
use clap::{Args, Subcommand};

use crate::academy::Academy;
use crate::config::Config;
use crate::display::{self, DisplayStyle};
use crate::types::course::Course;

/// Manage the in-memory course catalog.
#[derive(Args)]
pub struct CoursesArgs {
    #[command(subcommand)]
    pub command: CoursesCommand,
}

#[derive(Subcommand)]
pub enum CoursesCommand {
    List(ListCoursesArgs),
    Add(AddCourseArgs),
    Enroll(EnrollArgs),
}

/// List courses.
#[derive(Args)]
pub struct ListCoursesArgs {
    /// Output style.
    #[arg(short, long, value_enum, default_value = "table")]
    pub style: DisplayStyle,
}

/// Create a course.
#[derive(Args)]
pub struct AddCourseArgs {
    /// Course name.
    pub name: String,

    /// Instructor user name; must be a teacher or administrator.
    pub instructor: String,

    /// Course code. Auto-generated when omitted.
    #[arg(long)]
    pub code: Option<String>,

    /// Course description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Credit count.
    #[arg(long, default_value_t = 3)]
    pub credits: u32,
}

/// Enroll a student in a course.
#[derive(Args)]
pub struct EnrollArgs {
    /// Student user name.
    pub student: String,

    /// Course code.
    pub code: String,
}

impl CoursesArgs {
    pub fn run(&self, cfg: &Config) -> Result<()> {
        let academy = Academy::new(cfg)?;

        match &self.command {
            CoursesCommand::List(args) => {
                display::display_list(academy.list_courses()?, args.style)?;
            }
            CoursesCommand::Add(args) => {
                let mut builder = Course::builder(&args.name, &args.instructor)
                    .description(&args.description)
                    .credits(args.credits);
                if let Some(ref code) = args.code {
                    builder = builder.code(code);
                }

                let course = academy.create_course(builder.build())?;
                println!("Course '{}' saved with code {}", course.name, course.code);
            }
            CoursesCommand::Enroll(args) => {
                academy.enroll(&args.student, &args.code)?;
                println!("Enrolled '{}' in {}", args.student, args.code);
            }
        }

        Ok(())
    }
}
