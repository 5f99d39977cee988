use anyhow::Result;
use clap::Args;
use console::style;

use crate::academy::Academy;
use crate::access::factory::AccessFactory;
use crate::access::gate::{AccessGate, SecureVault};
use crate::config::Config;
use crate::display::{self, DisplayStyle};
use crate::report::SystemReport;
use crate::table::Table;
use crate::types::course::Course;
use crate::types::user::Role;

/// Walk every subsystem end-to-end with the demo accounts: authorization
/// decisions, gated resource access, session lifecycle, courses,
/// notifications and the final report.
#[derive(Args)]
pub struct DemoArgs {}

impl DemoArgs {
    pub fn run(&self, cfg: &Config) -> Result<()> {
        let mut academy = Academy::new(cfg)?;

        section("Authorization chain");
        self.show_authorization();

        section("Access gates");
        self.show_gates()?;

        section("Session lifecycle");
        self.show_session(cfg, &mut academy)?;

        section("Courses");
        self.show_courses(&academy)?;

        section("Report");
        let report = SystemReport::collect(&academy)?;
        let mut table = Table::new(vec!["Metric", "Value"]);
        for (metric, value) in report.rows() {
            table.add(vec![metric.to_string(), value]);
        }
        table.show();

        section("Notification history");
        display::display_list(academy.notifications(), DisplayStyle::Table)?;

        Ok(())
    }

    fn show_authorization(&self) {
        let chain = AccessFactory::new().build_authorizer();
        let checks = [
            ("Administrator", "Delete", "Grades"),
            ("Teacher", "Update", "Grades"),
            ("Teacher", "Delete", "Grades"),
            ("Student", "Read", "Courses"),
            ("Student", "Read", "Grades"),
            ("Guest", "Read", "Courses"),
        ];

        let mut table = Table::new(vec!["Role", "Action", "Resource", "Allow"]);
        for (role, action, resource) in checks {
            let allow = chain.authorize(role, resource, action);
            table.add(vec![
                role.to_string(),
                action.to_string(),
                resource.to_string(),
                allow.to_string(),
            ]);
        }
        table.show();
    }

    fn show_gates(&self) -> Result<()> {
        for role in [Role::Administrator, Role::Teacher, Role::Student] {
            let mut gate: AccessGate<SecureVault> = AccessGate::new(role);

            let before = gate.read()?;
            gate.write(format!("Written by {role}"))?;
            let after = gate.read()?;

            println!(
                "{role}: read '{before}', then wrote, then read '{after}' \
                (resource opened: {})",
                gate.initialized()
            );
        }
        Ok(())
    }

    fn show_session(&self, cfg: &Config, academy: &mut Academy) -> Result<()> {
        let denied = academy.login("admin", "not-the-password")?;
        println!("login with wrong password: {:?}, session {}", denied, academy.session_state());

        academy.login("admin", &cfg.auth.admin_password)?;
        println!("login as admin: session {}", academy.session_state());

        academy.session_mut().activity();
        academy.expire_session();
        println!("after timeout event: session {}", academy.session_state());

        academy.login("admin", &cfg.auth.admin_password)?;
        println!("re-login: session {}", academy.session_state());

        academy.logout();
        println!("logout: session {}", academy.session_state());
        Ok(())
    }

    fn show_courses(&self, academy: &Academy) -> Result<()> {
        let course = academy.create_course(
            Course::builder("Modular Software Design", "teacher1")
                .description("Composition over inheritance, in practice")
                .credits(4)
                .build(),
        )?;
        academy.enroll("student1", &course.code)?;

        display::display_list(academy.list_courses()?, DisplayStyle::Table)?;
        Ok(())
    }
}

fn section(title: &str) {
    println!();
    println!("{}", style(format!("== {title} ==")).cyan().bold());
}
