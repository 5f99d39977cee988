use anyhow::Result;
use clap::Args;

use crate::access::factory::AccessFactory;
use crate::config::Config;

/// Check whether a role may perform an action on a resource.
#[derive(Args)]
pub struct CaniArgs {
    /// Role to check, e.g. "Teacher". Unknown role names are denied.
    pub role: String,

    /// Action to check, one of: Read, Create, Update, Delete.
    pub action: String,

    /// Resource the action targets, e.g. "Courses".
    pub resource: String,
}

impl CaniArgs {
    pub fn run(&self, _cfg: &Config) -> Result<()> {
        let chain = AccessFactory::new().build_authorizer();
        let allow = chain.authorize(&self.role, &self.resource, &self.action);
        println!("{allow}");
        Ok(())
    }
}
