mod config;
mod reference;
mod report;
mod template;

pub use self::config::{DeploymentSettings, FunctionConfig};
pub use self::reference::Reference;
pub use self::report::{RewriteReport, RewriteWarning, RewrittenGrant};
pub use self::template::Template;
