use serde::{Deserialize, Serialize};

/// Per-function configuration as declared by the deployment pipeline.
///
/// Only the rollout settings matter to the rewriter; everything else a
/// function declares is ignored during parsing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FunctionConfig {
    #[serde(
        rename = "deploymentSettings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deployment_settings: Option<DeploymentSettings>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeploymentSettings {
    /// Canary alias label for staged rollout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl FunctionConfig {
    /// The declared canary alias, if any. Absence of the settings block, of
    /// the alias field, or an empty label all mean "no canary alias".
    pub fn rollout_alias(&self) -> Option<&str> {
        self.deployment_settings
            .as_ref()
            .and_then(|settings| settings.alias.as_deref())
            .filter(|alias| !alias.is_empty())
    }
}
