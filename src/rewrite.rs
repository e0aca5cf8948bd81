use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::model::{FunctionConfig, Reference, RewriteReport, RewriteWarning, RewrittenGrant};

/// Type tag of the resources this pass inspects.
pub const PERMISSION_TYPE: &str = "AWS::Lambda::Permission";

/// Label the concurrency mechanism appends to its alias references.
const PROVISIONED_LABEL: &str = "provisioned";

/// Builds the canonical-function-id -> canary-alias lookup.
///
/// Functions without rollout settings, without an alias label, or with an
/// empty label are skipped; absence is never an error.
pub fn build_alias_lookup<'a, I, C, N>(
    function_names: I,
    config_of: C,
    canonical_id_of: N,
) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
    C: Fn(&str) -> Option<&'a FunctionConfig>,
    N: Fn(&str) -> String,
{
    let mut lookup = BTreeMap::new();
    for name in function_names {
        let Some(alias) = config_of(name).and_then(FunctionConfig::rollout_alias) else {
            continue;
        };
        lookup.insert(canonical_id_of(name), alias.to_string());
    }
    lookup
}

/// True iff the reference points at a concurrency-managed alias: a join on
/// `":"` of exactly two parts whose second part is the literal
/// `"provisioned"`. Any other shape, recognized or not, is a non-match.
pub fn matches_provisioned_reference(reference: &Reference) -> bool {
    match reference {
        Reference::Join { delimiter, parts } => {
            delimiter == ":"
                && parts.len() == 2
                && parts[1] == Reference::Literal(PROVISIONED_LABEL.to_string())
        }
        _ => false,
    }
}

/// Logical name of the canary alias resource for a function, as produced by
/// the upstream alias-creation step.
pub fn alias_resource_name(function_id: &str, alias: &str) -> String {
    format!("{function_id}Alias{alias}")
}

enum Grant<'a> {
    /// Not a provisioned-alias reference; leave it alone.
    Skip,
    /// Provisioned-alias shape, but the first operand is not the expected
    /// attribute read.
    Malformed,
    /// Provisioned-alias reference on this canonical function id.
    Function(&'a str),
}

fn classify(reference: &Reference) -> Grant<'_> {
    if !matches_provisioned_reference(reference) {
        return Grant::Skip;
    }
    match reference {
        Reference::Join { parts, .. } => match parts.first() {
            Some(Reference::GetAtt { resource, .. }) => Grant::Function(resource),
            _ => Grant::Malformed,
        },
        _ => Grant::Skip,
    }
}

/// Rewrites every permission grant that targets a concurrency alias of a
/// function in `aliases` so it references the canary alias resource instead.
///
/// Each resource is handled independently; a malformed entry yields a
/// warning for that resource and never aborts the pass.
pub fn rewrite_with_lookup(
    resources: &mut Map<String, Value>,
    aliases: &BTreeMap<String, String>,
) -> RewriteReport {
    let mut report = RewriteReport::default();
    let mut pending = Vec::new();

    for (name, resource) in resources.iter() {
        if resource.get("Type").and_then(Value::as_str) != Some(PERMISSION_TYPE) {
            continue;
        }
        let Some(function_name) = resource.get("Properties").and_then(|p| p.get("FunctionName"))
        else {
            continue;
        };

        let function_id = match classify(&Reference::from_value(function_name)) {
            Grant::Skip => continue,
            Grant::Malformed => {
                report.warnings.push(RewriteWarning::MalformedJoin {
                    resource: name.clone(),
                });
                continue;
            }
            Grant::Function(id) => id.to_string(),
        };

        // No canary alias declared; the concurrency-alias grant stands.
        let Some(alias) = aliases.get(&function_id) else {
            continue;
        };

        let target = alias_resource_name(&function_id, alias);
        if !resources.contains_key(&target) {
            report.warnings.push(RewriteWarning::DanglingAlias {
                resource: name.clone(),
                target: target.clone(),
            });
        }
        pending.push((name.clone(), target));
    }

    for (name, target) in pending {
        let slot = resources
            .get_mut(&name)
            .and_then(|r| r.get_mut("Properties"))
            .and_then(|p| p.get_mut("FunctionName"));
        if let Some(slot) = slot {
            *slot = Reference::Ref(target.clone()).to_value();
            report.rewritten.push(RewrittenGrant {
                resource: name,
                target,
            });
        }
    }

    report
}

/// One-call entry point: builds the alias lookup from configuration, then
/// rewrites the resource map in place.
pub fn rewrite_permissions<'a, I, C, N>(
    resources: &mut Map<String, Value>,
    function_names: I,
    config_of: C,
    canonical_id_of: N,
) -> RewriteReport
where
    I: IntoIterator<Item = &'a str>,
    C: Fn(&str) -> Option<&'a FunctionConfig>,
    N: Fn(&str) -> String,
{
    let aliases = build_alias_lookup(function_names, config_of, canonical_id_of);
    rewrite_with_lookup(resources, &aliases)
}
