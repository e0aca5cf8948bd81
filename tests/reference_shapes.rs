mod common;

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::{Value, json};

use regrant::model::Reference;
use regrant::rewrite::{matches_provisioned_reference, rewrite_with_lookup};

fn live_api_lookup() -> BTreeMap<String, String> {
    [("ApiLambdaFunction".to_string(), "live".to_string())].into()
}

fn assert_untouched(function_name: Value) {
    let grant = common::permission(function_name);
    let mut resources = common::resources(json!({
        "ApiLambdaPermission": grant.clone(),
        "ApiLambdaFunctionAliaslive": common::alias_resource("ApiLambdaFunction")
    }));

    let report = rewrite_with_lookup(&mut resources, &live_api_lookup());

    assert_eq!(resources["ApiLambdaPermission"], grant);
    assert!(report.rewritten.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn direct_references_are_left_alone() {
    assert_untouched(json!({ "Ref": "SomeAlias" }));
}

#[test]
fn plain_strings_are_left_alone() {
    assert_untouched(json!("ApiLambdaFunction"));
}

#[test]
fn join_with_a_different_delimiter_is_not_a_match() {
    assert_untouched(json!({
        "Fn::Join": ["-", [{ "Fn::GetAtt": ["ApiLambdaFunction", "Arn"] }, "provisioned"]]
    }));
}

#[test]
fn join_with_a_different_label_is_not_a_match() {
    assert_untouched(json!({
        "Fn::Join": [":", [{ "Fn::GetAtt": ["ApiLambdaFunction", "Arn"] }, "live"]]
    }));
}

#[test]
fn join_with_the_wrong_arity_is_not_a_match() {
    assert_untouched(json!({
        "Fn::Join": [":", [{ "Fn::GetAtt": ["ApiLambdaFunction", "Arn"] }, "provisioned", "x"]]
    }));
    assert_untouched(json!({
        "Fn::Join": [":", [{ "Fn::GetAtt": ["ApiLambdaFunction", "Arn"] }]]
    }));
}

#[test]
fn join_whose_label_slot_is_an_expression_is_not_a_match() {
    assert_untouched(json!({
        "Fn::Join": [":", [{ "Fn::GetAtt": ["ApiLambdaFunction", "Arn"] }, { "Ref": "Label" }]]
    }));
}

#[test]
fn matcher_recognizes_exactly_the_provisioned_shape() -> Result<()> {
    let matching = Reference::from_value(&common::provisioned_reference("ApiLambdaFunction"));
    assert!(matches_provisioned_reference(&matching));

    for value in [
        json!({ "Ref": "ApiLambdaFunctionAliaslive" }),
        json!("provisioned"),
        json!({ "Fn::Join": ["-", ["a", "provisioned"]] }),
        json!({ "Fn::Join": [":", ["a", "b", "provisioned"]] }),
        json!({ "Fn::GetAtt": ["ApiLambdaFunction", "Arn"] }),
        json!(null),
    ] {
        assert!(
            !matches_provisioned_reference(&Reference::from_value(&value)),
            "unexpected match for {}",
            value
        );
    }
    Ok(())
}
