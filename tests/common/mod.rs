#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// A permission-grant resource with the given `FunctionName` value.
pub fn permission(function_name: Value) -> Value {
    json!({
        "Type": "AWS::Lambda::Permission",
        "Properties": {
            "FunctionName": function_name,
            "Action": "lambda:InvokeFunction",
            "Principal": "apigateway.amazonaws.com"
        }
    })
}

/// The concurrency-alias reference shape for a function's canonical id.
pub fn provisioned_reference(function_id: &str) -> Value {
    json!({
        "Fn::Join": [":", [{ "Fn::GetAtt": [function_id, "Arn"] }, "provisioned"]]
    })
}

/// A canary alias resource, named the way the pipeline names them.
pub fn alias_resource(function_id: &str) -> Value {
    json!({
        "Type": "AWS::Lambda::Alias",
        "Properties": { "FunctionName": { "Ref": function_id } }
    })
}

pub fn resources(value: Value) -> Map<String, Value> {
    value
        .as_object()
        .expect("resource fixture must be an object")
        .clone()
}

/// Functions config with one entry per (name, alias) pair.
pub fn functions_config(entries: &[(&str, Option<&str>)]) -> Value {
    let mut out = Map::new();
    for (name, alias) in entries {
        let config = match alias {
            Some(alias) => json!({ "deploymentSettings": { "alias": alias } }),
            None => json!({}),
        };
        out.insert(name.to_string(), config);
    }
    Value::Object(out)
}
