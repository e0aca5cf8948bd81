/// Canonical logical id of a function's underlying resource, following the
/// pipeline's naming scheme: normalized function name + `LambdaFunction`.
///
/// Normalization uppercases the first character and spells out characters
/// the template's logical-id alphabet does not allow.
pub fn canonical_function_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + "LambdaFunction".len());
    for (i, c) in name.chars().enumerate() {
        match c {
            '-' => out.push_str("Dash"),
            '_' => out.push_str("Underscore"),
            c if i == 0 => out.extend(c.to_uppercase()),
            c => out.push(c),
        }
    }
    out.push_str("LambdaFunction");
    out
}
