//! Global-identifier synthesis for UMD bundles.

/// Derive a PascalCase global variable name from a (possibly scoped)
/// package or dependency name.
///
/// The scope segment of `@scope/name` never contributes to the
/// identifier.
///
/// # Example
///
/// ```
/// # use rill_config::global_ident;
/// assert_eq!(global_ident("@myscope/my-cool-pkg"), "MyCoolPkg");
/// assert_eq!(global_ident("simple"), "Simple");
/// ```
pub fn global_ident(name: &str) -> String {
    pascal_case(unscoped(name))
}

/// Strip the `@scope/` prefix from a scoped package name. Unscoped names
/// pass through unchanged.
fn unscoped(name: &str) -> &str {
    match name.strip_prefix('@') {
        Some(rest) => rest.split_once('/').map_or(name, |(_, tail)| tail),
        None => name,
    }
}

/// Convert to PascalCase: segments split on non-alphanumeric separators
/// and lower-to-upper case transitions, each lower-cased and then
/// capitalized.
fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut boundary = true;
    let mut prev_lower = false;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            boundary = true;
            prev_lower = false;
            continue;
        }
        if prev_lower && ch.is_uppercase() {
            boundary = true;
        }

        if boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }

        boundary = false;
        prev_lower = ch.is_lowercase() || ch.is_numeric();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_names_drop_the_scope() {
        assert_eq!(global_ident("@myscope/my-cool-pkg"), "MyCoolPkg");
        assert_eq!(global_ident("@scope/cool.thing"), "CoolThing");
        assert_eq!(global_ident("@babel/runtime"), "Runtime");
    }

    #[test]
    fn unscoped_names_pass_through_to_case_conversion() {
        assert_eq!(global_ident("simple"), "Simple");
        assert_eq!(global_ident("my-pkg"), "MyPkg");
        assert_eq!(global_ident("react-dom"), "ReactDom");
        assert_eq!(global_ident("lodash.debounce"), "LodashDebounce");
    }

    #[test]
    fn case_transitions_start_new_segments() {
        assert_eq!(global_ident("camelCase"), "CamelCase");
        assert_eq!(global_ident("alreadyPascalCase"), "AlreadyPascalCase");
    }

    #[test]
    fn digits_stay_inside_their_segment() {
        assert_eq!(global_ident("base64-url"), "Base64Url");
        assert_eq!(global_ident("v2"), "V2");
    }

    #[test]
    fn underscores_and_spaces_are_separators() {
        assert_eq!(global_ident("snake_case_pkg"), "SnakeCasePkg");
        assert_eq!(global_ident("odd name"), "OddName");
    }

    #[test]
    fn scope_without_separator_is_treated_as_plain_text() {
        assert_eq!(global_ident("@org"), "Org");
    }
}
