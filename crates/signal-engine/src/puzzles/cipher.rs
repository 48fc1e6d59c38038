use crate::api::types::Outcome;

/// Accepted designations for the triangulated location.
const LOCATIONS: [&str; 4] = [
    "37.2431,-115.7930",
    "37°14′36″N 115°47′35″W",
    "area 51",
    "area51",
];

/// Strip degree/minute/second marks and whitespace, lowercase the rest.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '°' | '′' | '″'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Format-insensitive location check: the normalized input must contain any
/// normalized entry of the accepted set.
pub fn check_location(input: &str) -> Outcome {
    let haystack = normalize(input);
    if haystack.is_empty() {
        return Outcome::Failure;
    }
    if LOCATIONS
        .iter()
        .any(|loc| haystack.contains(&normalize(loc)))
    {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}
