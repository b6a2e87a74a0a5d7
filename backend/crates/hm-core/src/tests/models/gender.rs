use crate::Gender;

use std::str::FromStr;

#[test]
fn test_gender_as_str() {
    assert_eq!(Gender::Male.as_str(), "Male");
    assert_eq!(Gender::Female.as_str(), "Female");
    assert_eq!(Gender::Other.as_str(), "Other");
}

#[test]
fn test_gender_from_str() {
    assert_eq!(Gender::from_str("Male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
    assert_eq!(Gender::from_str("Other").unwrap(), Gender::Other);
    assert!(Gender::from_str("male").is_err());
    assert!(Gender::from_str("").is_err());
}

#[test]
fn test_gender_serde_uses_display_strings() {
    let json = serde_json::to_string(&Gender::Female).unwrap();
    assert_eq!(json, "\"Female\"");

    let parsed: Gender = serde_json::from_str("\"Other\"").unwrap();
    assert_eq!(parsed, Gender::Other);
}
