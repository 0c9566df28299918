use rstest::rstest;

use super::*;

#[rstest]
#[case("", &[])]
#[case("/", &[])]
#[case("///", &[])]
#[case("team", &["team"])]
#[case("team/backend", &["team", "backend"])]
#[case("/team//backend/", &["team", "backend"])]
fn test_parse_segments(#[case] input: &str, #[case] expected: &[&str]) {
	let path = NamespacePath::parse(input);
	let got: Vec<&str> = path.segments().iter().map(String::as_str).collect();
	assert_eq!(got, expected);
	assert_eq!(path.is_empty(), expected.is_empty());
}

#[test]
fn test_split_terminal() {
	let path = NamespacePath::parse("a/b/c");
	let (parents, last) = path.split_terminal().unwrap();
	assert_eq!(parents, &["a".to_string(), "b".to_string()]);
	assert_eq!(last, "c");

	assert!(NamespacePath::parse("").split_terminal().is_none());
}

#[test]
fn test_display_normalizes() {
	assert_eq!(NamespacePath::parse("/a//b/").to_string(), "a/b");
}

#[rstest]
#[case("a/b/job", "job")]
#[case("job", "job")]
#[case("a/b/", "b")]
fn test_short_name(#[case] qualified: &str, #[case] expected: &str) {
	assert_eq!(NamespacePath::short_name(qualified), expected);
}
