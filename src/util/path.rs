use std::fmt;

const NAMESPACE_START: &str = "fedora%2F";
const NAMESPACE_END: &str = "%3A";

/// A file name that does not carry a `fedora%2F<namespace>%3A` identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsedName(pub String);

impl fmt::Display for UnparsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no namespace between '{}' and '{}' in file name '{}'",
            NAMESPACE_START, NAMESPACE_END, self.0
        )
    }
}

impl std::error::Error for UnparsedName {}

/// Extracts the namespace from a URL-encoded Fedora object file name.
///
/// File names look like `info%3Afedora%2Fund%3Aabc123+DC+DC.0`, where the
/// namespace is the text between `fedora%2F` and `%3A` (`und` here).
///
/// Surrounding whitespace is ignored. When the markers repeat, the rightmost
/// `fedora%2F` still followed by a `%3A` opens the namespace and the last
/// `%3A` closes it.
pub fn parse_namespace(file_name: &str) -> Result<&str, UnparsedName> {
    let name = file_name.trim();

    let mut search_end = name.len();
    while let Some(start) = name[..search_end].rfind(NAMESPACE_START) {
        let rest = &name[start + NAMESPACE_START.len()..];
        if let Some(end) = rest.rfind(NAMESPACE_END) {
            return Ok(&rest[..end]);
        }
        search_end = start;
    }

    Err(UnparsedName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_file_name() {
        assert_eq!(parse_namespace("info%3Afedora%2Fund%3A02870v8609h"), Ok("und"));
        assert_eq!(parse_namespace("info%3Afedora%2Fdemo%3A1"), Ok("demo"));
    }

    #[test]
    fn test_datastream_file_name() {
        assert_eq!(
            parse_namespace("info%3Afedora%2Fund%3Ant55fq0061k%2Fcontent%2Fcontent.0"),
            Ok("und")
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_namespace("  info%3Afedora%2Fdemo%3A1\n"), Ok("demo"));
    }

    #[test]
    fn test_empty_namespace() {
        assert_eq!(parse_namespace("fedora%2F%3A1"), Ok(""));
    }

    #[test]
    fn test_greedy_capture_to_last_end_marker() {
        assert_eq!(parse_namespace("fedora%2Fa%3Ab%3Ac"), Ok("a%3Ab"));
    }

    #[test]
    fn test_rightmost_start_marker_wins() {
        assert_eq!(parse_namespace("fedora%2Fx%3Afedora%2Fy%3Az"), Ok("y"));
    }

    #[test]
    fn test_start_marker_without_end_falls_back_to_earlier_one() {
        // The trailing fedora%2F has no %3A after it
        assert_eq!(parse_namespace("fedora%2Fa%3Ab+fedora%2Fc"), Ok("a"));
    }

    #[test]
    fn test_missing_markers() {
        let err = parse_namespace(" README.txt ").unwrap_err();
        assert_eq!(err, UnparsedName("README.txt".to_string()));
        assert!(err.to_string().contains("README.txt"));

        assert!(parse_namespace("fedora%2Fdemo").is_err());
        assert!(parse_namespace("demo%3A1").is_err());
        assert!(parse_namespace("%3Afedora%2Fdemo").is_err());
    }
}
