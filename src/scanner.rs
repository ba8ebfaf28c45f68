use crate::data_models::CaseResult;

/// A result whose fragment contained one of the keywords.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub result: &'a CaseResult,
    pub keyword: &'a str,
}

/// Case-insensitive substring scanner over result fragments.
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    keywords: Vec<String>,
}

impl KeywordScanner {
    pub fn new<I, S>(keywords: I) -> KeywordScanner
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        KeywordScanner { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword (in list order) found in the fragment.
    pub fn matching_keyword(&self, result: &CaseResult) -> Option<&str> {
        let fragment = result.text_fragment.to_lowercase();
        self.keywords
            .iter()
            .find(|k| fragment.contains(k.as_str()))
            .map(String::as_str)
    }

    /// Matches in the same order as `results`; at most one per result.
    pub fn scan<'a>(&'a self, results: &'a [CaseResult]) -> Vec<Match<'a>> {
        results
            .iter()
            .filter_map(|result| {
                self.matching_keyword(result)
                    .map(|keyword| Match { result, keyword })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(fragment: &str) -> CaseResult {
        CaseResult::new("title", fragment, "https://example.test")
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let scanner = KeywordScanner::new(["Kotter", "  VISSERIJ ", ""]);
        assert_eq!(scanner.keywords(), ["kotter", "visserij"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let scanner = KeywordScanner::new(["visser"]);
        assert_eq!(scanner.matching_keyword(&result("De VISSERS van Urk")), Some("visser"));
        assert_eq!(scanner.matching_keyword(&result("Beroepsvisserij")), Some("visser"));
        assert_eq!(scanner.matching_keyword(&result("landbouw")), None);
    }

    #[test]
    fn test_first_keyword_wins() {
        let scanner = KeywordScanner::new(["haven", "urk"]);
        let r = result("Haven van Urk");
        assert_eq!(scanner.matching_keyword(&r), Some("haven"));
        assert_eq!(scanner.scan(std::slice::from_ref(&r)).len(), 1);
    }

    #[test]
    fn test_scan_preserves_order() {
        let scanner = KeywordScanner::new(["kotter"]);
        let results = vec![
            result("een kotter"),
            result("geen treffer"),
            result("KOTTER in de haven"),
        ];
        let matches = scanner.scan(&results);
        assert_eq!(matches.len(), 2);
        assert!(std::ptr::eq(matches[0].result, &results[0]));
        assert!(std::ptr::eq(matches[1].result, &results[2]));
    }

    #[test]
    fn test_no_keywords_no_matches() {
        let scanner = KeywordScanner::new(Vec::<String>::new());
        assert!(scanner.is_empty());
        assert!(scanner.scan(&[result("anything")]).is_empty());
    }
}
