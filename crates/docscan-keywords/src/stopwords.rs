//! Stopword filtering for keyword extraction.
//!
//! Two fixed tables are always active:
//! - General English stopwords: pronouns, articles, auxiliaries, connectives and filler
//!   verbs that carry no topical signal.
//! - Technical stopwords: generic software-documentation vocabulary such as "code",
//!   "example" or "parameter" that appears on nearly every page.
//!
//! The larger Stopwords ISO list from the `stop-words` crate and user-configured words can
//! be layered on top.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// A set of lower-case words rejected by the tokenizer.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lower-case stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter with the general and technical tables.
    pub fn new() -> Self {
        let words = GENERAL_STOPWORDS
            .iter()
            .chain(TECHNICAL_STOPWORDS)
            .map(|w| (*w).to_string())
            .collect();
        Self { words }
    }

    /// Adds the Stopwords ISO English list.
    pub fn with_iso_english(mut self) -> Self {
        self.extend(stop_words::get(LANGUAGE::English).iter().copied());
        self
    }

    /// Adds extra words, lower-cased.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(words);
        self
    }

    /// Inserts words, lower-cased.
    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().trim().to_lowercase());
        }
    }

    /// Checks whether a lower-case token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Common English words with no topical signal.
static GENERAL_STOPWORDS: &[&str] = &[
    // Articles and determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "all", "both", "few", "many", "much", "more", "most", "other", "another",
    "such", "own", "same", "several", "various",
    // Pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "whose", "one", "ones", "someone", "something", "anything",
    "everything", "nothing",
    // Auxiliaries and modals
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "done", "can", "could", "will", "would", "shall", "should",
    "may", "might", "must", "need", "needs", "get", "gets", "got", "make", "makes", "made",
    // Prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during",
    "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out",
    "outside", "over", "per", "since", "through", "throughout", "to", "toward", "towards",
    "under", "until", "up", "upon", "via", "with", "within", "without",
    // Conjunctions and connectives
    "and", "but", "or", "nor", "so", "yet", "if", "then", "else", "than", "because", "while",
    "whereas", "although", "though", "unless", "whether", "also", "however", "therefore",
    "thus", "hence", "instead", "otherwise", "moreover", "furthermore", "meanwhile",
    // Adverbs
    "not", "no", "yes", "only", "just", "very", "too", "again", "already", "always", "never",
    "often", "sometimes", "usually", "still", "even", "ever", "now", "here", "there", "where",
    "when", "why", "how", "once", "well", "really", "quite", "rather", "almost", "simply",
    "easily", "automatically", "directly", "first", "next", "last",
    // Filler verbs common in prose
    "allow", "allows", "allowed", "allowing", "let", "lets", "use", "uses", "used", "using",
    "want", "wants", "like", "see", "learn", "show", "shows", "provide", "provides",
    "provided", "include", "includes", "including", "called", "based", "following", "new",
    "etc",
];

/// Generic vocabulary of software documentation.
static TECHNICAL_STOPWORDS: &[&str] = &[
    "code", "codes", "example", "examples", "function", "functions", "method", "methods",
    "class", "classes", "parameter", "parameters", "param", "params", "argument", "arguments",
    "args", "value", "values", "variable", "variables", "property", "properties", "object",
    "objects", "type", "types", "string", "strings", "number", "numbers", "boolean", "array",
    "arrays", "return", "returns", "returned", "default", "option", "options", "optional",
    "required", "true", "false", "null", "undefined", "file", "files", "line", "lines",
    "documentation", "docs", "doc", "page", "pages", "section", "sections", "guide", "note",
    "notes", "reference", "references", "usage", "syntax", "snippet", "snippets",
    "import", "export", "const", "var", "async", "await",
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_general_stopwords() {
        let sw = Stopwords::new();
        for word in ["the", "and", "you", "allow", "to", "with", "which"] {
            assert!(sw.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn contains_technical_stopwords() {
        let sw = Stopwords::new();
        for word in [
            "code",
            "example",
            "examples",
            "function",
            "method",
            "class",
            "parameter",
        ] {
            assert!(sw.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn topical_words_are_not_stopwords() {
        let sw = Stopwords::new();
        for word in [
            "server",
            "actions",
            "perform",
            "operations",
            "hooks",
            "routing",
            "middleware",
            "kubernetes",
        ] {
            assert!(!sw.contains(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn tables_are_lower_case() {
        for word in GENERAL_STOPWORDS.iter().chain(TECHNICAL_STOPWORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn extra_words_are_lower_cased() {
        let sw = Stopwords::new().with_extra(["NextJS", " Vercel "]);
        assert!(sw.contains("nextjs"));
        assert!(sw.contains("vercel"));
        assert!(!sw.contains("NextJS"));
    }

    #[test]
    fn iso_list_extends_the_tables() {
        let base = Stopwords::new();
        let iso = Stopwords::new().with_iso_english();
        assert!(iso.len() > base.len());
        assert!(iso.contains("the"));
        assert!(!iso.contains("kubernetes"));
    }
}
