//! API method detection in code examples.
//!
//! Detection is purely lexical. Three shapes are recognized:
//! - member calls `receiver.method(`, reported as `receiver.method`
//! - declarations `function name(`, `fn name(` and `def name(`, reported as `name`
//! - hook calls `useName(`, reported as `useName`

use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

/// One alternation per shape, tried in order at each position.
static API_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let ident = r"[A-Za-z_$][A-Za-z0-9_$]*";
    let pattern = format!(
        r"\b(?:function|fn|def)\s+(?P<decl>{ident})\s*[(<]|(?P<recv>{ident})\.(?P<method>{ident})\s*\(|\b(?P<hook>use[A-Z][A-Za-z0-9_$]*)\s*\("
    );
    Regex::new(&pattern).expect("API pattern should compile")
});

/// The syntactic shape an API name was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKind {
    /// `receiver.method(...)`.
    MemberCall,
    /// A named function declaration.
    Declaration,
    /// A `useName(...)` hook call.
    Hook,
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemberCall => write!(f, "member"),
            Self::Declaration => write!(f, "declaration"),
            Self::Hook => write!(f, "hook"),
        }
    }
}

/// A single API name found in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    /// Reported name.
    pub name: String,
    /// Shape it was found in.
    pub kind: ApiKind,
}

/// Finds API names in code.
#[derive(Debug, Clone)]
pub struct ApiDetector {
    /// Receivers whose member calls are ignored, e.g. `console`.
    ignore_receivers: HashSet<String>,
}

impl Default for ApiDetector {
    fn default() -> Self {
        Self::new(["console"])
    }
}

impl ApiDetector {
    /// Creates a detector that skips member calls on the given receivers.
    pub fn new<I, S>(ignore_receivers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore_receivers: ignore_receivers.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the API names in `code`, in source order.
    pub fn detect(&self, code: &str) -> Vec<ApiCall> {
        API_PATTERN
            .captures_iter(code)
            .filter_map(|caps| {
                if let Some(name) = caps.name("decl") {
                    return Some(ApiCall {
                        name: name.as_str().to_string(),
                        kind: ApiKind::Declaration,
                    });
                }
                if let Some(name) = caps.name("hook") {
                    return Some(ApiCall {
                        name: name.as_str().to_string(),
                        kind: ApiKind::Hook,
                    });
                }
                let receiver = caps.name("recv")?.as_str();
                let method = caps.name("method")?.as_str();
                if self.ignore_receivers.contains(receiver) {
                    return None;
                }
                Some(ApiCall {
                    name: format!("{receiver}.{method}"),
                    kind: ApiKind::MemberCall,
                })
            })
            .collect()
    }
}

/// An API name with its occurrence statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMethod {
    /// Reported name.
    pub name: String,
    /// Shape of the first occurrence.
    pub kind: ApiKind,
    /// Total occurrences across all files.
    pub count: usize,
    /// Files the name occurs in, in first-seen order.
    pub files: Vec<String>,
}

/// Accumulates API names across files.
///
/// Entries keep first-appearance order so that ranking ties resolve deterministically.
#[derive(Debug, Default)]
pub struct ApiTally {
    /// Methods in first-appearance order.
    methods: Vec<ApiMethod>,
    /// Position of each name in `methods`.
    index: HashMap<String, usize>,
}

impl ApiTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the calls found in one file.
    pub fn record(&mut self, file: &str, calls: impl IntoIterator<Item = ApiCall>) {
        for call in calls {
            let slot = match self.index.get(&call.name) {
                Some(&slot) => slot,
                None => {
                    self.index.insert(call.name.clone(), self.methods.len());
                    self.methods.push(ApiMethod {
                        name: call.name,
                        kind: call.kind,
                        count: 0,
                        files: Vec::new(),
                    });
                    self.methods.len() - 1
                }
            };

            let method = &mut self.methods[slot];
            method.count += 1;
            if !method.files.iter().any(|f| f == file) {
                method.files.push(file.to_string());
            }
        }
    }

    /// Number of distinct names seen so far.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Returns names occurring at least `min_occurrences` times, most frequent first.
    pub fn into_ranked(self, min_occurrences: usize) -> Vec<ApiMethod> {
        let mut ranked: Vec<ApiMethod> = self
            .methods
            .into_iter()
            .filter(|m| m.count >= min_occurrences)
            .collect();
        // Stable sort keeps first-appearance order among equal counts.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(calls: &[ApiCall]) -> Vec<&str> {
        calls.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn detects_member_calls() {
        let detector = ApiDetector::default();
        let calls = detector.detect("const data = await res.json()\nrouter.push('/home')\n");
        assert_eq!(names(&calls), vec!["res.json", "router.push"]);
        assert!(calls.iter().all(|c| c.kind == ApiKind::MemberCall));
    }

    #[test]
    fn chained_receivers_report_the_last_pair() {
        let calls = ApiDetector::default().detect("this.router.refresh()");
        assert_eq!(names(&calls), vec!["router.refresh"]);
    }

    #[test]
    fn detects_declarations() {
        let code = "export default async function Page() {}\nfn main() {}\ndef handler(event):\n  pass\nfunction identity<T>(x: T) {}";
        let calls = ApiDetector::default().detect(code);
        assert_eq!(names(&calls), vec!["Page", "main", "handler", "identity"]);
        assert!(calls.iter().all(|c| c.kind == ApiKind::Declaration));
    }

    #[test]
    fn detects_hooks() {
        let calls = ApiDetector::default()
            .detect("const [count, setCount] = useState(0)\nuseEffect(() => {}, [])");
        assert_eq!(names(&calls), vec!["useState", "useEffect"]);
        assert!(calls.iter().all(|c| c.kind == ApiKind::Hook));
    }

    #[test]
    fn lowercase_use_prefix_is_not_a_hook() {
        let calls = ApiDetector::default().detect("user(1)\nreuseState(2)\nuseless()");
        assert!(calls.is_empty());
    }

    #[test]
    fn ignored_receivers_are_skipped() {
        let calls = ApiDetector::default().detect("console.log(x)\ncookies.get('a')");
        assert_eq!(names(&calls), vec!["cookies.get"]);

        let calls = ApiDetector::new(["cookies"]).detect("console.log(x)\ncookies.get('a')");
        assert_eq!(names(&calls), vec!["console.log"]);
    }

    #[test]
    fn property_access_without_call_is_ignored() {
        let calls = ApiDetector::default().detect("const url = request.nextUrl\nprocess.env.KEY");
        assert!(calls.is_empty());
    }

    #[test]
    fn tally_ranks_by_count_then_first_appearance() {
        let detector = ApiDetector::default();
        let mut tally = ApiTally::new();
        tally.record("a.md", detector.detect("router.push('/')\nuseState(0)"));
        tally.record("b.md", detector.detect("useState(1)\nres.json()"));
        tally.record("b.md", detector.detect("useState(2)"));
        assert_eq!(tally.len(), 3);

        let ranked = tally.into_ranked(1);
        let order: Vec<&str> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, vec!["useState", "router.push", "res.json"]);
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[0].files, vec!["a.md", "b.md"]);
    }

    #[test]
    fn tally_drops_rare_names() {
        let detector = ApiDetector::default();
        let mut tally = ApiTally::new();
        tally.record("a.md", detector.detect("a.b()\na.b()\nc.d()"));
        let ranked = tally.into_ranked(2);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "a.b");
    }
}
