//! Formatting resolved facts for display.
//!
//! Fact discovery produces a list of [`ResolvedFact`]s: a dotted name, a
//! value that may be missing, and the user query that selected the fact.
//! A [`FactFormatter`] turns that list into one output document.
//!
//! - [`LegacyFormatter`]: flattened `name => value` lines
//! - [`JsonFormatter`]: a JSON object, compact or pretty
//! - [`YamlFormatter`]: a YAML block mapping
//!
//! All three share the same rules for picking what to show:
//!
//! - no user query: every fact, nested by the dots in its name
//!   (`os.family` lives under `os`), with missing values left out
//! - user queries: one entry per distinct query, in the order the queries
//!   first appear; facts without a query are ignored here
//!
//! ## Examples
//!
//! ```rust
//! use fact_values::{FactFormatter, LegacyFormatter, ResolvedFact, Value};
//!
//! let facts = vec![
//!     ResolvedFact::new("kernel", Some(Value::from("Linux"))).with_query("kernel"),
//!     ResolvedFact::new("uptime_days", None).with_query("uptime_days"),
//! ];
//!
//! let output = LegacyFormatter.format(&facts);
//! assert_eq!(output.as_deref(), Some("kernel => Linux\nuptime_days => "));
//! ```

use crate::yaml::Emitter;
use crate::{MapValue, Value, YamlOptions};
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// One step into a fact value: a map key or an array position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterToken {
    Key(String),
    Index(usize),
}

impl FilterToken {
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        FilterToken::Key(key.into())
    }

    /// Parses one query segment: digits become an index, anything else a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::FilterToken;
    ///
    /// assert_eq!(FilterToken::parse("0"), FilterToken::Index(0));
    /// assert_eq!(FilterToken::parse("release"), FilterToken::key("release"));
    /// ```
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<usize>() {
            Ok(index) => FilterToken::Index(index),
            Err(_) => FilterToken::Key(segment.to_string()),
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterToken::Key(key) => f.write_str(key),
            FilterToken::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A fact as produced by discovery, tagged with the query that selected it.
///
/// `filter_tokens` are the trailing segments of `user_query` that dig into
/// the fact's value rather than naming the fact: the query
/// `os.release.major` selects the fact `os` with tokens `release`, `major`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFact {
    pub name: String,
    pub value: Option<Value>,
    pub user_query: String,
    pub filter_tokens: Vec<FilterToken>,
}

impl ResolvedFact {
    /// Creates a fact with no user query and no filter tokens.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<Value>) -> Self {
        ResolvedFact {
            name: name.into(),
            value,
            user_query: String::new(),
            filter_tokens: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_query(mut self, user_query: impl Into<String>) -> Self {
        self.user_query = user_query.into();
        self
    }

    #[must_use]
    pub fn with_filter_tokens(mut self, filter_tokens: Vec<FilterToken>) -> Self {
        self.filter_tokens = filter_tokens;
        self
    }

    /// The fact's value after applying its filter tokens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fact_values::{fact, FilterToken, ResolvedFact};
    ///
    /// let fact = ResolvedFact::new("os", Some(fact!({"release": {"major": "12"}})))
    ///     .with_query("os.release.major")
    ///     .with_filter_tokens(vec![FilterToken::key("release"), FilterToken::key("major")]);
    ///
    /// assert_eq!(fact.resolved_value().and_then(|v| v.as_str()), Some("12"));
    /// ```
    #[must_use]
    pub fn resolved_value(&self) -> Option<&Value> {
        self.value.as_ref()?.dig(&self.filter_tokens)
    }
}

#[derive(Debug)]
enum Node {
    Leaf(Value),
    Tree(IndexMap<String, Node>),
}

impl Node {
    fn into_value(self) -> Value {
        match self {
            Node::Leaf(value) => value,
            Node::Tree(children) => Value::Map(tree_into_map(children)),
        }
    }
}

fn tree_into_map(children: IndexMap<String, Node>) -> MapValue {
    children
        .into_iter()
        .map(|(key, node)| (key, node.into_value()))
        .collect()
}

/// Builder that nests facts by the dots in their names.
///
/// # Examples
///
/// ```rust
/// use fact_values::{FactCollection, ResolvedFact, Value};
///
/// let facts = vec![
///     ResolvedFact::new("os.family", Some(Value::from("Debian"))),
///     ResolvedFact::new("os.name", Some(Value::from("Ubuntu"))),
///     ResolvedFact::new("os.arch", None),
/// ];
///
/// let map = FactCollection::from_facts(&facts).into_map();
/// assert_eq!(map.to_string(), "{ os => { family => Debian, name => Ubuntu } }");
/// ```
#[derive(Debug, Default)]
pub struct FactCollection {
    root: IndexMap<String, Node>,
}

impl FactCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the facts that have a value; the others are skipped.
    pub fn from_facts<'a, I>(facts: I) -> Self
    where
        I: IntoIterator<Item = &'a ResolvedFact>,
    {
        let mut collection = FactCollection::new();
        for fact in facts {
            if let Some(value) = fact.resolved_value() {
                collection.insert(&fact.name, value.clone());
            }
        }
        collection
    }

    /// Inserts `value` under the dotted `name`.
    ///
    /// A leaf standing where a branch is needed is replaced by the branch,
    /// and a later insert at the same path replaces the earlier value.
    pub fn insert(&mut self, name: &str, value: Value) {
        let segments: Vec<&str> = name.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut tree = &mut self.root;
        for segment in parents {
            let node = tree
                .entry((*segment).to_string())
                .or_insert_with(|| Node::Tree(IndexMap::new()));
            if matches!(node, Node::Leaf(_)) {
                *node = Node::Tree(IndexMap::new());
            }
            let Node::Tree(children) = node else {
                return;
            };
            tree = children;
        }
        tree.insert((*last).to_string(), Node::Leaf(value));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    #[must_use]
    pub fn into_map(self) -> MapValue {
        tree_into_map(self.root)
    }
}

/// Renders a list of resolved facts into one document.
///
/// Returns `None` when there are no facts at all.
pub trait FactFormatter {
    fn format(&self, facts: &[ResolvedFact]) -> Option<String>;
}

/// Distinct user queries in first-seen order.
///
/// The empty query only survives when no fact carries a real one.
fn distinct_queries(facts: &[ResolvedFact]) -> IndexSet<&str> {
    let mut queries: IndexSet<&str> = facts.iter().map(|fact| fact.user_query.as_str()).collect();
    if queries.len() > 1 {
        queries.shift_remove("");
    }
    queries
}

fn facts_for<'a>(facts: &'a [ResolvedFact], query: &'a str) -> impl Iterator<Item = &'a ResolvedFact> {
    facts.iter().filter(move |fact| fact.user_query == query)
}

/// Looks up `query` among the facts it selected.
///
/// The facts are nested by name, then the collection is walked by the
/// query's segments, minus the trailing ones that the facts' filter tokens
/// already applied.
fn resolve_query(facts: &[ResolvedFact], query: &str) -> Option<Value> {
    let selected: Vec<&ResolvedFact> = facts_for(facts, query).collect();
    let consumed = selected
        .iter()
        .map(|fact| fact.filter_tokens.len())
        .max()
        .unwrap_or(0);

    let root = Value::Map(FactCollection::from_facts(selected).into_map());
    let segments: Vec<&str> = query.split('.').collect();
    // Only fact names remain in the path, so every segment is a map key.
    let path: Vec<_> = segments[..segments.len().saturating_sub(consumed)]
        .iter()
        .map(|segment| FilterToken::key(*segment))
        .collect();

    root.dig(&path).cloned()
}

/// The tree shown by the hierarchical formatters.
fn fact_tree(facts: &[ResolvedFact]) -> MapValue {
    let queries = distinct_queries(facts);
    match queries.iter().next() {
        Some(query) if queries.len() == 1 && query.is_empty() => {
            FactCollection::from_facts(facts).into_map()
        }
        _ => queries
            .iter()
            .filter_map(|query| resolve_query(facts, query).map(|value| (query.to_string(), value)))
            .collect(),
    }
}

/// Flattened text output.
///
/// - without user queries: one `name => value` line per top-level fact
/// - with a single query: the bare value, or an empty string if unresolved
/// - with several queries: one `query => value` line per query
///
/// # Examples
///
/// ```rust
/// use fact_values::{FactFormatter, LegacyFormatter, ResolvedFact, Value};
///
/// let facts = vec![ResolvedFact::new("networking.ip6", Some(Value::from("fe80::1")))
///     .with_query("networking.ip6")];
/// assert_eq!(LegacyFormatter.format(&facts).as_deref(), Some("fe80::1"));
///
/// assert_eq!(LegacyFormatter.format(&[]), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyFormatter;

impl FactFormatter for LegacyFormatter {
    fn format(&self, facts: &[ResolvedFact]) -> Option<String> {
        if facts.is_empty() {
            return None;
        }

        let queries = distinct_queries(facts);
        let output = match queries.iter().next() {
            Some(query) if queries.len() == 1 && query.is_empty() => FactCollection::from_facts(facts)
                .into_map()
                .iter()
                .map(|(name, value)| format!("{} => {}", name, value))
                .collect::<Vec<_>>()
                .join("\n"),
            Some(query) if queries.len() == 1 => resolve_query(facts, query)
                .map(|value| value.to_string())
                .unwrap_or_default(),
            _ => queries
                .iter()
                .map(|query| {
                    let value = resolve_query(facts, query)
                        .map(|value| value.to_string())
                        .unwrap_or_default();
                    format!("{} => {}", query, value)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Some(output)
    }
}

/// JSON object output; unresolved queries are left out.
///
/// # Examples
///
/// ```rust
/// use fact_values::{FactFormatter, JsonFormatter, ResolvedFact, Value};
///
/// let facts = vec![ResolvedFact::new("os.family", Some(Value::from("Debian")))];
/// let output = JsonFormatter::default().format(&facts);
/// assert_eq!(output.as_deref(), Some(r#"{"os":{"family":"Debian"}}"#));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    #[must_use]
    pub fn pretty() -> Self {
        JsonFormatter { pretty: true }
    }
}

impl FactFormatter for JsonFormatter {
    fn format(&self, facts: &[ResolvedFact]) -> Option<String> {
        if facts.is_empty() {
            return None;
        }

        let json = Value::Map(fact_tree(facts)).to_json();
        Some(if self.pretty {
            format!("{:#}", json)
        } else {
            json.to_string()
        })
    }
}

/// YAML block mapping output; unresolved queries are left out.
#[derive(Clone, Debug, Default)]
pub struct YamlFormatter {
    pub options: YamlOptions,
}

impl YamlFormatter {
    #[must_use]
    pub fn new(options: YamlOptions) -> Self {
        YamlFormatter { options }
    }
}

impl FactFormatter for YamlFormatter {
    fn format(&self, facts: &[ResolvedFact]) -> Option<String> {
        if facts.is_empty() {
            return None;
        }

        let mut emitter = Emitter::new(self.options.clone());
        fact_tree(facts).write_yaml(&mut emitter);
        Some(emitter.into_inner())
    }
}
