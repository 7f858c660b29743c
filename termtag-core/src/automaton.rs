//! Aho-Corasick automaton over chars
//!
//! The trie lives in an arena of nodes. After all patterns are inserted,
//! failure links are computed breadth-first; each node also records the
//! nearest proper suffix state that ends a pattern (its dictionary-suffix
//! link), so the output set of a state is its own pattern followed by the
//! patterns along that chain, longest first.

use std::collections::{HashMap, VecDeque};

/// Index of a state in the automaton
pub type StateId = usize;

/// Index of a pattern in insertion order (duplicates share one id)
pub type PatternId = usize;

const ROOT: StateId = 0;

/// Trie node
#[derive(Debug, Clone, Default)]
struct Node {
    /// Goto transitions
    transitions: HashMap<char, StateId>,
    /// Failure link (root for depth 0 and 1)
    fail: StateId,
    /// Pattern that ends exactly at this node
    output: Option<PatternId>,
    /// Nearest suffix state with an output
    dict_suffix: Option<StateId>,
}

/// A dictionary string inserted into the automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The pattern text, which is also its output payload
    pub text: String,
    /// Length in chars
    pub len: usize,
}

/// Incremental construction of an [`Automaton`]
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    nodes: Vec<Node>,
    patterns: Vec<Pattern>,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AutomatonBuilder {
    /// Create a builder holding only the root state
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            patterns: Vec::new(),
        }
    }

    /// Insert a pattern; inserting the same text twice returns the first id
    ///
    /// Empty patterns are never reported and are ignored (`None`).
    pub fn add(&mut self, pattern: &str) -> Option<PatternId> {
        if pattern.is_empty() {
            return None;
        }

        let mut state = ROOT;
        for ch in pattern.chars() {
            state = match self.nodes[state].transitions.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[state].transitions.insert(ch, next);
                    next
                }
            };
        }

        if let Some(existing) = self.nodes[state].output {
            return Some(existing);
        }

        let id = self.patterns.len();
        self.patterns.push(Pattern {
            text: pattern.to_string(),
            len: pattern.chars().count(),
        });
        self.nodes[state].output = Some(id);
        Some(id)
    }

    /// Number of distinct patterns inserted so far
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Compute failure and dictionary-suffix links and freeze the automaton
    pub fn build(mut self) -> Automaton {
        let mut queue = VecDeque::new();

        let root_children: Vec<StateId> = self.nodes[ROOT].transitions.values().copied().collect();
        for child in root_children {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            let children: Vec<(char, StateId)> = self.nodes[state]
                .transitions
                .iter()
                .map(|(&ch, &next)| (ch, next))
                .collect();

            for (ch, child) in children {
                let mut fallback = self.nodes[state].fail;
                let fail = loop {
                    if let Some(&target) = self.nodes[fallback].transitions.get(&ch) {
                        break target;
                    }
                    if fallback == ROOT {
                        break ROOT;
                    }
                    fallback = self.nodes[fallback].fail;
                };

                self.nodes[child].fail = fail;
                self.nodes[child].dict_suffix = if self.nodes[fail].output.is_some() {
                    Some(fail)
                } else {
                    self.nodes[fail].dict_suffix
                };
                queue.push_back(child);
            }
        }

        Automaton {
            nodes: self.nodes,
            patterns: self.patterns,
        }
    }
}

/// Immutable Aho-Corasick automaton
#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    patterns: Vec<Pattern>,
}

impl Default for Automaton {
    fn default() -> Self {
        AutomatonBuilder::new().build()
    }
}

impl Automaton {
    /// Start building an automaton
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    /// Build an automaton from a set of patterns
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AutomatonBuilder::new();
        for pattern in patterns {
            builder.add(pattern.as_ref());
        }
        builder.build()
    }

    /// Number of distinct patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of trie states, root included
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no pattern was inserted
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Get a pattern by id
    pub fn pattern(&self, id: PatternId) -> Option<&Pattern> {
        self.patterns.get(id)
    }

    /// Follow the goto function, falling back along failure links
    #[inline]
    pub fn next_state(&self, mut state: StateId, ch: char) -> StateId {
        loop {
            if let Some(&next) = self.nodes[state].transitions.get(&ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }

    /// Patterns ending at `state`, longest first
    pub fn outputs(&self, state: StateId) -> Outputs<'_> {
        let start = if self.nodes[state].output.is_some() {
            Some(state)
        } else {
            self.nodes[state].dict_suffix
        };
        Outputs {
            automaton: self,
            next: start,
        }
    }

    /// Whether any pattern ends at `state`
    pub fn has_output(&self, state: StateId) -> bool {
        self.nodes[state].output.is_some() || self.nodes[state].dict_suffix.is_some()
    }

    /// Stream `haystack` through the automaton, yielding every position
    /// where at least one pattern ends
    pub fn find_iter<'a>(&'a self, haystack: &'a str) -> FindIter<'a> {
        FindIter {
            automaton: self,
            chars: haystack.chars(),
            state: ROOT,
            position: 0,
        }
    }
}

/// Iterator over the patterns ending at one state
pub struct Outputs<'a> {
    automaton: &'a Automaton,
    next: Option<StateId>,
}

impl<'a> Iterator for Outputs<'a> {
    type Item = &'a Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.next?;
        let node = &self.automaton.nodes[state];
        self.next = node.dict_suffix;
        node.output.map(|id| &self.automaton.patterns[id])
    }
}

/// A scan position where one or more patterns end
#[derive(Debug, Clone, Copy)]
pub struct SearchResult<'a> {
    automaton: &'a Automaton,
    state: StateId,
    /// Char position just past the last matched char
    pub end: usize,
}

impl<'a> SearchResult<'a> {
    /// All patterns ending here, longest first
    pub fn outputs(&self) -> Outputs<'a> {
        self.automaton.outputs(self.state)
    }

    /// The longest pattern ending here; the first one encountered wins ties
    pub fn longest(&self) -> Option<&'a Pattern> {
        self.outputs().fold(None, |best: Option<&Pattern>, candidate| match best {
            Some(current) if current.len >= candidate.len => Some(current),
            _ => Some(candidate),
        })
    }
}

/// Iterator returned by [`Automaton::find_iter`]
pub struct FindIter<'a> {
    automaton: &'a Automaton,
    chars: std::str::Chars<'a>,
    state: StateId,
    position: usize,
}

impl<'a> Iterator for FindIter<'a> {
    type Item = SearchResult<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for ch in self.chars.by_ref() {
            self.position += 1;
            self.state = self.automaton.next_state(self.state, ch);
            if self.automaton.has_output(self.state) {
                return Some(SearchResult {
                    automaton: self.automaton,
                    state: self.state,
                    end: self.position,
                });
            }
        }
        None
    }
}
