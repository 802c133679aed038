//! Deterministic string-rewriting grammar.

use std::collections::HashMap;

/// Replacement applied to every occurrence of `symbol` each generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub symbol: char,
    pub replacement: String,
}

impl Rule {
    pub fn simple(symbol: char, replacement: &str) -> Self {
        Self {
            symbol,
            replacement: replacement.to_string(),
        }
    }
}

/// Symbols without a rule rewrite to themselves.
#[derive(Clone, Debug, Default)]
pub struct LSystem {
    axiom: String,
    rules: HashMap<char, String>,
}

impl LSystem {
    pub fn new(axiom: &str) -> Self {
        Self {
            axiom: axiom.to_string(),
            rules: HashMap::new(),
        }
    }

    /// A later rule for the same symbol replaces the earlier one.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.insert(rule.symbol, rule.replacement);
        self
    }

    /// Branching tree: `d` sprouts a trunk segment, two saved branches and a
    /// new growth tip; `a` doubles in length each generation.
    pub fn tree() -> Self {
        Self::new("d")
            .with_rule(Rule::simple('d', "abcdfbedfabedfcd"))
            .with_rule(Rule::simple('a', "aa"))
    }

    /// Offset grammar: every symbol doubles, so the summed offset doubles per
    /// generation.
    pub fn placement(axiom: &str) -> Self {
        Self::new(axiom)
            .with_rule(Rule::simple('g', "gg"))
            .with_rule(Rule::simple('h', "hh"))
            .with_rule(Rule::simple('i', "ii"))
            .with_rule(Rule::simple('k', "kk"))
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// One generation applied to `input`.
    pub fn rewrite(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 2);
        for c in input.chars() {
            match self.rules.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Rewrite the axiom `depth` times. Depth 0 is the axiom itself.
    pub fn generate(&self, depth: u32) -> String {
        let mut current = self.axiom.clone();
        for _ in 0..depth {
            current = self.rewrite(&current);
        }
        current
    }
}
