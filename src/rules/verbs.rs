// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Present-imperative verb allowlist.
//!
//! The effective allowlist is the union of a general-purpose verb list and
//! a list of project-specific verbs, plus anything added in configuration.
//! Membership is checked on the lower-cased first word of a description, so
//! every entry is lower-cased on construction.

use crate::config::VerbsConfig;
use std::collections::BTreeSet;

/// General-purpose imperative verbs common in commit headers.
pub const COMMON_VERBS: &[&str] = &[
    "accept", "access", "add", "adjust", "align", "allow", "amend", "annotate", "append",
    "apply", "archive", "assert", "assign", "attach", "avoid", "backport", "ban", "build",
    "bump", "cache", "calculate", "call", "cancel", "cap", "capture", "catch", "change",
    "check", "clamp", "clarify", "clean", "clear", "clone", "close", "collapse", "collect",
    "combine", "comment", "compare", "compile", "complete", "compress", "compute",
    "configure", "consolidate", "construct", "convert", "copy", "correct", "count",
    "create", "debug", "declare", "decode", "decouple", "decrease", "deduplicate",
    "default", "defer", "define", "delay", "delegate", "delete", "deprecate", "derive",
    "describe", "destroy", "detect", "determine", "disable", "disallow", "discard",
    "display", "document", "downgrade", "drop", "dump", "duplicate", "emit", "enable",
    "encode", "enforce", "ensure", "escape", "evaluate", "exclude", "execute", "expand",
    "expect", "explain", "export", "expose", "extend", "extract", "factor", "fetch",
    "fill", "filter", "finalize", "find", "finish", "fix", "flatten", "flush", "fold",
    "force", "format", "forward", "free", "freeze", "generalize", "generate", "guard",
    "handle", "harden", "hide", "hoist", "ignore", "implement", "import", "improve",
    "include", "increase", "indent", "inherit", "initialize", "inline", "insert",
    "install", "integrate", "introduce", "invalidate", "invert", "isolate", "keep",
    "kill", "label", "launch", "limit", "link", "lint", "list", "load", "localize",
    "lock", "log", "lower", "make", "mark", "match", "measure", "merge", "migrate",
    "mock", "modify", "move", "name", "normalize", "note", "notify", "open",
    "optimize", "order", "organize", "output", "override", "pack", "parallelize",
    "parse", "pass", "patch", "pin", "plumb", "poll", "polish", "populate", "port",
    "prefer", "prefix", "prepare", "preserve", "prevent", "print", "process",
    "propagate", "protect", "provide", "prune", "publish", "pull", "purge", "push",
    "put", "query", "queue", "raise", "read", "rebase", "rebuild", "record", "reduce",
    "refactor", "reference", "refine", "reformat", "refresh", "register", "reimplement",
    "reject", "release", "reload", "remove", "rename", "render", "reorder", "reorganize",
    "repair", "replace", "report", "request", "require", "reserve", "reset", "resolve",
    "restore", "restrict", "restructure", "retry", "return", "reuse", "revert",
    "review", "revise", "rewrite", "rework", "roll", "rollback", "rotate", "route",
    "run", "sanitize", "save", "scale", "schedule", "scope", "search", "secure", "select",
    "send", "separate", "serialize", "serve", "set", "share", "shorten", "show",
    "shrink", "shuffle", "silence", "simplify", "skip", "sort", "specify", "speed",
    "split", "squash", "stabilize", "standardize", "start", "stop", "store",
    "streamline", "strip", "stub", "style", "support", "suppress", "swap", "switch",
    "sync", "synchronize", "tag", "test", "throttle", "throw", "tidy", "tighten",
    "toggle", "track", "transform", "translate", "treat", "trigger", "trim", "truncate",
    "try", "tune", "tweak", "undo", "unify", "uninstall", "unlock", "unpin", "unwrap",
    "update", "upgrade", "upload", "use", "validate", "vendor", "verify", "wait",
    "warn", "watch", "whitelist", "widen", "wire", "wrap", "write",
];

/// Project-specific verbs, including hyphenated and coined words that
/// generic lists miss.
pub const PROJECT_VERBS: &[&str] = &[
    "autoformat", "bisect", "bootstrap", "cherry-pick", "de-duplicate", "dedupe",
    "denoise", "feed", "gate", "lazy-load", "monkeypatch", "percent-encode", "pre-compute",
    "precompute", "re-add", "re-enable", "re-export", "re-run", "refill", "regenerate",
    "reindex", "relax", "relicense", "reland", "reword", "shim", "un-skip", "unbreak",
    "unskip", "untangle", "walk",
];

/// An immutable set of lower-cased verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    verbs: BTreeSet<String>,
}

impl Allowlist {
    /// Build an allowlist from arbitrary verbs, lower-casing each one.
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            verbs: verbs
                .into_iter()
                .map(|v| v.as_ref().trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect(),
        }
    }

    /// Build the effective allowlist for a configuration.
    pub fn from_config(config: &VerbsConfig) -> Self {
        if config.replace_defaults {
            Self::new(&config.extra)
        } else {
            Self::default().union(&Self::new(&config.extra))
        }
    }

    /// Combine two allowlists.
    pub fn union(&self, other: &Allowlist) -> Self {
        Self {
            verbs: self.verbs.union(&other.verbs).cloned().collect(),
        }
    }

    /// Whether `word` is allowed. Comparison is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.verbs.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterate over verbs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        Self::new(COMMON_VERBS).union(&Self::new(PROJECT_VERBS))
    }
}
