// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and `clint init` templates.

/// Generate an example configuration file listing every option.
pub fn example_config() -> &'static str {
    r#"# clint configuration

[rules]
header_max_length = 72
body_max_line_length = 72
# Case styles the description may not be written in.
disallowed_cases = ["sentence-case", "start-case", "pascal-case", "upper-case"]

# Verbs accepted as the first word of a description, on top of the
# built-in list.
[rules.verbs]
extra = []
replace_defaults = false

# Per-rule overrides. severity: error | warning | off; when: always | never
[rules.levels]
component-not-empty = { severity = "error", when = "always" }
description-not-empty = { severity = "error", when = "always" }
description-case = { severity = "error", when = "never" }
description-tense = { severity = "error", when = "always" }
header-max-length = { severity = "error" }
body-max-line-length = { severity = "error" }
header-trim = { severity = "error" }
subject-full-stop = { severity = "error", when = "never" }
body-leading-blank = { severity = "warning" }

# Commits matching any of these are not linted at all.
[ignore]
defaults = true
contains = []
patterns = []

[ui]
color = true
show_passed = false
"#
}

/// Configuration with only the length limit spelled out.
pub fn minimal_config() -> &'static str {
    r#"# clint configuration (minimal)
[rules]
header_max_length = 72
"#
}

/// Configuration for CI: every rule is an error.
pub fn strict_config() -> &'static str {
    r#"# clint configuration (strict)
[rules]
header_max_length = 72
body_max_line_length = 72

[rules.levels]
body-leading-blank = { severity = "error" }

[ignore]
defaults = true
"#
}
