//! Common LU source fixtures for tests.

/// One of every construct, separated by blank lines.
pub const FULL_FILE: &str = "> !# @app.name = Travel
> plain comment

[shared](./shared.lu)

# BookFlight
- book a flight to {city}
- fly to {city=Paris}

$city : list =
- paris
- london

@ ml address hasRoles from, to

# ? where is the office
- office location
**Filters:**
- region = emea
```
Second floor.
```
";

pub const SIMPLE_INTENT: &str = "# Greet\n- hi\n- hello";

pub const SINGLE_QNA: &str = "# ? q\n```\na\n```\n";

pub const MODEL_INFO_ONLY: &str = "> !# @app.name = Demo\n> !# @app.version = 1.0\n";

pub const NESTED: &str = "# Parent\n## A\n- a\n## B\n- b\n";

pub const NESTED_ENABLED: &str =
    "> !# @enableSections = true\n# Parent\n## A\n- a\n## B\n- b\n";

/// The directive as LU authoring tools write it.
pub const NESTED_ENABLED_QUALIFIED: &str =
    "> !# @enableSections.enableSections = true\n# Parent\n## A\n- a\n## B\n- b\n";

/// An unnamed entity inside the first child of a nested intent.
pub const MALFORMED_NESTED_CHILD: &str = "# P\n## A\n- a\n$ : x\n## B\n- b\n\n# Q\n- q\n";

/// An unnamed entity inside a simple intent, next to a valid entity and QnA pair.
pub const MALFORMED_INLINE_ENTITY: &str =
    "# Greet\n- hi\n$ : x\n\n$city : list =\n- paris\n\n# ? q\n```\na\n```\n";

/// An unnamed entity between a valid intent and a valid QnA pair.
pub const MALFORMED_ENTITY: &str = "# Greet\n- hi\n\n$ : simple\n\n# ? q\n```\na\n```\n";

/// `count` QnA blocks separated by blank lines.
pub fn qna_blocks(count: usize) -> String {
    (0..count)
        .map(|i| format!("# ? question {i}\n```\nanswer {i}\n```\n"))
        .collect::<Vec<_>>()
        .join("\n")
}
