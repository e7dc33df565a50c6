//! Reusable tree files.

/// `src { lib.rs, main.rs }` plus a root-level README
pub const SMALL_TREE_JSON: &str = r#"[
  {
    "id": "src",
    "label": "src",
    "children": [
      { "id": "lib", "label": "lib.rs" },
      { "id": "main", "label": "main.rs" }
    ]
  },
  { "id": "readme", "label": "README.md" }
]"#;

/// Same hierarchy as `SMALL_TREE_JSON`, with `main` disabled
pub const SMALL_TREE_TOML: &str = r#"
[[nodes]]
id = "src"
label = "src"

[[nodes.children]]
id = "lib"
label = "lib.rs"

[[nodes.children]]
id = "main"
label = "main.rs"
disabled = true

[[nodes]]
id = "readme"
label = "README.md"
"#;

pub const COMPOSED_TREE_JSON: &str = r#"{
  "kind": "composed",
  "nodes": [
    { "value": "a", "label": "A", "items": [{ "value": "b", "label": "B" }] }
  ]
}"#;

pub const DUPLICATE_IDS_JSON: &str = r#"[
  { "id": "src", "label": "src", "children": [{ "id": "lib", "label": "lib.rs" }] },
  { "id": "lib", "label": "lib (again)" }
]"#;
