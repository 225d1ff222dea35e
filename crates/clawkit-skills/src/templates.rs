//! Static skill templates.
//!
//! Every template is a pure function of the skill name. `Skill Name` becomes
//! the title-cased name, `skill-cli` becomes the name itself.

use crate::slug::title_case;

/// Name used when a printing command is given no name.
pub const DEFAULT_NAME: &str = "my-skill";

pub const SKILL_MD: &str = "SKILL.md";
pub const README_MD: &str = "README.md";
pub const CONFIG_JSON: &str = "config.json";
pub const GITIGNORE: &str = ".gitignore";
pub const ENTRY_POINT: &str = "main.js";

/// One file of a skill skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub file_name: &'static str,
    pub contents: String,
    /// Whether the file must be marked executable after writing.
    pub executable: bool,
}

const STRUCTURE: &str = "\
skill-name/
├── SKILL.md         # OpenClaw skill documentation
├── README.md        # User-facing documentation
├── main             # Main executable (Node.js/Python/Bash)
├── config.json      # Configuration template
└── .gitignore      # Ignore config.json, tokens, secrets";

const CONFIG: &str = r#"{
  "name": "my-skill",
  "version": "1.0.0",
  "description": "A skill for...",
  "author": "",
  "dependencies": {}
}"#;

const IGNORE: &str = "\
# Ignore sensitive files
config.json
*.token
*.key
*.pem
.env
node_modules/
";

const SKILL_DOC: &str = r#"# Skill Name

Brief description of what this skill does.

## Setup

```bash
# Installation steps
```

## Usage

```bash
skill-cli command
```

## Configuration

Required environment variables or config options.

## Supported Commands

- `command1` - Description
- `command2` - Description"#;

const README: &str = r#"# Skill Name

Brief description.

## Features

- Feature 1
- Feature 2

## Quick Start

```bash
# Setup
skill-cli setup

# Usage
skill-cli command arg
```

## Documentation

See [SKILL.md](./SKILL.md) for full documentation.

## License

MIT"#;

const GUIDELINES: &[(&str, &[&str])] = &[
    (
        "Core Principles",
        &[
            "1. 保证程序的可用性和鲁棒性",
            "2. 尽量优化交互体验",
            "3. 在用户设置错误时有可靠简单的回退选项",
            "4. 能让用户通过一次输入就解决的事情不要拖两次",
            "5. 记住这个 -> 写在 markdown 文件里",
        ],
    ),
    (
        "Configuration Rules",
        &[
            "- Never change openclaw.json without permission",
            "- Show planned changes before applying",
            "- NO emoji in output",
        ],
    ),
    (
        "Best Practices",
        &[
            "- One-command setup",
            "- Auto-save config to config.json",
            "- Smart error messages with suggestions",
            "- Fuzzy matching for names",
            "- Natural language command support",
        ],
    ),
];

fn personalize(template: &str, name: &str) -> String {
    template
        .replace("Skill Name", &title_case(name))
        .replace("skill-cli", name)
}

/// The directory tree of a standard skill.
pub fn structure() -> &'static str {
    STRUCTURE
}

pub fn config_json(name: &str) -> String {
    CONFIG.replace(DEFAULT_NAME, name)
}

pub fn gitignore() -> &'static str {
    IGNORE
}

/// Development guidelines, grouped by heading.
pub fn guidelines() -> &'static [(&'static str, &'static [&'static str])] {
    GUIDELINES
}

pub fn skill_md(name: &str) -> String {
    personalize(SKILL_DOC, name)
}

pub fn readme(name: &str) -> String {
    personalize(README, name)
}

/// Node entry point that greets with the skill name.
pub fn entry_point(name: &str) -> String {
    format!(
        "#!/usr/bin/env node\n\n// Main skill implementation\nconsole.log(\"Hello from {name}!\");\n"
    )
}

/// The full file set for a new skill called `name`.
pub fn skill_files(name: &str) -> Vec<TemplateFile> {
    vec![
        TemplateFile {
            file_name: SKILL_MD,
            contents: skill_md(name),
            executable: false,
        },
        TemplateFile {
            file_name: README_MD,
            contents: readme(name),
            executable: false,
        },
        TemplateFile {
            file_name: CONFIG_JSON,
            contents: config_json(name),
            executable: false,
        },
        TemplateFile {
            file_name: GITIGNORE,
            contents: gitignore().to_string(),
            executable: false,
        },
        TemplateFile {
            file_name: ENTRY_POINT,
            contents: entry_point(name),
            executable: true,
        },
    ]
}
