//! Operator declarations, read from a JSON file of the form
//! `{ "+": { "priority": 6, "associativity": "left" } }` and from `--op`
//! arguments. Arguments override the file.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context};
use lmd_compiler::reshape::{Associativity, OperatorTable};
use log::debug;
use serde::Deserialize;

use crate::args::OperatorSpec;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Declaration {
    priority: i32,
    #[serde(default)]
    associativity: Option<String>,
}

pub fn table(file: Option<&Path>, specs: &[OperatorSpec]) -> anyhow::Result<OperatorTable> {
    let mut table = match file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("could not read `{}`", path.display()))?;
            from_json(&json).with_context(|| format!("invalid operator file `{}`", path.display()))?
        }

        None => OperatorTable::new(),
    };

    for spec in specs {
        table.add(&spec.text, spec.priority, spec.associativity);
    }

    debug!("declared {} operators", table.len());
    Ok(table)
}

fn from_json(json: &str) -> anyhow::Result<OperatorTable> {
    let declarations: BTreeMap<String, Declaration> = serde_json::from_str(json)?;
    let mut table = OperatorTable::new();

    for (text, declaration) in declarations {
        if text.is_empty() {
            return Err(anyhow!("operator text cannot be empty"));
        }

        let associativity = match declaration.associativity {
            Some(name) => name.parse::<Associativity>().map_err(|e| anyhow!("`{text}`: {e}"))?,
            None => Associativity::default(),
        };

        table.add(&text, declaration.priority, associativity);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use lmd_compiler::reshape::{Associativity, Precedence};

    use super::{from_json, table};
    use crate::args::OperatorSpec;

    #[test]
    fn declarations() {
        let table = from_json(
            r#"{
                "+": { "priority": 6, "associativity": "left" },
                "^": { "priority": 8, "associativity": "right" },
                "==": { "priority": 4 }
            }"#,
        )
        .unwrap();

        assert_eq!(3, table.len());
        assert_eq!(
            Some(Precedence { priority: 8, associativity: Associativity::Right }),
            table.get("^")
        );
        assert_eq!(
            Some(Precedence { priority: 4, associativity: Associativity::Left }),
            table.get("==")
        );
        assert_eq!(None, table.get("*"));
    }

    #[test]
    fn malformed_declarations() {
        assert!(from_json("[]").is_err());
        assert!(from_json(r#"{ "+": { "associativity": "left" } }"#).is_err());
        assert!(from_json(r#"{ "+": { "priority": 1, "associativity": "up" } }"#).is_err());
        assert!(from_json(r#"{ "+": { "priority": 1, "fixity": "infix" } }"#).is_err());
        assert!(from_json(r#"{ "": { "priority": 1 } }"#).is_err());
    }

    #[test]
    fn arguments_without_a_file() {
        let specs = [
            "+:6".parse::<OperatorSpec>().unwrap(),
            "+:2:right".parse::<OperatorSpec>().unwrap(),
        ];

        let table = table(None, &specs).unwrap();
        assert_eq!(1, table.len());
        assert_eq!(
            Some(Precedence { priority: 2, associativity: Associativity::Right }),
            table.get("+")
        );
    }

    #[test]
    fn missing_file() {
        let path = std::path::Path::new("this/file/does/not/exist.json");
        assert!(table(Some(path), &[]).is_err());
    }
}
