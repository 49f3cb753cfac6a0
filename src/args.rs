use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;
use lmd_compiler::reshape::Associativity;

/// A front end for a small functional language with user-defined operators.
#[derive(FromArgs, Debug)]
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Check(Check),
}

/// Check the given source files for static errors.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "check")]
pub struct Check {
    /// the source files to check
    #[argh(positional)]
    pub paths: Vec<PathBuf>,

    /// a JSON file declaring the operators in use
    #[argh(option)]
    pub operators: Option<PathBuf>,

    /// declare an operator, as `text:priority[:left|right|none]`
    #[argh(option)]
    pub op: Vec<OperatorSpec>,

    /// print the tree of every file that checks
    #[argh(switch)]
    pub dump: bool,

    /// include source spans in printed trees
    #[argh(switch)]
    pub spans: bool,

    /// the amount of logging to perform
    #[argh(option, default = "LogLevel::Off")]
    pub log: LogLevel,
}

/// An operator declared on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorSpec {
    pub text: String,
    pub priority: i32,
    pub associativity: Associativity,
}

impl FromStr for OperatorSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.split(':').collect();
        let (text, priority, associativity) = match parts.as_slice() {
            [text, priority] => (*text, *priority, Associativity::default()),
            [text, priority, associativity] => (*text, *priority, associativity.parse()?),
            _ => return Err(format!("expected `text:priority[:associativity]`, got `{s}`")),
        };

        if text.is_empty() {
            return Err("operator text cannot be empty".into());
        }

        let priority = priority
            .parse()
            .map_err(|_| format!("expected an integer priority, got `{priority}`"))?;

        Ok(Self { text: text.into(), priority, associativity })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),

            _ => Err("expected one of `off`, `trace`, `debug`, `info`, `warning`, or `error`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use argh::FromArgs;
    use lmd_compiler::reshape::Associativity;

    use super::{Args, Command, LogLevel, OperatorSpec};

    fn check(args: &[&str]) -> super::Check {
        let args = Args::from_args(&["lmdc"], args).unwrap();
        let Command::Check(check) = args.command;
        check
    }

    #[test]
    fn operator_specs() {
        assert_eq!(
            Ok(OperatorSpec { text: "+".into(), priority: 6, associativity: Associativity::Left }),
            "+:6".parse()
        );
        assert_eq!(
            Ok(OperatorSpec { text: "^".into(), priority: 8, associativity: Associativity::Right }),
            "^:8:right".parse()
        );
        assert_eq!(
            Ok(OperatorSpec { text: "==".into(), priority: -1, associativity: Associativity::None }),
            "==:-1:none".parse()
        );

        assert!("+".parse::<OperatorSpec>().is_err());
        assert!(":6".parse::<OperatorSpec>().is_err());
        assert!("+:six".parse::<OperatorSpec>().is_err());
        assert!("+:6:up".parse::<OperatorSpec>().is_err());
    }

    #[test]
    fn log_levels() {
        assert_eq!(Ok(LogLevel::Warning), "warning".parse());
        assert_eq!(log::LevelFilter::Warn, LogLevel::Warning.to_level_filter());
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn check_defaults() {
        let check = check(&["check", "main.lmd"]);

        assert_eq!(vec![PathBuf::from("main.lmd")], check.paths);
        assert_eq!(None, check.operators);
        assert!(check.op.is_empty());
        assert!(!check.dump);
        assert!(!check.spans);
        assert_eq!(LogLevel::Off, check.log);
    }

    #[test]
    fn check_everything() {
        let check = check(&[
            "check",
            "a.lmd",
            "b.lmd",
            "--operators",
            "ops.json",
            "--op",
            "+:6",
            "--op",
            "*:7:left",
            "--dump",
            "--spans",
            "--log",
            "debug",
        ]);

        assert_eq!(vec![PathBuf::from("a.lmd"), PathBuf::from("b.lmd")], check.paths);
        assert_eq!(Some(PathBuf::from("ops.json")), check.operators);
        assert_eq!(2, check.op.len());
        assert_eq!("*", check.op[1].text);
        assert!(check.dump);
        assert!(check.spans);
        assert_eq!(LogLevel::Debug, check.log);
    }

    #[test]
    fn bad_operator_is_rejected() {
        assert!(Args::from_args(&["lmdc"], &["check", "--op", "+"]).is_err());
    }
}
