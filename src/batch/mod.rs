//! At the command line, the front end is used as a "batch" checker: every
//! file is lexed, parsed, and reshaped in one go, and the errors of all of
//! them are reported together.

mod operators;
mod report;

use anyhow::{anyhow, Context};
use lmd_compiler::alloc::Bump;
use lmd_compiler::errors::Errors;
use lmd_compiler::names::check_definitions;
use lmd_compiler::pipeline;
use lmd_compiler::source::Sources;
use lmd_compiler::trees::Pretty;
use log::{debug, info};

use crate::args::Check;

pub fn run(check: &Check) -> anyhow::Result<()> {
    if check.paths.is_empty() {
        return Err(anyhow!("no source files given"));
    }

    let table = operators::table(check.operators.as_deref(), &check.op)?;

    let mut sources = Sources::new();
    let mut ids = Vec::with_capacity(check.paths.len());
    for path in check.paths.iter() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read `{}`", path.display()))?;
        ids.push(sources.add(path.display().to_string(), content));
    }

    let mut errors = Errors::new();
    let tokens: Vec<_> =
        ids.iter().map(|&id| pipeline::tokens(sources.get(id), &mut errors)).collect();

    let alloc = Bump::new();
    let pretty = Pretty::new().with_show_spans(check.spans);
    let mut programs = Vec::with_capacity(ids.len());

    for (&id, tokens) in ids.iter().zip(tokens.iter()) {
        let Some(tokens) = tokens else {
            continue;
        };

        let source = sources.get(id);
        let Some(program) = pipeline::check(&alloc, source, tokens, &table, &mut errors) else {
            continue;
        };

        if check.dump {
            println!("{}:", source.name);
            print!("{}", pretty.node(program));
        }

        programs.push(program);
    }

    if errors.is_perfect() {
        let duplicates = check_definitions(programs, &mut errors);
        debug!("{} names are defined more than once", duplicates.len());
    }

    for error in errors.iter() {
        eprint!("{}", report::render(&sources, error));
    }

    if errors.is_perfect() {
        info!("checked {} files", ids.len());
        Ok(())
    } else {
        Err(anyhow!("{} errors", errors.num_errors()))
    }
}
