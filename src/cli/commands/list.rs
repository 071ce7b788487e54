//! The `list` verb: print the verb table.

use anyhow::bail;

use crate::verb::{CommandResult, Verb, VerbFlags};

use super::{Context, VERBS};

/// `list [VERB...]`; lists every verb, or only the named ones.
///
/// Naming a verb that does not exist fails before anything is printed.
pub fn run(_left: usize, args: &[String], ctx: &mut Context) -> anyhow::Result<CommandResult> {
    let filter = &args[1..];

    let mut selected: Vec<&Verb<Context>> = Vec::new();
    if filter.is_empty() {
        selected.extend(VERBS.iter());
    }
    for name in filter {
        match crate::find_verb(&VERBS, Some(name.as_str())) {
            Some(verb) => selected.push(verb),
            None => bail!("No such verb '{}'", name),
        }
    }

    for verb in selected {
        if ctx.quiet {
            ctx.say(verb.name);
        } else {
            ctx.say(format!(
                "{:<10} {:<8} {}",
                verb.name,
                format_bounds(verb.min_args, verb.max_args),
                format_flags(verb.flags)
            ));
        }
    }

    Ok(CommandResult::success())
}

/// Render argument bounds, counting the verb itself.
pub fn format_bounds(min: Option<usize>, max: Option<usize>) -> String {
    match (min, max) {
        (None, None) => "any".to_string(),
        (Some(min), None) => format!("{}+", min),
        (None, Some(max)) => format!("<={}", max),
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{}-{}", min, max),
    }
}

fn format_flags(flags: VerbFlags) -> String {
    let mut names = Vec::new();
    if flags.contains(VerbFlags::DEFAULT) {
        names.push("default");
    }
    if flags.contains(VerbFlags::ONLINE_ONLY) {
        names.push("online-only");
    }
    if flags.contains(VerbFlags::MUST_BE_ROOT) {
        names.push("root");
    }
    names.join(",")
}
