//! The `status` verb: report whether online-only verbs would run.

use crate::policy::ExecutionPolicy;
use crate::privilege::is_elevated;
use crate::verb::CommandResult;

use super::Context;

pub fn run(_left: usize, _args: &[String], ctx: &mut Context) -> anyhow::Result<CommandResult> {
    let environment = if ctx.policy.is_restricted() {
        "restricted"
    } else {
        "online"
    };

    if ctx.quiet {
        ctx.say(environment);
        return Ok(CommandResult::success());
    }

    let privilege = if is_elevated() { "root" } else { "unprivileged" };
    ctx.say(format!("Environment: {}", environment));
    ctx.say(format!("Privilege:   {}", privilege));

    Ok(CommandResult::success())
}
