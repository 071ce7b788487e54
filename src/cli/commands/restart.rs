//! The `restart` verb.

use crate::verb::CommandResult;

use super::Context;

/// `restart [UNIT]`; restarts everything when no unit is named.
pub fn run(_left: usize, args: &[String], ctx: &mut Context) -> anyhow::Result<CommandResult> {
    let unit = args.get(1).map(String::as_str).unwrap_or("all");
    tracing::debug!("Restart requested for {}", unit);
    if !ctx.quiet {
        ctx.say(format!("Restarting {}", unit));
    }
    Ok(CommandResult::success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_defaults_to_all() {
        let mut ctx = Context::captured(false);
        run(1, &["restart".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.lines(), ["Restarting all"]);
    }

    #[test]
    fn restart_named_unit() {
        let mut ctx = Context::captured(false);
        let args = vec!["restart".to_string(), "web".to_string()];
        run(2, &args, &mut ctx).unwrap();
        assert_eq!(ctx.lines(), ["Restarting web"]);
    }

    #[test]
    fn quiet_restart_prints_nothing() {
        let mut ctx = Context::captured(true);
        run(1, &["restart".to_string()], &mut ctx).unwrap();
        assert!(ctx.lines().is_empty());
    }
}
