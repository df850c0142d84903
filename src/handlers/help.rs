use crate::handlers::{reply, HandlerResult};

static HELP: &str = include_str!("help.txt");

pub fn help_cmd_handler() -> HandlerResult {
    reply(HELP);
    Ok(())
}
