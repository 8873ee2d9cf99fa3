//! Command line for the trellis simulator
//!
//! With no subcommand, starts an interactive session.

mod repl;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use trellis::RenderStyle;

use session::{parse_word, Action, Session};

/// Simulate ball-drop trellises and compute their group actions.
#[derive(Clone, Debug, Parser)]
#[command(name = "trellis", version)]
struct Options {
    /// Trellis height: the grid has 2 * height + 1 rows.
    #[arg(short = 'H', long, env = "TRELLIS_HEIGHT", default_value = "1")]
    height: usize,

    /// Trellis width: there are width + 1 slots.
    #[arg(short = 'W', long, env = "TRELLIS_WIDTH", default_value = "2")]
    width: usize,

    /// Give up on orbits longer than this.
    #[arg(long, env = "TRELLIS_MAX_ORBIT_LEN", default_value_t = 1 << 20)]
    max_orbit_len: usize,

    /// Print switches without ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the fresh trellis.
    Show,
    /// Drop one ball per letter of WORD and print the result.
    Drop {
        word: String,
        /// Print every step of every ball.
        #[arg(long)]
        trace: bool,
    },
    /// Period of WORD acting on the all-left configuration.
    Period { word: String },
    /// Orbit of WORD, as reduced words.
    Orbit {
        word: String,
        /// Word applied once before iterating.
        #[arg(long, default_value = "")]
        start: String,
    },
    /// Reduce WORD with the rewrite rules.
    Reduce {
        word: String,
        /// Also use weight-preserving rewrites.
        #[arg(long)]
        non_strict: bool,
    },
    /// List the rewrite rules.
    Rewrites {
        #[arg(long)]
        non_strict: bool,
    },
    /// List every reduced word up to the period bound.
    Irreducibles {
        #[arg(long)]
        non_strict: bool,
    },
    /// Count irreducible elements and tabulate their periods.
    Survey {
        #[arg(long)]
        non_strict: bool,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Interactive session (default).
    Repl,
}

impl Command {
    /// The session action to run, or `None` for the interactive session.
    fn into_action(self) -> Option<Action> {
        Some(match self {
            Command::Show => Action::Show,
            Command::Drop { word, trace } => Action::Drop {
                word: parse_word(&word),
                trace,
            },
            Command::Period { word } => Action::Period {
                word: parse_word(&word),
            },
            Command::Orbit { word, start } => Action::Orbit {
                word: parse_word(&word),
                start: parse_word(&start),
            },
            Command::Reduce { word, non_strict } => Action::Reduce {
                word: parse_word(&word),
                strict: !non_strict,
            },
            Command::Rewrites { non_strict } => Action::Rewrites { strict: !non_strict },
            Command::Irreducibles { non_strict } => Action::Irreducibles {
                strict: !non_strict,
            },
            Command::Survey { non_strict, json } => Action::Survey {
                strict: !non_strict,
                json,
            },
            Command::Repl => return None,
        })
    }
}

fn main() -> Result<()> {
    let opt = Options::parse();
    let level = if opt.verbose { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));

    let style = if opt.no_color {
        RenderStyle::Plain
    } else {
        RenderStyle::Color
    };
    let mut session = Session::new(opt.height, opt.width, style)?;
    session.ctx.max_orbit_len = opt.max_orbit_len;
    log::debug!("{:?}", session.trellis);

    match opt.command.and_then(Command::into_action) {
        Some(action) => {
            let out = session.execute(action)?;
            if !out.is_empty() {
                println!("{}", out);
            }
        }
        None => repl::run(&mut session)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_parse_survey_flags() {
        let opt = Options::parse_from(["trellis", "-H", "2", "survey", "--non-strict", "--json"]);
        assert_eq!(opt.height, 2);
        let action = opt.command.and_then(Command::into_action);
        assert_eq!(
            action,
            Some(Action::Survey {
                strict: false,
                json: true
            })
        );
    }

    #[test]
    fn test_one_is_the_empty_word() {
        let opt = Options::parse_from(["trellis", "orbit", "ab", "--start", "1"]);
        assert_eq!(
            opt.command.and_then(Command::into_action),
            Some(Action::Orbit {
                word: "ab".into(),
                start: String::new()
            })
        );
    }

    #[test]
    fn test_repl_is_default() {
        let opt = Options::parse_from(["trellis"]);
        assert!(opt.command.and_then(Command::into_action).is_none());
    }
}
