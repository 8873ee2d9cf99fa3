//! Commands and the session state they run against

use std::fmt::Write as _;

use anyhow::{anyhow, bail, Context, Result};
use trellis::{RenderStyle, SimContext, Survey, Trellis};

/// One thing the user can ask for, from the command line or the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the trellis
    Show,
    /// Drop balls, optionally printing every step
    Drop { word: String, trace: bool },
    /// Period of a word acting on the identity configuration
    Period { word: String },
    /// Orbit of a word, optionally from a start word
    Orbit { word: String, start: String },
    /// Reduce a word to its normal form
    Reduce { word: String, strict: bool },
    /// List the rewrite rules
    Rewrites { strict: bool },
    /// List all reduced words
    Irreducibles { strict: bool },
    /// Count irreducibles and their periods
    Survey { strict: bool, json: bool },
    /// Point every switch left
    Reset,
    /// Toggle step-by-step output for drops
    Trace(bool),
    /// Print REPL help
    Help,
    /// Leave the REPL
    Quit,
}

pub const HELP: &str = "\
Commands:
  show                     print the trellis
  drop <word>              drop one ball per letter
  period <word>            period of <word> on the identity configuration
  orbit <word> [start]     orbit of <word>, starting after <start>
  reduce <word> [loose]    normal form of <word>
  rewrites [loose]         list rewrite rules
  irreducibles [loose]     list every reduced word
  survey [loose] [json]    count irreducibles and their periods
  reset                    point every switch left
  trace on|off             print every step of a drop
  help                     show this message
  quit                     leave

'1' is the empty word. 'loose' also allows weight-preserving rewrites.";

impl Action {
    /// Parse one REPL line. Blank lines give `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();
        let flag = |name: &str| args.iter().any(|a| *a == name);
        let word = |i: usize| -> Result<String> {
            args.get(i)
                .map(|s| parse_word(s))
                .ok_or_else(|| anyhow!("'{}' needs a word", command))
        };

        let action = match command {
            "show" | "print" => Action::Show,
            "drop" => Action::Drop {
                word: word(0)?,
                trace: false,
            },
            "period" => Action::Period { word: word(0)? },
            "orbit" => Action::Orbit {
                word: word(0)?,
                start: args.get(1).map(|s| parse_word(s)).unwrap_or_default(),
            },
            "reduce" => Action::Reduce {
                word: word(0)?,
                strict: !flag("loose"),
            },
            "rewrites" => Action::Rewrites {
                strict: !flag("loose"),
            },
            "irreducibles" => Action::Irreducibles {
                strict: !flag("loose"),
            },
            "survey" => Action::Survey {
                strict: !flag("loose"),
                json: flag("json"),
            },
            "reset" => Action::Reset,
            "trace" => match args.first().copied() {
                Some("on") => Action::Trace(true),
                Some("off") => Action::Trace(false),
                _ => bail!("usage: trace on|off"),
            },
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => bail!("unknown command '{}' (try 'help')", other),
        };
        Ok(Some(action))
    }
}

/// A trellis plus the settings commands run with.
pub struct Session {
    pub trellis: Trellis,
    pub ctx: SimContext,
    pub style: RenderStyle,
}

impl Session {
    pub fn new(height: usize, width: usize, style: RenderStyle) -> Result<Self> {
        let trellis = Trellis::new(height, width)
            .with_context(|| format!("cannot build a {}x{} trellis", height, width))?;
        Ok(Self {
            trellis,
            ctx: SimContext::new(),
            style,
        })
    }

    /// Run `action` and return what should be printed.
    pub fn execute(&mut self, action: Action) -> Result<String> {
        let mut out = String::new();
        match action {
            Action::Show => out.push_str(&self.trellis.render(self.style)),
            Action::Drop { word, trace } => {
                if trace || self.ctx.trace {
                    let style = self.style;
                    let mut frames = Vec::new();
                    self.trellis.drop_balls_traced(&word, |t| {
                        frames.push(format!("{}\n{}", t.render(style), t.separator()));
                    })?;
                    out.push_str(&frames.join("\n"));
                } else {
                    self.trellis.drop_balls(&word)?;
                    out.push_str(&self.trellis.render(self.style));
                }
            }
            Action::Period { word } => {
                let period = self.trellis.period_of(&word, &self.ctx)?;
                write!(out, "period({}) = {}", display_word(&word), period)?;
            }
            Action::Orbit { word, start } => {
                let orbit = self.trellis.orbit(&word, &start, &self.ctx)?;
                let rendered: Vec<String> = orbit
                    .iter()
                    .map(|w| display_word(&w.to_string()))
                    .collect();
                write!(out, "[{}]", rendered.join(", "))?;
            }
            Action::Reduce { word, strict } => {
                let reduced = self.trellis.reduce(&word, strict)?;
                write!(
                    out,
                    "{} -> {}",
                    display_word(&word),
                    display_word(&reduced.to_string())
                )?;
            }
            Action::Rewrites { strict } => {
                let system = self.trellis.rewrite_system(strict);
                let lines: Vec<String> = system.rules().iter().map(ToString::to_string).collect();
                out.push_str(&lines.join("\n"));
            }
            Action::Irreducibles { strict } => {
                let reduced = self.trellis.all_reduced_actions(strict, &self.ctx)?;
                let words: Vec<String> = reduced
                    .iter()
                    .map(|w| display_word(&w.to_string()))
                    .collect();
                writeln!(out, "{} irreducible elements", words.len())?;
                out.push_str(&words.join(" "));
            }
            Action::Survey { strict, json } => {
                let survey = Survey::run(&mut self.trellis, strict, &self.ctx)?;
                if json {
                    out.push_str(&serde_json::to_string_pretty(&survey)?);
                } else {
                    out.push_str(survey.to_string().trim_end());
                }
            }
            Action::Reset => {
                self.trellis.reset();
                self.trellis.remove_ball();
                out.push_str(&self.trellis.render(self.style));
            }
            Action::Trace(on) => {
                self.ctx.trace = on;
                write!(out, "trace {}", if on { "on" } else { "off" })?;
            }
            Action::Help => out.push_str(HELP),
            Action::Quit => {}
        }
        Ok(out)
    }
}

/// `1` stands for the empty word, as it is printed.
pub fn parse_word(word: &str) -> String {
    if word == "1" {
        String::new()
    } else {
        word.to_string()
    }
}

fn display_word(word: &str) -> String {
    if word.is_empty() {
        "1".to_string()
    } else {
        word.to_string()
    }
}
