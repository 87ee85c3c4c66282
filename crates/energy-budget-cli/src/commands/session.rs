//! Interactive symptom reporting over stdin.
//!
//! Each line is `<axis> <level>`, `show`, `trend`, `help` or `quit`.

use std::io::{BufRead, Write};

use chrono::Local;
use energy_budget_core::{NullRenderer, Session};

use super::configured_session;
use crate::render::{format_dashboard, TextRenderer};

const HELP: &str = "Commands:
  <axis> <level>  report a symptom (fatigue, pain, cognitiveIssues, sleepQuality; 1-5)
  show            print the dashboard
  trend           print the weekly trend
  help            print this help
  quit            end the session";

const KEYWORDS: [&str; 5] = ["quit", "exit", "help", "show", "trend"];

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = configured_session()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock(), json)
}

/// Drive `session` from `input` until EOF or `quit`.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let started = session.start(&mut NullRenderer);
        writeln!(output, "{}", serde_json::to_string(&started)?)?;
    } else {
        let mut renderer = TextRenderer::default();
        session.start(&mut renderer);
        writeln!(
            output,
            "Session started {}",
            Local::now().format("%Y-%m-%d %H:%M")
        )?;
        write!(output, "{}", renderer.take())?;
        writeln!(output, "\nType 'help' for commands.")?;
    }

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&first, rest)) = words.split_first() else {
            continue;
        };

        if KEYWORDS.contains(&first) {
            if !rest.is_empty() {
                write_error(&mut output, json, &format!("'{first}' takes no arguments"))?;
                continue;
            }
            match first {
                "quit" | "exit" => break,
                "help" if json => writeln!(
                    output,
                    "{}",
                    serde_json::json!({ "type": "Help", "text": HELP })
                )?,
                "help" => writeln!(output, "{HELP}")?,
                "show" if json => writeln!(
                    output,
                    "{}",
                    serde_json::json!({
                        "type": "Snapshot",
                        "state": session.state(),
                        "snapshot": session.snapshot(),
                    })
                )?,
                "show" => write!(
                    output,
                    "{}",
                    format_dashboard(session.state(), session.snapshot())
                )?,
                "trend" if json => writeln!(
                    output,
                    "{}",
                    serde_json::json!({ "type": "Trend", "trend": session.trend() })
                )?,
                _ => write!(output, "{}", session.trend().render_ascii_chart())?,
            }
            continue;
        }

        match rest {
            [raw] => match session.report_named(first, raw, &mut NullRenderer) {
                Ok(event) if json => writeln!(output, "{}", serde_json::to_string(&event)?)?,
                Ok(event) => writeln!(
                    output,
                    "{} set to {} -> energy budget {}%",
                    first,
                    raw.trim(),
                    event.snapshot().energy_budget
                )?,
                Err(e) => write_error(&mut output, json, &e.to_string())?,
            },
            _ => write_error(
                &mut output,
                json,
                &format!("unrecognized input '{}'", line.trim()),
            )?,
        }
    }
    Ok(())
}

/// Report a bad line without ending the session. JSON mode keeps one object
/// per line.
fn write_error<W: Write>(output: &mut W, json: bool, message: &str) -> std::io::Result<()> {
    if json {
        writeln!(
            output,
            "{}",
            serde_json::json!({ "type": "Error", "message": message })
        )
    } else {
        writeln!(output, "error: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(input: &str, json: bool) -> (Session, String) {
        let mut session = Session::default();
        let mut out = Vec::new();
        run_loop(&mut session, input.as_bytes(), &mut out, json).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reports_update_budget() {
        let (session, out) = drive("fatigue 5\nsleepQuality 1\n", false);
        assert!(out.contains("fatigue set to 5 -> energy budget 62%"));
        // 100 - 25 - 6 - 16 + 3
        assert!(out.contains("sleepQuality set to 1 -> energy budget 56%"));
        assert_eq!(session.snapshot().energy_budget, 56);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (session, out) = drive("pain 9\nmood 2\nwhat is this\npain 1\n", false);
        assert!(out.contains("error: level 9 is outside 1..=5"));
        assert!(out.contains("unknown symptom axis 'mood'"));
        assert!(out.contains("unrecognized input 'what is this'"));
        assert_eq!(session.state().pain.value(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = drive("quit\nfatigue 1\n", false);
        assert_eq!(session.state().fatigue.value(), 3);
    }

    #[test]
    fn test_keywords_with_arguments_are_not_axes() {
        let (session, out) = drive("quit now\nshow x\nfatigue 2\n", false);
        assert!(out.contains("error: 'quit' takes no arguments"));
        assert!(out.contains("error: 'show' takes no arguments"));
        assert!(!out.contains("unknown symptom axis"));
        assert_eq!(session.state().fatigue.value(), 2);
    }

    #[test]
    fn test_json_mode_output_is_one_object_per_line() {
        let (_, out) = drive("pain 9\nshow\ntrend\nhelp\nmood 2\nshow x\nwhat is this\n", true);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l:?} ({e})")))
            .collect();

        let types: Vec<&str> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
        assert_eq!(
            types,
            vec!["SessionStarted", "Error", "Snapshot", "Trend", "Help", "Error", "Error", "Error"]
        );
        assert_eq!(lines[1]["message"], "level 9 is outside 1..=5");
        assert_eq!(lines[2]["snapshot"]["energyBudget"], 72);
        assert_eq!(lines[3]["trend"]["points"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_json_mode_emits_events() {
        let (_, out) = drive("pain 3\n", true);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "SessionStarted");
        assert_eq!(lines[1]["type"], "SymptomReported");
        // 100 - 15 - 9 - 16 + 9
        assert_eq!(lines[1]["snapshot"]["energyBudget"], 69);
    }
}
