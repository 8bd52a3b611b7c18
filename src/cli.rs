//! Terminal front end — line-based REPL over an intake session.
//!
//! Renders new transcript entries after every submission and numbers the
//! options when the current step offers some.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::IntakeConfig;
use crate::error::CliError;
use crate::intake::{DialogueEngine, Profile, Speaker, TranscriptEntry};

/// What a line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    ShowProfile,
    /// Dump the transcript as JSON.
    ShowTranscript,
    /// A numbered option from the list on screen.
    Pick(&'static str),
    Text(&'a str),
}

/// Interpret one input line against the options currently on screen.
pub fn parse_line<'a>(line: &'a str, options: Option<&'static [&'static str]>) -> Command<'a> {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/exit" => return Command::Quit,
        "/profile" => return Command::ShowProfile,
        "/transcript" => return Command::ShowTranscript,
        _ => {}
    }

    if let Some(options) = options {
        if let Some(option) = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i).copied())
        {
            return Command::Pick(option);
        }
    }

    Command::Text(line)
}

/// Format transcript entries for the terminal.
pub fn render_entries(entries: &[TranscriptEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match entry.speaker {
            Speaker::Bot => {
                out.push_str(&entry.text);
                out.push('\n');
            }
            Speaker::User => {
                out.push_str("> ");
                out.push_str(&entry.text);
                out.push('\n');
            }
        }
    }
    out
}

/// Format an option list as `  1. ...` lines.
pub fn render_options(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("  {}. {}\n", i + 1, option))
        .collect()
}

/// Run a session until `/quit` or end of input. Returns the collected profile.
pub async fn run<R, W>(config: &IntakeConfig, reader: R, mut writer: W) -> Result<Profile, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut engine = DialogueEngine::with_config(config);
    let mut lines = reader.lines();

    writer
        .write_all(format!("== {} ==\n\n", config.title).as_bytes())
        .await?;
    let mut shown = flush_new(&engine, 0, &mut writer).await?;

    while let Some(line) = lines.next_line().await? {
        let turn = match parse_line(&line, engine.options()) {
            Command::Quit => break,
            Command::ShowProfile => {
                let summary = engine.profile().summary();
                writer.write_all(format!("{summary}\n").as_bytes()).await?;
                writer.flush().await?;
                continue;
            }
            Command::ShowTranscript => {
                let json = engine.transcript_json()?;
                writer.write_all(format!("{json}\n").as_bytes()).await?;
                writer.flush().await?;
                continue;
            }
            Command::Pick(option) => engine.select_option(option),
            Command::Text(text) => engine.submit_text(text),
        };
        tracing::debug!(?turn, "Handled terminal input");
        shown = flush_new(&engine, shown, &mut writer).await?;
    }

    let profile = engine.profile();
    if config.show_profile {
        writer
            .write_all(format!("\n{}\n", profile.summary()).as_bytes())
            .await?;
        writer.flush().await?;
    }
    Ok(profile)
}

/// Write transcript entries past `shown`, then the options if any. Returns
/// the new count of rendered entries.
///
/// User entries are echoed too, so a numeric pick shows the option text it
/// stood for.
async fn flush_new<W>(
    engine: &DialogueEngine,
    shown: usize,
    writer: &mut W,
) -> Result<usize, CliError>
where
    W: AsyncWrite + Unpin,
{
    let transcript = engine.transcript();
    if transcript.len() == shown {
        return Ok(shown);
    }

    let mut out = render_entries(&transcript[shown..]);
    if let Some(options) = engine.options() {
        out.push_str(&render_options(options));
    }
    out.push('\n');

    writer.write_all(out.as_bytes()).await?;
    writer.flush().await?;
    Ok(transcript.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::catalog;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("/quit", None), Command::Quit);
        assert_eq!(parse_line("  /profile ", None), Command::ShowProfile);
        assert_eq!(parse_line("/transcript", None), Command::ShowTranscript);
        assert_eq!(parse_line("Bob", None), Command::Text("Bob"));
    }

    #[test]
    fn numbers_pick_options_only_when_shown() {
        let options: Option<&'static [&'static str]> = Some(&catalog::JOB_TITLES);
        assert_eq!(parse_line("3", options), Command::Pick(catalog::FOUNDER_CEO));
        assert_eq!(parse_line(" 1 ", options), Command::Pick(catalog::STUDENT));
        assert_eq!(parse_line("0", options), Command::Text("0"));
        assert_eq!(parse_line("6", options), Command::Text("6"));
        assert_eq!(parse_line("3", None), Command::Text("3"));
    }

    #[test]
    fn renders_speakers_differently() {
        let out = render_entries(&[TranscriptEntry::bot("Hi"), TranscriptEntry::user("Bob")]);
        assert_eq!(out, "Hi\n> Bob\n");
    }

    #[test]
    fn renders_numbered_options() {
        let out = render_options(&["a", "b"]);
        assert_eq!(out, "  1. a\n  2. b\n");
    }

    #[tokio::test]
    async fn run_drives_full_session() {
        let input = b"I am Jane Doe\nbad-email\njane@example.com\n(555) 123-4567\n\
            2\n4\nthank you\n/quit\n";
        let config = IntakeConfig {
            show_profile: true,
            ..Default::default()
        };
        let mut output = Vec::new();

        let profile = run(&config, &input[..], &mut output).await.unwrap();

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(profile.job_title, catalog::ESG_PROFESSIONAL);
        assert_eq!(profile.motivation, catalog::CALCULATE_GHG);

        let screen = String::from_utf8(output).unwrap();
        assert!(screen.starts_with("== ESG & Sustainability Assistant =="));
        assert!(screen.contains("Please enter a valid email address"));
        assert!(screen.contains("  5. Others"));
        // Numeric picks are echoed as the option they selected
        assert!(screen.contains("> ESG professional in a company\n"));
        assert!(screen.contains("> I am Jane Doe\n"));
        assert!(screen.contains("ESG report creation"));
        assert!(screen.contains("You're welcome!"));
        assert!(screen.contains("# Intake Profile"));
    }

    #[tokio::test]
    async fn transcript_command_prints_json() {
        let input = b"Bob\n/transcript\n";
        let mut output = Vec::new();
        run(&IntakeConfig::default(), &input[..], &mut output)
            .await
            .unwrap();
        let screen = String::from_utf8(output).unwrap();
        assert!(screen.contains(r#"{"speaker":"user","text":"Bob"}"#));
    }

    #[tokio::test]
    async fn run_stops_at_end_of_input() {
        let input = b"Bob\n";
        let mut output = Vec::new();
        let profile = run(&IntakeConfig::default(), &input[..], &mut output)
            .await
            .unwrap();
        assert_eq!(profile.name, "Bob");
        assert!(profile.email.is_empty());
    }
}
