use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use wordfreq_engine::{CounterConfig, HtmlWordCounter, HttpClient, LogProgressSink, WordReport};

/// Words on a fetched page are separated by spaces and line breaks.
const PAGE_DELIMITERS: [&str; 2] = [" ", "\n"];

/// One interactive session: ask for a URL, fetch it, ask where to save the
/// page, then count and log the words.
///
/// Failures of the counting run itself are logged by the counter and yield
/// `Ok(None)`; only failures before the run are returned.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<WordReport>> {
    let url = prompt(input, output, "Enter URL:")?.trim().to_string();

    let client = HttpClient::new(&url).with_context(|| format!("cannot fetch '{url}'"))?;
    let response = client
        .connect()
        .with_context(|| format!("connection to {} failed", client.url()))?;
    response
        .check_ok()
        .with_context(|| format!("{} did not answer with success", client.url()))?;

    let directory = prompt(input, output, "Enter the directory:")?;

    let config = CounterConfig::builder(url)
        .save_file_in(&directory)
        .with_context(|| format!("cannot create a save file for directory '{directory}'"))?
        .word_delimiters(PAGE_DELIMITERS)
        .build();
    let counter = HtmlWordCounter::new(config)?;

    Ok(counter.run_and_log(response, &LogProgressSink))
}

/// Print `question` and read one answer line without its line terminator.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<String> {
    writeln!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before answering '{question}'");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_terminator_only() {
        let mut input = Cursor::new("  some dir \r\nnext\n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, "Enter the directory:").unwrap();

        assert_eq!(answer, "  some dir ");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter the directory:\n");
    }

    #[test]
    fn prompt_fails_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt(&mut input, &mut output, "Enter URL:").unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn unsupported_scheme_stops_before_directory_prompt() {
        let mut input = Cursor::new("ftp://example.com/file\n/tmp\n");
        let mut output = Vec::new();

        let err = run_session(&mut input, &mut output).unwrap_err();

        assert!(format!("{err:#}").contains("supported protocols: http, https. Got: ftp"));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter URL:\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn session_saves_page_and_counts_with_page_delimiters() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let body = "<html><head><title>Skip me</title></head><body><p>one two\ntwo</p></body></html>";
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
            .mount(&server)
            .await;

        let temp = tempfile::TempDir::new().unwrap();
        let url = format!("{}/page", server.uri());
        let answers = format!("{url}\n{}\n", temp.path().display());

        let (report, prompts) = tokio::task::spawn_blocking(move || {
            let mut input = Cursor::new(answers);
            let mut output = Vec::new();
            let report = run_session(&mut input, &mut output).unwrap();
            (report, String::from_utf8(output).unwrap())
        })
        .await
        .unwrap();

        assert_eq!(prompts, "Enter URL:\nEnter the directory:\n");

        let report = report.expect("word count succeeded");
        assert_eq!(report.delimiter_pattern, " |\n");
        assert_eq!(
            report.to_string(),
            format!("Statistics for {}/page. Word delimiter pattern: ' |\n'\none: 1\ntwo: 2", server.uri())
        );

        let saved: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(saved.len(), 1);
        let name = saved[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("web_page_") && name.ends_with(".html"));
        assert_eq!(std::fs::read_to_string(&saved[0]).unwrap(), body);
    }
}
