//! Server-rendered HTML for the summariser page.

use crate::pipeline::{Digest, PipelineError, Stage};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// What the page shows below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing submitted yet
    Idle,
    /// Submitted without a URL
    MissingUrl,
    /// Fetching the article failed
    FetchFailed(String),
    /// The article was fetched but the summary could not be generated
    SummaryFailed(String),
    /// A summary, plus the article text when the user asked for it
    Summarized {
        summary: String,
        article: Option<String>,
    },
}

impl Outcome {
    pub fn from_result(result: Result<Digest, PipelineError>, show_full: bool) -> Self {
        match result {
            Ok(digest) => Outcome::Summarized {
                summary: digest.summary.text,
                article: show_full.then_some(digest.article.text),
            },
            Err(e) => match e.stage() {
                Stage::Fetch => Outcome::FetchFailed(e.to_string()),
                Stage::Setup | Stage::Summarize => Outcome::SummaryFailed(e.to_string()),
            },
        }
    }
}

/// Form values echoed back into the page.
#[derive(Debug, Clone, Default)]
pub struct FormState<'a> {
    pub url: &'a str,
    pub show_full: bool,
}

const STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Roboto&display=swap');
html, body { font-family: 'Roboto', sans-serif; background-color: #f8f9fa; margin: 0; }
.container { max-width: 760px; margin: 0 auto; padding: 24px; }
.title { color: #2c3e50; text-align: center; font-size: 2.5em; font-weight: bold; margin-bottom: 10px; }
label { display: block; margin-top: 15px; }
input[type=url], input[type=text] {
  width: 100%; box-sizing: border-box; background-color: #ffffff;
  border: 2px solid #ccc; border-radius: 8px; padding: 10px;
}
button {
  margin-top: 15px; background-color: #4a4a8a; color: white; padding: 10px 24px;
  border: none; border-radius: 8px; font-weight: bold; transition: 0.3s ease; cursor: pointer;
}
button:hover { background-color: #30306d; transform: scale(1.02); }
.notice { margin-top: 20px; padding: 12px 16px; border-radius: 8px; }
.notice.success { background-color: #e6f4ea; color: #1e6b34; }
.notice.warning { background-color: #fff8e1; color: #8a6d00; }
.notice.error { background-color: #fdecea; color: #b3261e; }
.main {
  background-color: #ffffff; padding: 20px; border-radius: 15px;
  box-shadow: 0 4px 12px rgba(0,0,0,0.1); margin-top: 20px; white-space: pre-wrap;
}
.article { white-space: pre-wrap; }
.footer { text-align: center; font-size: 13px; color: gray; margin-top: 30px; }
"#;

/// Render the full page for a form state and outcome.
pub fn render(form: &FormState<'_>, outcome: &Outcome) -> String {
    let checked = if form.show_full { " checked" } else { "" };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>News Summarizer</title>
<style>{style}</style>
</head>
<body>
<div class="container">
<h1 class="title">📰 Gemini-Powered News Summarizer</h1>
<p>Get a quick summary of any news article using <strong>Google Gemini AI</strong>.</p>
<form method="post" action="/summarize">
<label for="url">🔗 Enter the news article URL:</label>
<input type="text" id="url" name="url" value="{url}">
<label><input type="checkbox" name="show_full" value="on"{checked}> 📖 Show full article text</label>
<button type="submit">✨ Summarize Now</button>
</form>
{outcome}
<div class="footer">Powered by Gemini</div>
</div>
</body>
</html>
"#,
        style = STYLE,
        url = encode_double_quoted_attribute(form.url),
        checked = checked,
        outcome = render_outcome(outcome),
    )
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Idle => String::new(),
        Outcome::MissingUrl => {
            r#"<div class="notice warning">⚠️ Please enter a valid URL.</div>"#.to_string()
        }
        Outcome::FetchFailed(message) => {
            format!(r#"<div class="notice error">❌ {}</div>"#, encode_text(message))
        }
        Outcome::SummaryFailed(message) => format!(
            r#"<div class="notice error">❌ Could not generate a summary: {}</div>"#,
            encode_text(message)
        ),
        Outcome::Summarized { summary, article } => {
            let mut html =
                String::from(r#"<div class="notice success">✅ Summary generated successfully!</div>"#);
            if let Some(article) = article {
                html.push_str("\n<h3>📝 Full Article:</h3>\n");
                html.push_str(&format!(r#"<div class="article">{}</div>"#, encode_text(article)));
            }
            html.push_str("\n<h3>📌 Summary:</h3>\n");
            html.push_str(&format!(r#"<div class="main">{}</div>"#, encode_text(summary)));
            html
        }
    }
}
