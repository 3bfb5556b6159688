//! `analyze` and `check-key` handlers.

use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tracing::info;

use clutch_config::Config;
use clutch_protocols::{AnalysisRequest, AnalysisResult, ClassifiedError};

use crate::cli::AnalyzeArgs;
use crate::register::{build_analyzer, resolve_credential};

/// Analyze one page and print the suggestion.
pub(crate) async fn handle_analyze(
    args: AnalyzeArgs,
    cli_key: Option<&str>,
    config: &Config,
) -> anyhow::Result<()> {
    let credential = resolve_credential(cli_key, config)?;
    let text = read_page_text(args.text_file.as_deref()).await?;

    let mut request = AnalysisRequest::new(credential, text)
        .with_url(args.url)
        .with_title(args.title)
        .with_headline(args.headline)
        .with_meta_description(args.meta_description)
        .with_text_limit(config.analysis.max_text_chars);
    if let Some(domain) = args.domain {
        request = request.with_domain(domain);
    }

    info!(url = %request.source_url, chars = request.source_text.chars().count(), "Analyzing page");

    let analyzer = build_analyzer(config);
    let result = analyzer.analyze(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_text(&result));
    }
    Ok(())
}

/// Ask the API whether the key is accepted.
pub(crate) async fn handle_check_key(cli_key: Option<&str>, config: &Config) -> anyhow::Result<()> {
    let credential = resolve_credential(cli_key, config)?;
    let analyzer = build_analyzer(config);

    if analyzer.validate_credential(&credential).await? {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        Err(ClassifiedError::invalid_credential("the API did not accept this key").into())
    }
}

async fn read_page_text(path: Option<&Path>) -> anyhow::Result<String> {
    let text = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading page text from stdin")?;
            buf
        }
    };
    Ok(text.trim().to_string())
}

fn render_text(result: &AnalysisResult) -> String {
    format!(
        "Content angle\n  {}\n\nHook\n  {}\n\nWhy it works\n  {}\n",
        result.content_angle, result.hook, result.why_it_works
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_render_text() {
        let rendered = render_text(&AnalysisResult::new("angle", "hook", "why"));
        assert_eq!(rendered, "Content angle\n  angle\n\nHook\n  hook\n\nWhy it works\n  why\n");
    }

    #[tokio::test]
    async fn test_read_page_text_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\n  Page body here.  \n").unwrap();

        let text = read_page_text(Some(file.path())).await.unwrap();
        assert_eq!(text, "Page body here.");
    }

    #[tokio::test]
    async fn test_read_page_text_missing_file() {
        let err = read_page_text(Some(Path::new("/nonexistent/page.txt"))).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.txt"));
    }
}
