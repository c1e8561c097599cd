//! Implementation of the `refinex-diff render` command.

use super::{read_diff, write_output};
use crate::cli::RenderArgs;
use refinex_diff::config::{Config, OutputFormat};
use refinex_diff::error::{DiffViewError, Result};
use refinex_diff::render::{RenderOptions, render_json, render_table};
use std::io::Write;

/// Render the diff as a table or JSON display rows.
///
/// Command-line flags override the matching config values.
pub fn cmd_render<W: Write>(args: RenderArgs, config: &Config, out: &mut W) -> Result<()> {
    let options = render_options(&args, config)?;
    let format = args.format.unwrap_or(config.format);
    let lines = read_diff(args.input)?;

    let rendered = match format {
        OutputFormat::Table => render_table(&lines, &options),
        OutputFormat::Json => render_json(&lines, &options, true)?,
    };

    write_output(out, &rendered)
}

fn render_options(args: &RenderArgs, config: &Config) -> Result<RenderOptions> {
    let mut options = config.render_options();

    if args.no_header {
        options.show_header = false;
    }

    if let Some(text) = &args.empty_text {
        if text.trim().is_empty() {
            return Err(DiffViewError::UserError(
                "--empty-text must not be blank".to_string(),
            ));
        }
        options.empty_text = text.clone();
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use crate::commands::test_helpers::file_input;

    const SAMPLE: &str = "--- a/f.txt\n+++ b/f.txt\n@@ -1,2 +1,3 @@\n line1\n-line2\n+line2_new\n+line3\n";

    fn args(input: InputArgs) -> RenderArgs {
        RenderArgs {
            input,
            no_header: false,
            empty_text: None,
            format: None,
        }
    }

    fn run(args: RenderArgs, config: &Config) -> String {
        let mut out = Vec::new();
        cmd_render(args, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_renders_table_by_default() {
        let (_dir, input) = file_input(SAMPLE);

        let output = run(args(input), &Config::default());

        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "          --- a/f.txt");
        assert_eq!(rows[4], "   2      -line2");
    }

    #[test]
    fn test_no_header_flag_overrides_config() {
        let (_dir, input) = file_input(SAMPLE);
        let mut render_args = args(input);
        render_args.no_header = true;

        let output = run(render_args, &Config::default());

        assert_eq!(output.lines().count(), 5);
        assert!(!output.contains("+++ b/f.txt"));
    }

    #[test]
    fn test_config_hides_headers() {
        let (_dir, input) = file_input(SAMPLE);
        let config = Config {
            show_header: false,
            ..Default::default()
        };

        let output = run(args(input), &config);

        assert!(!output.contains("--- a/f.txt"));
    }

    #[test]
    fn test_empty_diff_uses_empty_text_flag() {
        let (_dir, input) = file_input("  \n");
        let mut render_args = args(input);
        render_args.empty_text = Some("versions are identical".to_string());

        let output = run(render_args, &Config::default());

        assert_eq!(output, "versions are identical\n");
    }

    #[test]
    fn test_blank_empty_text_flag_is_user_error() {
        let (_dir, input) = file_input("");
        let mut render_args = args(input);
        render_args.empty_text = Some(" ".to_string());

        let mut out = Vec::new();
        let err = cmd_render(render_args, &Config::default(), &mut out).unwrap_err();

        assert!(matches!(err, DiffViewError::UserError(_)));
    }

    #[test]
    fn test_json_format_from_config() {
        let (_dir, input) = file_input("");
        let config = Config {
            format: OutputFormat::Json,
            ..Default::default()
        };

        let output = run(args(input), &config);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["row"], "empty");
        assert_eq!(value[0]["text"], "no differences");
    }
}
