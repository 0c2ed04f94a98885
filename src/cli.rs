//! 命令行参数

use clap::Parser;

use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "In-memory terminal task list")]
pub struct Cli {
    /// Theme for this run (Classic, Auto, Dark, Light, Nord); overrides config.toml
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Seed the board with a task; repeatable. Blank values are ignored
    #[arg(long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    Theme::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.label()).collect();
        format!("unknown theme '{}', expected one of: {}", name, names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["taskboard"]).unwrap();
        assert!(cli.theme.is_none());
        assert!(cli.tasks.is_empty());
    }

    #[test]
    fn test_parse_repeated_tasks() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "--theme",
            "nord",
            "--task",
            "Write report",
            "--task",
            "Call dentist",
        ])
        .unwrap();
        assert_eq!(cli.theme, Some(Theme::Nord));
        assert_eq!(cli.tasks, vec!["Write report", "Call dentist"]);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = Cli::try_parse_from(["taskboard", "--theme", "Solarized"]).unwrap_err();
        assert!(err.to_string().contains("unknown theme"));
    }
}
