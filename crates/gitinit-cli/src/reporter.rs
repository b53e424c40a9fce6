//! Console progress reporter.

use colored::Colorize;

use gitinit_core::{GitInitError, ProgressReporter};

/// Line-oriented step display: yellow while running, green on success,
/// red on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn step_running(&self, index: usize, total: usize, title: &str) {
        println!(
            "{} {}",
            format!("[{}/{}]", index + 1, total).dimmed(),
            title.yellow()
        );
    }

    fn step_succeeded(&self, _index: usize, title: &str) {
        println!("  {} {}", "✔".green(), title.green());
    }

    fn step_failed(&self, _index: usize, title: &str, error: &GitInitError) {
        eprintln!("  {} {}: {}", "✖".red(), title.red(), error);
    }
}
