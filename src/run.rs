//! The core entry point: options in, report out.

use crate::aggregate::{self, Report};
use crate::checkout::CheckoutProvider;
use crate::config::RunOptions;
use crate::links::LinkProber;
use crate::pool;
use crate::task::{RepoTask, ScanContext};

/// Run the full audit: one task per (repository, branch) pair, dispatched
/// across the worker pool, merged into a single report.
///
/// Stateless and self-contained: nothing persists across invocations, and
/// the caller always receives one aggregated report, never a partial one.
pub fn check_repositories(
    options: &RunOptions,
    checkout: &dyn CheckoutProvider,
    prober: &dyn LinkProber,
) -> Report {
    let mut tasks = Vec::new();
    for url in &options.repos {
        for branch in &options.branches {
            tasks.push(RepoTask::new(url, branch, options));
        }
    }

    let ctx = ScanContext { checkout, prober };
    let completed = pool::run_all(tasks, options.workers, &ctx);

    let mut report = aggregate::aggregate(&completed, options.verbose);
    if !options.comments.is_empty() {
        // Validation warnings lead the report, before any task output.
        let mut lines = options.comments.clone();
        lines.append(&mut report.lines);
        report.lines = lines;
    }
    return report;
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::checkout::{Checkout, CheckoutError};
    use crate::config::RawOptions;

    /// Serves one fixture directory per repository URL; everything else is
    /// branch-not-found.
    struct Fixtures {
        repos: Vec<(String, PathBuf)>,
    }

    impl CheckoutProvider for Fixtures {
        fn checkout(
            &self,
            url: &str,
            branch: &str,
            _ssl_verify: bool,
        ) -> Result<Checkout, CheckoutError> {
            for (known, dir) in &self.repos {
                if known == url && branch == "main" {
                    return Ok(Checkout::existing(dir.clone()));
                }
            }
            return Err(CheckoutError::BranchNotFound {
                branch: branch.to_string(),
            });
        }
    }

    struct AllAlive;

    impl LinkProber for AllAlive {
        fn probe(&self, _url: &str) -> i32 {
            return 200;
        }
    }

    #[test]
    fn builds_one_task_per_repo_branch_pair() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "<fd:a:1>A</fd:a:1>").unwrap();

        let url = "https://git.example.com/one.git";
        let provider = Fixtures {
            repos: vec![(url.to_string(), dir.path().to_path_buf())],
        };
        let options = RunOptions::build(RawOptions {
            branches: vec!["main".to_string(), "release".to_string()],
            repos: vec![url.to_string()],
            ssl_verify: true,
            ..RawOptions::default()
        })
        .unwrap();

        let report = check_repositories(&options, &provider, &AllAlive);
        assert!(report.ok);
        // The release branch does not exist: recoverable, one warning.
        assert!(
            report
                .lines
                .iter()
                .any(|l| l.contains("No branch \"release\""))
        );
    }

    #[test]
    fn validation_comments_lead_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let url = "https://git.example.com/one.git";
        let provider = Fixtures {
            repos: vec![(url.to_string(), dir.path().to_path_buf())],
        };
        let options = RunOptions::build(RawOptions {
            branches: vec!["main".to_string(), "bad branch".to_string()],
            repos: vec![url.to_string()],
            ssl_verify: true,
            ..RawOptions::default()
        })
        .unwrap();

        let report = check_repositories(&options, &provider, &AllAlive);
        assert!(report.lines[0].contains("Invalid branch name"));
    }
}
