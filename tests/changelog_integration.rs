use relnotes::utils::testing::TestGitRepo;
use relnotes::{ChangelogBuilder, ChangelogConfig, GitOps, RelnotesConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn repo_with_commits(dir: &Path, messages: &[&str]) -> TestGitRepo {
    let repo = TestGitRepo::init(dir).unwrap();
    for (i, message) in messages.iter().enumerate() {
        repo.commit_file(&format!("file_{i}.txt"), message, message)
            .unwrap();
    }
    repo
}

fn section_headings(document: &str) -> Vec<String> {
    document
        .lines()
        .filter(|line| line.starts_with("## "))
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_generate_one_section_per_commit() {
    let temp_dir = TempDir::new().unwrap();
    repo_with_commits(temp_dir.path(), &["first", "second", "third"]);

    let config = ChangelogConfig::default();
    let report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();

    assert_eq!(report.sections, 3);
    assert_eq!(report.newest_version.as_ref().unwrap().to_string(), "1.0.2");

    let document = fs::read_to_string(&report.output_path).unwrap();
    let headings = section_headings(&document);
    assert_eq!(headings.len(), 3);

    // newest commit first, versions counting down to 1.0.0
    assert!(headings[0].starts_with("## 1.0.2 ("));
    assert!(headings[1].starts_with("## 1.0.1 ("));
    assert!(headings[2].starts_with("## 1.0.0 ("));

    // commit messages arrive as bulleted body lines
    assert!(document.contains("*      third"));
    assert!(document.contains("*      first"));
}

#[test]
fn test_merge_commits_lose_their_merge_line() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TestGitRepo::init(temp_dir.path()).unwrap();

    repo.commit_file("base.txt", "base", "base commit").unwrap();
    repo.create_branch("feature").unwrap();
    repo.checkout_branch("feature").unwrap();
    repo.commit_file("feature.txt", "feature", "feature work")
        .unwrap();
    repo.checkout_branch("main").unwrap();
    repo.merge_branch("feature", "merge feature work").unwrap();

    let config = ChangelogConfig::default();
    let report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();
    let document = fs::read_to_string(&report.output_path).unwrap();

    // base, feature work, merge commit
    assert_eq!(report.sections, 3);
    assert!(!document.contains("Merge:"));

    // the merge entry is the newest section and its heading carries a
    // real date, not the leftover merge metadata
    let headings = section_headings(&document);
    assert!(headings[0].starts_with("## 1.0.2 ("));
    let date = headings[0]
        .trim_start_matches("## 1.0.2 (")
        .trim_end_matches(')');
    assert!(!date.is_empty());
    assert!(!date.contains("Merge"));

    assert!(document.contains("*      merge feature work"));
}

#[test]
fn test_rerun_is_byte_identical_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    repo_with_commits(temp_dir.path(), &["one", "two"]);

    let config = ChangelogConfig::default();
    let first_report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();
    let first = fs::read(&first_report.output_path).unwrap();

    // clobber the output to prove the next run fully overwrites it
    fs::write(&first_report.output_path, "stale leftover content").unwrap();

    let second_report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();
    let second = fs::read(&second_report.output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report.bytes_written, second_report.bytes_written);
}

#[test]
fn test_asterisks_in_messages_are_defused() {
    let temp_dir = TempDir::new().unwrap();
    repo_with_commits(temp_dir.path(), &["add *important* flag"]);

    let config = ChangelogConfig::default();
    let report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();
    let document = fs::read_to_string(&report.output_path).unwrap();

    assert!(!document.contains("*important*"));
    assert!(document.contains("*      add  important  flag"));
}

#[test]
fn test_custom_output_file_name() {
    let temp_dir = TempDir::new().unwrap();
    repo_with_commits(temp_dir.path(), &["only change"]);

    let config = ChangelogConfig::default().output_file_name("HISTORY.md");
    let report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();

    assert!(report.output_path.ends_with("HISTORY.md"));
    assert!(report.output_path.exists());
    assert!(!temp_dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_config_file_controls_series_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let repo = repo_with_commits(temp_dir.path(), &["one", "two"]);

    repo.write_file(
        "relnotes.toml",
        "[changelog]\noutput_file_name = \"NOTES.md\"\nseries_major = 2\nseries_minor = 1\n",
    )
    .unwrap();

    let config = RelnotesConfig::load_or_default(temp_dir.path()).changelog;
    let report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();

    assert!(report.output_path.ends_with("NOTES.md"));
    let document = fs::read_to_string(&report.output_path).unwrap();
    let headings = section_headings(&document);
    assert!(headings[0].starts_with("## 2.1.1 ("));
    assert!(headings[1].starts_with("## 2.1.0 ("));
}

#[test]
fn test_preview_rendering_matches_written_file() {
    let temp_dir = TempDir::new().unwrap();
    repo_with_commits(temp_dir.path(), &["one", "two", "three"]);

    let config = ChangelogConfig::default();
    let report = ChangelogBuilder::build_from_repository(temp_dir.path(), &config).unwrap();
    let written = fs::read_to_string(&report.output_path).unwrap();

    let root = GitOps::detect_repository_root(temp_dir.path()).unwrap();
    let raw = GitOps::read_history_log(&root).unwrap();
    let rendered = ChangelogBuilder::render_from_text(&raw, &config)
        .unwrap()
        .render();

    assert_eq!(written, rendered);
}

#[test]
fn test_build_fails_outside_a_repository() {
    let temp_dir = TempDir::new().unwrap();

    let config = ChangelogConfig::default();
    let result = ChangelogBuilder::build_from_repository(temp_dir.path(), &config);
    assert!(result.is_err());
}

#[test]
fn test_build_fails_on_empty_history() {
    let temp_dir = TempDir::new().unwrap();
    TestGitRepo::init(temp_dir.path()).unwrap();

    // a repository with no commits makes the history command exit non-zero
    let config = ChangelogConfig::default();
    let result = ChangelogBuilder::build_from_repository(temp_dir.path(), &config);
    assert!(result.is_err());
}
