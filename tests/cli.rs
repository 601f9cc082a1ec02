use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;


fn sabg() -> Command {
    let mut cmd = Command::cargo_bin("sabg").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}


#[test]
fn sections_lists_all_slugs() {
    sabg()
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("opportunities"))
        .stdout(predicate::str::contains("ai-guide"))
        .stdout(predicate::str::contains("Business Formation Process"))
        .stdout(predicate::str::contains("About This Guide"));
}


#[test]
fn sections_colored_without_no_color() {
    let mut cmd = Command::cargo_bin("sabg").unwrap();
    cmd.env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[36mopportunities "))
        .stdout(predicate::str::contains("\x1b[36mai-guide      \x1b[0m"));
}


#[test]
fn no_color_flag_and_falsey_env() {
    let mut cmd = Command::cargo_bin("sabg").unwrap();
    cmd.env("NO_COLOR", "true")
        .args(["sections", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());

    let mut cmd = Command::cargo_bin("sabg").unwrap();
    cmd.env("NO_COLOR", "")
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[36m"));
}


#[test]
fn no_subcommand_prints_intro_and_help() {
    sabg()
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting Businesses in South Africa with Replit AI"))
        .stdout(predicate::str::contains("Usage:"));
}


#[test]
fn show_renders_page_without_escapes() {
    sabg()
        .args(["show", "opportunities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Business Opportunities in South Africa"))
        .stdout(predicate::str::contains("Business Opportunity Analysis by Category"))
        .stdout(predicate::str::contains("\x1b[").not());
}


#[test]
fn show_formation_with_structure_and_progress() {
    sabg()
        .args(["show", "formation", "--structure", "trust", "--completed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trust"))
        .stdout(predicate::str::contains("3 of 8 registration steps completed"));
}


#[test]
fn show_unknown_section_fails() {
    sabg()
        .args(["show", "pricing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown section 'pricing'"))
        .stderr(predicate::str::contains("formation"));
}


#[test]
fn show_unknown_structure_lists_choices() {
    sabg()
        .args(["show", "formation", "--structure", "llc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pty-ltd"));
}


#[test]
fn feedback_from_argument_and_stdin() {
    sabg()
        .args(["feedback", "More fintech examples please"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for your feedback!"));

    sabg()
        .arg("feedback")
        .write_stdin("great guide\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("We'll use it to improve the guide."));
}


#[test]
fn chart_json_describes_chart() {
    sabg()
        .args(["chart", "opportunity", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""geometry": "scatter""#))
        .stdout(predicate::str::contains(r#""size_max": 60.0"#))
        .stdout(predicate::str::contains("Market Size (Billions ZAR)"));
}


#[test]
fn chart_svg_to_explicit_path() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("timeline.svg");

    sabg()
        .args(["chart", "timeline", "--svg", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Estimated Business Formation Timeline"));
}


#[test]
fn chart_defaults_to_export_dir() {
    let tmp_dir = TempDir::new().unwrap();

    sabg()
        .env("SABG_EXPORT_DIR", tmp_dir.path())
        .args(["chart", "hubs", "--svg"])
        .assert()
        .success();

    let exported: Vec<_> = std::fs::read_dir(tmp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("sabg-hubs-"));
    assert!(exported[0].ends_with(".svg"));
}


#[test]
fn chart_unknown_name_fails() {
    sabg()
        .args(["chart", "revenue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid charts"));
}


#[test]
fn browse_refuses_without_terminal() {
    sabg()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
