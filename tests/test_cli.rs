/// End-to-end tests for the command-line binaries
///
/// Checks output layout, usage errors on malformed arguments, and the
/// union-find client reading from a file.
use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn percolation_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_percolation"))
}

fn parse_value(line: &str) -> f64 {
    line.split('=').nth(1).unwrap().trim().parse().unwrap()
}

#[test]
fn test_stats_output_format() -> Result<()> {
    let output = percolation_bin()
        .args(["20", "50", "--seed", "11", "--threads", "2", "--quiet"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected output: {stdout}");
    assert!(lines[0].starts_with("mean                    = "));
    assert!(lines[1].starts_with("stddev                  = "));
    assert!(lines[2].starts_with("95% confidence interval = "));

    let mean = parse_value(lines[0]);
    assert!((0.5..0.7).contains(&mean), "mean {mean}");

    let bounds: Vec<f64> = lines[2]
        .split('=')
        .nth(1)
        .unwrap()
        .split(',')
        .map(|s| s.trim().parse().unwrap())
        .collect();
    assert_eq!(bounds.len(), 2);
    assert!(bounds[0] < mean && mean < bounds[1]);

    Ok(())
}

#[test]
fn test_seeded_output_independent_of_threads() -> Result<()> {
    let one = percolation_bin()
        .args(["10", "20", "--seed", "5", "--threads", "1", "--quiet"])
        .output()?;
    let four = percolation_bin()
        .args(["10", "20", "--seed", "5", "--threads", "4", "--quiet"])
        .output()?;
    assert!(one.status.success() && four.status.success());
    assert_eq!(one.stdout, four.stdout);
    Ok(())
}

#[test]
fn test_missing_arguments_print_usage() -> Result<()> {
    for args in [vec![], vec!["20"]] {
        let output = percolation_bin().args(&args).output()?;
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "expected usage message, got: {stderr}");
    }
    Ok(())
}

#[test]
fn test_malformed_arguments_print_usage() -> Result<()> {
    for args in [vec!["twenty", "10"], vec!["20", "ten"], vec!["20", "-3"], vec!["2.5", "10"]] {
        let output = percolation_bin().args(&args).output()?;
        assert!(!output.status.success(), "{args:?} should be rejected");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage:"), "{args:?}: expected usage message, got: {stderr}");
        assert!(stderr.contains("<GRID_SIZE> <TRIALS>"), "got: {stderr}");
    }
    Ok(())
}

#[test]
fn test_zero_arguments_print_usage() -> Result<()> {
    for args in [["10", "0"], ["0", "5"]] {
        let output = percolation_bin().args(args).arg("--quiet").output()?;
        assert!(!output.status.success(), "{args:?} should be rejected");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("must be at least 1"), "got: {stderr}");
        assert!(stderr.contains("Usage:"), "expected usage message, got: {stderr}");
        assert!(!stderr.contains("Simulation failed"), "got: {stderr}");
    }
    Ok(())
}

#[test]
fn test_help_still_succeeds() -> Result<()> {
    let output = percolation_bin().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "got: {stdout}");
    Ok(())
}

#[test]
fn test_ufclient_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("tiny_uf.txt");
    fs::write(&input, "10\n4 3\n3 8\n6 5\n9 4\n2 1\n8 9\n5 0\n7 2\n6 1\n1 0\n6 7\n")?;

    let output = Command::new(env!("CARGO_BIN_EXE_ufclient"))
        .args(["-i", input.to_str().unwrap()])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 9);
    assert_eq!(stdout.lines().last(), Some("2 components"));
    Ok(())
}

#[test]
fn test_ufclient_rejects_out_of_range() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("bad_uf.txt");
    fs::write(&input, "3\n0 1\n1 3\n")?;

    let output = Command::new(env!("CARGO_BIN_EXE_ufclient"))
        .args(["-i", input.to_str().unwrap()])
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "got: {stderr}");
    Ok(())
}
