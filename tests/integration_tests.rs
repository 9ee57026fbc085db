use std::process::Command;

/// Helper function to run gnuggplot and return (stdout, stderr) on success
fn run_gnuggplot(args: &[&str]) -> Result<(String, String), String> {
    let output = Command::new(env!("CARGO_BIN_EXE_gnuggplot"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .map_err(|e| format!("Failed to spawn process: {}", e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if output.status.success() {
        Ok((stdout, stderr))
    } else {
        Err(stderr)
    }
}

fn dry_run(args: &[&str]) -> Result<(String, String), String> {
    let mut full = vec!["--dry-run"];
    full.extend_from_slice(args);
    run_gnuggplot(&full)
}

#[test]
fn test_end_to_end_global_and_point() {
    let (script, stderr) = dry_run(&[
        "-G", "data.dat", "-x", "1", "-P", "", "-y", "3", "-s", "7", "-c", "black",
    ])
    .unwrap();
    assert_eq!(
        script,
        "set datafile separator ' '\n\
         plot 'data.dat' using 1:3 with points pointtype 7 pointsize 1 linecolor rgb 'black' notitle\n"
    );
    assert!(!stderr.contains("WARN"), "unexpected warnings: {}", stderr);
}

#[test]
fn test_end_to_end_inline_data() {
    let (script, _) = dry_run(&["-L", "-", "-x", "1,2,3", "-y", "4,5,6", "-c", "red", "-l", "squares"]).unwrap();
    assert_eq!(
        script,
        "plot '-' with lines linetype 1 linewidth 1 linecolor rgb 'red' title 'squares'\n\
         1 4\n\
         2 5\n\
         3 6\n\
         e\n"
    );
}

#[test]
fn test_end_to_end_layers_in_order() {
    let (script, _) = dry_run(&[
        "--point", "a.dat", "--color=blue",
        "--bar", "b.dat", "-y", "price", "--fill", "gray",
        "--labs", "--title", "Prices", "-x", "day",
        "--theme", "--legend_position", "bottom",
    ])
    .unwrap();
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(
        lines,
        vec![
            "set style fill solid",
            "set boxwidth 0.8 relative",
            "set title 'Prices'",
            "set xlabel 'day'",
            "set ylabel 'y'",
            "set key outside center bottom vertical",
            "plot 'a.dat' using 1:1 with points pointtype 8 pointsize 1 linecolor rgb 'blue' notitle, \
             'b.dat' using 1:'price' with boxes fillstyle solid linecolor rgb 'gray' notitle",
        ]
    );
}

#[test]
fn test_end_to_end_invalid_legend_position() {
    let (script, stderr) = dry_run(&["-P", "a.dat", "--theme", "--legend_position", "diagonal"]).unwrap();
    assert!(script.starts_with("set key off\n"));
    assert!(stderr.contains("invalid legend position 'diagonal'"));
}

#[test]
fn test_end_to_end_inline_global_layer() {
    let (script, stderr) = dry_run(&["-G", "-", "-P", "", "-y", "2"]).unwrap();
    assert!(stderr.contains("cannot use inline data"));
    assert!(stderr.contains("no global data set"));
    assert_eq!(
        script,
        "set datafile separator ' '\n\
         plot '' using 1:2 with points pointtype 1 pointsize 1 linecolor rgb 'black' notitle\n"
    );
    assert!(!script.lines().any(|l| l == "e"));
    assert!(!stderr.contains("not a number"));
}

#[test]
fn test_end_to_end_duplicate_bar_settings() {
    let (script, stderr) = dry_run(&["-B", "a.dat", "-B", "b.dat", "--width", "0.3"]).unwrap();
    assert_eq!(script.matches("set boxwidth 0.8 relative\n").count(), 2);
    assert!(stderr.contains("key 'width' already set"));
}

#[test]
fn test_end_to_end_global_not_first() {
    let result = dry_run(&["-P", "a.dat", "-G", "a.dat"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("must come first"));
}

#[test]
fn test_end_to_end_unknown_option() {
    let result = dry_run(&["-P", "a.dat", "--violin", "x"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("unknown option '--violin'"));
}

#[test]
fn test_end_to_end_nothing_to_plot() {
    let result = dry_run(&["--labs", "--title", "Empty"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Nothing to plot"));

    let result = dry_run(&[]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No layers given"));
}

#[test]
fn test_end_to_end_missing_plotter() {
    let result = run_gnuggplot(&["--gnuplot", "gnuggplot-no-such-program", "-P", "a.dat"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Could not open pipe to 'gnuggplot-no-such-program'"));
}

#[test]
fn test_end_to_end_bad_config() {
    let result = run_gnuggplot(&["--config", "/nonexistent/gnuggplot.json", "--dry-run", "-P", "a.dat"]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to read config file"));
}
