use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use annals_cli::Args;

/// Directory holding the bundled datasets
fn datasets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../datasets")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        seed: Some(7),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_datasets() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_datasets = collect_json_files(datasets_dir());

    assert!(
        !valid_datasets.is_empty(),
        "No valid datasets found in datasets/"
    );

    let mut failed_datasets = Vec::new();

    for dataset_path in &valid_datasets {
        let output_filename = format!(
            "{}.layout.json",
            dataset_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match annals_cli::run(&args_for(dataset_path, &output_path)) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).expect("Output was not written");
                assert!(
                    written.contains("\"adjacency\""),
                    "{} produced no adjacency matrix",
                    dataset_path.display()
                );
            }
            Err(e) => failed_datasets.push((dataset_path.clone(), e)),
        }
    }

    if !failed_datasets.is_empty() {
        eprintln!("\nValid datasets that failed:");
        for (path, err) in &failed_datasets {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid dataset(s) failed unexpectedly",
            failed_datasets.len()
        );
    }

    println!("✅ All {} valid datasets passed", valid_datasets.len());
}

#[test]
fn e2e_smoke_test_error_datasets() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_datasets = collect_json_files(datasets_dir().join("errors"));

    assert!(
        !error_datasets.is_empty(),
        "No error datasets found in datasets/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for dataset_path in &error_datasets {
        let output_filename = format!(
            "error_{}.layout.json",
            dataset_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if annals_cli::run(&args_for(dataset_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(dataset_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError datasets that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error dataset(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error datasets failed as expected",
        error_datasets.len()
    );
}

#[test]
fn e2e_same_seed_same_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = datasets_dir().join("star_network.json");
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    annals_cli::run(&args_for(&input, &first)).expect("First run failed");
    annals_cli::run(&args_for(&input, &second)).expect("Second run failed");

    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.json");
    let output = temp_dir.path().join("out.json");

    let result = annals_cli::run(&args_for(&input, &output));
    assert!(matches!(result, Err(annals::AnnalsError::Io(_))));
    assert!(!output.exists());
}
