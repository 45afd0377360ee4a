use std::path::Path;

use tempfile::TempDir;
use vfd_cli::cli::ReportArgs;
use vfd_cli::commands::run_report_command;

fn write_fixtures(dir: &Path) {
    std::fs::write(
        dir.join("VFD_PRICE_LAST.csv"),
        "Model Name,Qty owned,Total cost\n\
         fr-d720s-0.4k,3,300.00\n\
         FR-A840-11K,1,\"42,000\"\n\
         fr-e820-0.75k,0,100.00\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("VFD_PRICE_JULY_2025.csv"),
        "Model Name,1.27\nFR-E820-0.4K,1100\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("VFD_Price_SISL_Final.csv"),
        "Serial,Model Name,List Price\n1,FR-D720S-0.4K,120.00\n",
    )
    .unwrap();
}

fn args(data_dir: &Path, dry_run: bool) -> ReportArgs {
    ReportArgs {
        data_dir: data_dir.to_path_buf(),
        output_dir: None,
        inventory: None,
        secondary: None,
        list_price: None,
        dry_run,
        no_json: false,
    }
}

#[test]
fn report_command_writes_versioned_outputs() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let result = run_report_command(&args(dir.path(), false)).unwrap();
    assert_eq!(result.report.len(), 2);
    assert_eq!(result.report.total_qty, 4);

    let csv_path = result.csv_path.unwrap();
    assert!(csv_path.starts_with(dir.path().join("reports")));
    let name = csv_path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("SISL_VFD_PL_"));
    assert!(name.ends_with("_V.01.csv"));

    let text = std::fs::read_to_string(&csv_path).unwrap();
    // Ordered by capacity: the 0.4K drive precedes the 11K drive.
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].starts_with("1,FR-D720S-0.4K,3,120.00"));
    assert!(lines[2].starts_with("2,FR-A840-11K,1,"));

    assert!(result.json_path.unwrap().is_file());

    // A second run bumps the version instead of overwriting.
    let second = run_report_command(&args(dir.path(), false)).unwrap();
    let second_name = second.csv_path.unwrap();
    assert!(
        second_name
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .ends_with("_V.02.csv")
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    let result = run_report_command(&args(dir.path(), true)).unwrap();
    assert!(result.csv_path.is_none());
    assert!(result.json_path.is_none());
    assert!(!dir.path().join("reports").exists());
}

#[test]
fn missing_source_table_fails_before_processing() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    std::fs::remove_file(dir.path().join("VFD_Price_SISL_Final.csv")).unwrap();
    let error = run_report_command(&args(dir.path(), false)).unwrap_err();
    assert!(format!("{error:#}").contains("missing source table"));
}
