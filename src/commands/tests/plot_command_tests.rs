use crate::commands::{Command, PlotCommand};
use crate::config::Settings;
use crate::records::{ResultsFile, TimingResult};

#[test]
fn test_plots_every_variant() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.results_dir = dir.path().join("results");
    settings.plots_dir = dir.path().join("plots");
    std::fs::create_dir_all(&settings.results_dir).unwrap();

    let mut results = ResultsFile::new();
    results.insert(
        "a",
        TimingResult { cog_time: 0.5, nitf_time: 1.5, nitf_filesize: 2048, has_identical_pixels: true },
    );
    for access in settings.selected_profiles().unwrap() {
        results.save(&settings.results_dir.join(access.results_file_name())).unwrap();
    }

    let command = PlotCommand::from_settings(&settings);
    let written = command.plot_all().unwrap();
    assert_eq!(written.len(), 2);
    assert!(settings.plots_dir.join("chipping_times_comparison.svg").exists());
    assert!(settings
        .plots_dir
        .join("nitf_filesize_vs_chipping_time_with_vsil_curl_chunk_size.svg")
        .exists());
    command.execute().unwrap();
}

#[test]
fn test_missing_results_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.results_dir = dir.path().to_path_buf();
    settings.plots_dir = dir.path().to_path_buf();
    assert!(PlotCommand::from_settings(&settings).plot_all().is_err());
}
