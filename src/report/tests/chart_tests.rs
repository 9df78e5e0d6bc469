use crate::records::{ResultsFile, TimingResult};
use crate::report::{render_size_vs_time, render_timing_bars, write_plots, PlotPaths};

fn sample_results() -> ResultsFile {
    let mut results = ResultsFile::new();
    results.insert(
        "img_a",
        TimingResult { cog_time: 0.4, nitf_time: 1.2, nitf_filesize: 10 * 1024 * 1024, has_identical_pixels: true },
    );
    results.insert(
        "img<b>",
        TimingResult { cog_time: 0.3, nitf_time: 2.5, nitf_filesize: 30 * 1024 * 1024, has_identical_pixels: false },
    );
    results
}

#[test]
fn test_bar_chart_contents() {
    let svg = render_timing_bars(&sample_results()).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("COG vs NITF Chipping Times"));
    assert!(svg.contains("Chipping Time (seconds)"));
    assert!(svg.contains("img_a"));
    // Labels are escaped
    assert!(svg.contains("img&lt;b&gt;"));
    // Two bars per file plus two legend swatches
    assert_eq!(svg.matches("fill=\"#1f77b4\"").count(), 3);
    assert_eq!(svg.matches("fill=\"#ff7f0e\"").count(), 3);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_scatter_has_trend_line() {
    let svg = render_size_vs_time(&sample_results()).unwrap();
    assert!(svg.contains("NITF File Size vs Chipping Time"));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("Trend: y = "));
}

#[test]
fn test_scatter_without_trend_for_single_point() {
    let mut results = ResultsFile::new();
    results.insert(
        "only",
        TimingResult { cog_time: 0.1, nitf_time: 0.2, nitf_filesize: 1024, has_identical_pixels: true },
    );
    let svg = render_size_vs_time(&results).unwrap();
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(!svg.contains("stroke-dasharray"));
}

#[test]
fn test_empty_results_still_render() {
    let results = ResultsFile::new();
    assert!(render_timing_bars(&results).unwrap().contains("</svg>"));
    assert!(render_size_vs_time(&results).unwrap().contains("</svg>"));
}

#[test]
fn test_write_plots_uses_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_plots(&sample_results(), dir.path(), "_with_vsil_curl_chunk_size").unwrap();
    assert_eq!(paths, PlotPaths::for_suffix(dir.path(), "_with_vsil_curl_chunk_size"));
    assert!(paths
        .timings
        .ends_with("chipping_times_comparison_with_vsil_curl_chunk_size.svg"));
    assert!(paths.timings.exists());
    assert!(paths.size_vs_time.exists());
}
