//! DashboardRuntime: configuration plus the validated, read-only dataset.
//!
//! The dataset is loaded and validated once. Every render filters the same
//! records, so repeated selections never re-read the file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use sentiboard_analysis::aggregation::date_bounds;
use sentiboard_analysis::{DashboardPipeline, DataQualityReport, PipelineConfig, RecordValidator};
use sentiboard_core::config::DashboardConfig;
use sentiboard_core::errors::{ConfigError, LoadError};
use sentiboard_core::types::{DateRange, ReviewRecord};
use sentiboard_storage::{ColumnSpec, CsvReviewSource};

use crate::charts::{ChartId, Palette};
use crate::error_codes;
use crate::formats::FormatError;
use crate::report::DashboardReport;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Format(#[from] FormatError),
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => error_codes::CONFIG_ERROR,
            Self::Load(_) => error_codes::LOAD_ERROR,
            Self::Format(_) => error_codes::FORMAT_ERROR,
        }
    }

    pub fn exit_code(&self) -> u8 {
        error_codes::exit_code(self.code())
    }
}

/// Options for building the runtime.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Input CSV. Overrides `[data] path` from the config.
    pub data_path: Option<PathBuf>,
    /// Directory searched for `sentiboard.toml`, and the base for a relative
    /// default data path. Defaults to the current directory.
    pub project_root: Option<PathBuf>,
    /// Explicit config file. Must exist when given.
    pub config_path: Option<PathBuf>,
    /// Inline TOML. Takes precedence over any config file.
    pub config_toml: Option<String>,
}

/// Validated records and what validation dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub source: PathBuf,
    pub records: Vec<ReviewRecord>,
    pub quality: DataQualityReport,
    /// Earliest and latest review dates, `None` for an empty dataset.
    pub bounds: Option<DateRange>,
}

impl Dataset {
    pub fn new(source: PathBuf, records: Vec<ReviewRecord>, quality: DataQualityReport) -> Self {
        let bounds = date_bounds(&records);
        Self {
            source,
            records,
            quality,
            bounds,
        }
    }
}

pub struct DashboardRuntime {
    pub config: DashboardConfig,
    dataset: Arc<Dataset>,
    pipeline: DashboardPipeline,
    palette: Palette,
}

impl DashboardRuntime {
    /// Resolve config, read the CSV, and validate every row.
    pub fn new(opts: RuntimeOptions) -> Result<Self, RuntimeError> {
        let root = opts
            .project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config = match &opts.config_toml {
            Some(toml_str) => DashboardConfig::from_toml(toml_str)?,
            None => DashboardConfig::load(&root, opts.config_path.as_deref())?,
        };

        let data_path = resolve_data_path(&root, opts.data_path.as_deref(), &config);
        let source = CsvReviewSource::new(&data_path, ColumnSpec::from(&config.data));
        let rows = source.load()?;

        let validator = RecordValidator::new(config.data.effective_date_format());
        let batch = validator.validate(&rows);
        let dataset = Dataset::new(data_path, batch.records, batch.report);

        tracing::info!(
            source = %dataset.source.display(),
            records = dataset.records.len(),
            excluded = dataset.quality.excluded(),
            "dataset loaded"
        );

        Ok(Self::with_dataset(config, dataset))
    }

    /// Build a runtime over an already-validated dataset.
    pub fn with_dataset(config: DashboardConfig, dataset: Dataset) -> Self {
        let pipeline = DashboardPipeline::new(PipelineConfig::from(&config));
        let palette = Palette::from_config(&config.palette);
        Self {
            config,
            dataset: Arc::new(dataset),
            pipeline,
            palette,
        }
    }

    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Fill missing endpoints from the dataset's bounds. `None` only when
    /// an endpoint is missing and the dataset is empty.
    pub fn resolve_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<DateRange> {
        match (from, to) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => {
                let bounds = self.dataset.bounds?;
                Some(DateRange::new(
                    from.unwrap_or(bounds.start),
                    to.unwrap_or(bounds.end),
                ))
            }
        }
    }

    /// Aggregate the selection and assemble the report.
    pub fn render(&self, range: Option<DateRange>, charts: &[ChartId]) -> DashboardReport {
        let Some(range) = range else {
            return DashboardReport::no_data(&self.dataset.quality);
        };
        let series = self.pipeline.run(&self.dataset.records, range);
        DashboardReport::build(&series, &self.dataset.quality, &self.palette, charts)
    }
}

fn resolve_data_path(root: &Path, explicit: Option<&Path>, config: &DashboardConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let path = config.data.effective_path();
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "\
reviewTime,overall,sentiment,deberta_topics
2023-01-05,5,positive,Price
2023-01-20,1,negative,Price
2023-02-01,4,positive,Quality
not-a-date,3,neutral,Price
2023-02-02,2,mixed,Quality
";

    fn write_csv(dir: &Path) -> PathBuf {
        let path = dir.join("reviews.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        path
    }

    fn runtime(dir: &Path) -> DashboardRuntime {
        DashboardRuntime::new(RuntimeOptions {
            data_path: Some(write_csv(dir)),
            project_root: Some(dir.to_path_buf()),
            ..RuntimeOptions::default()
        })
        .unwrap()
    }

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, day).unwrap()
    }

    #[test]
    fn test_new_loads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let rt = runtime(dir.path());
        let dataset = rt.dataset();
        assert_eq!(dataset.records.len(), 3);
        assert_eq!(dataset.quality.total_rows, 5);
        assert_eq!(dataset.quality.malformed_dates, 1);
        assert_eq!(dataset.quality.unknown_sentiments, 1);
        assert_eq!(dataset.bounds, Some(DateRange::new(d(1, 5), d(2, 1))));
    }

    #[test]
    fn test_stray_bytes_drop_only_the_affected_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        let mut csv = b"reviewTime,overall,reviewText,sentiment,deberta_topics\n".to_vec();
        csv.extend_from_slice(b"2023-01-05,5,caf\xe9,positive,Price\n");
        csv.extend_from_slice(b"2023-01-06,3,ok,neutr\xe9l,Price\n");
        csv.extend_from_slice(b"2023-01-07,1,bad,negative,Quality\n");
        std::fs::write(&path, csv).unwrap();

        let rt = DashboardRuntime::new(RuntimeOptions {
            data_path: Some(path),
            project_root: Some(dir.path().to_path_buf()),
            ..RuntimeOptions::default()
        })
        .unwrap();
        let dataset = rt.dataset();
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.quality.total_rows, 3);
        assert_eq!(dataset.quality.unknown_sentiments, 1);
        assert_eq!(dataset.quality.issues[0].row(), 2);
    }

    #[test]
    fn test_default_data_path_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::rename(write_csv(dir.path()), dir.path().join("topics_classified.csv")).unwrap();
        let rt = DashboardRuntime::new(RuntimeOptions {
            project_root: Some(dir.path().to_path_buf()),
            ..RuntimeOptions::default()
        })
        .unwrap();
        assert_eq!(rt.dataset().records.len(), 3);
    }

    #[test]
    fn test_missing_data_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardRuntime::new(RuntimeOptions {
            data_path: Some(dir.path().join("absent.csv")),
            ..RuntimeOptions::default()
        })
        .err()
        .unwrap();
        assert_eq!(err.code(), error_codes::LOAD_ERROR);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_bad_inline_config_is_config_error() {
        let err = DashboardRuntime::new(RuntimeOptions {
            config_toml: Some("[pipeline]\ntopic_order = [\"Weather\"]\n".to_string()),
            ..RuntimeOptions::default()
        })
        .err()
        .unwrap();
        assert_eq!(err.code(), error_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_resolve_range_defaults_to_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let rt = runtime(dir.path());
        assert_eq!(
            rt.resolve_range(None, None),
            Some(DateRange::new(d(1, 5), d(2, 1)))
        );
        assert_eq!(
            rt.resolve_range(Some(d(1, 10)), None),
            Some(DateRange::new(d(1, 10), d(2, 1)))
        );
    }

    #[test]
    fn test_resolve_range_on_empty_dataset() {
        let rt = DashboardRuntime::with_dataset(
            DashboardConfig::default(),
            Dataset::new(PathBuf::from("empty.csv"), Vec::new(), DataQualityReport::default()),
        );
        assert_eq!(rt.resolve_range(None, Some(d(1, 1))), None);
        assert_eq!(
            rt.resolve_range(Some(d(1, 1)), Some(d(1, 2))),
            Some(DateRange::new(d(1, 1), d(1, 2)))
        );
        assert!(rt.render(None, &[]).empty);
    }

    #[test]
    fn test_render_selection() {
        let dir = tempfile::tempdir().unwrap();
        let rt = runtime(dir.path());

        let january = rt.render(Some(DateRange::new(d(1, 1), d(1, 31))), &[]);
        assert!(!january.empty);
        assert_eq!(january.kpis[0].display_value(), "2");
        assert_eq!(january.kpis[2].display_value(), "2");

        let none = rt.render(Some(DateRange::new(d(3, 1), d(3, 31))), &[]);
        assert!(none.empty);

        let inverted = rt.render(Some(DateRange::new(d(2, 1), d(1, 1))), &[]);
        assert!(inverted.empty);
    }
}
