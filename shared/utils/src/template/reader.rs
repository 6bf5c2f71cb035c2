//! Template Reader
//!
//! One read operation per resource kind. Every operation selects its sheet
//! afresh from the given source and walks it independently.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;
use vp_models::{
    Biobank, Dataset, Distribution, Organisation, PatientRegistry, ResourceType,
    DEFAULT_DATASET_LANGUAGE, DEFAULT_DATASET_VERSION,
};

use super::source::WorkbookSource;
use super::walker::{walk_rows, SheetRow};
use crate::config::TemplateConfig;
use crate::error::TemplateResult;

/// Sheet names in the resource metadata template
pub mod sheets {
    pub const ORGANISATION: &str = "Organisation";
    pub const BIOBANK_PATIENT_REGISTRY: &str = "BiobankPatientRegistry";
    pub const DATASET: &str = "Dataset";
    pub const DISTRIBUTION: &str = "Distribution";
}

/// Column indices per sheet
mod cols {
    pub mod organisation {
        pub const TITLE: usize = 0;
        pub const DESCRIPTION: usize = 1;
        pub const PAGES: usize = 2;
        pub const LOCATION_TITLE: usize = 3;
        pub const LOCATION_DESCRIPTION: usize = 4;
    }

    pub mod resource {
        pub const TITLE: usize = 0;
        pub const DESCRIPTION: usize = 1;
        pub const POPULATION_COVERAGE: usize = 2;
        pub const THEMES: usize = 3;
        pub const PUBLISHER_NAME: usize = 4;
        pub const PAGES: usize = 5;
        pub const RESOURCE_TYPE: usize = 6;
    }

    pub mod dataset {
        pub const TITLE: usize = 0;
        pub const DESCRIPTION: usize = 1;
        pub const THEMES: usize = 2;
        pub const VP_CONNECTION: usize = 3;
        pub const LICENSE: usize = 4;
        pub const RELATED: usize = 5;
        pub const VERSION: usize = 6;
        pub const KEYWORDS: usize = 7;
        pub const PUBLISHER_NAME: usize = 8;
        pub const PAGE: usize = 9;
    }

    pub mod distribution {
        pub const TITLE: usize = 0;
        pub const DATASET_TITLE: usize = 1;
        pub const DESCRIPTION: usize = 2;
        pub const URL: usize = 3;
        pub const URL_TYPE: usize = 4;
        pub const LICENSE: usize = 5;
        pub const VERSION: usize = 6;
        pub const MEDIA_TYPE: usize = 7;
        pub const PUBLISHER_NAME: usize = 8;
        pub const IS_PART_OF: usize = 9;
    }
}

/// Every record kind read from one template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateContents {
    pub organisations: IndexMap<String, Organisation>,
    pub biobanks: IndexMap<String, Biobank>,
    pub patient_registries: IndexMap<String, PatientRegistry>,
    pub datasets: IndexMap<String, Dataset>,
    pub distributions: IndexMap<String, Distribution>,
}

impl TemplateContents {
    pub fn total_records(&self) -> usize {
        self.organisations.len()
            + self.biobanks.len()
            + self.patient_registries.len()
            + self.datasets.len()
            + self.distributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

/// Fields shared by biobanks and patient registries.
struct ResourceRow {
    title: String,
    description: Option<String>,
    population_coverage: Option<String>,
    themes: Vec<String>,
    publisher_name: Option<String>,
    pages: Vec<String>,
}

impl ResourceRow {
    fn resource_type(row: &SheetRow<'_>) -> TemplateResult<Option<ResourceType>> {
        Ok(row
            .text(cols::resource::RESOURCE_TYPE)?
            .as_deref()
            .and_then(ResourceType::from_label))
    }

    fn extract(row: &SheetRow<'_>, title: &str) -> TemplateResult<Self> {
        use cols::resource::*;

        Ok(Self {
            title: title.to_string(),
            description: row.text(DESCRIPTION)?,
            population_coverage: row.text(POPULATION_COVERAGE)?,
            themes: row.list(THEMES)?,
            publisher_name: row.text(PUBLISHER_NAME)?,
            pages: row.list(PAGES)?,
        })
    }
}

/// Maps template sheets onto records.
#[derive(Debug, Clone)]
pub struct TemplateReader {
    catalog_url: String,
}

impl TemplateReader {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
        }
    }

    pub fn from_config(config: &TemplateConfig) -> Self {
        Self::new(config.catalog_url.clone())
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn read_organisations<S>(&self, source: &mut S) -> TemplateResult<IndexMap<String, Organisation>>
    where
        S: WorkbookSource + ?Sized,
    {
        use cols::organisation::*;

        self.read_sheet(source, sheets::ORGANISATION, TITLE, |row, title| {
            Ok(Some(Organisation {
                catalog_url: self.catalog_url.clone(),
                title: title.to_string(),
                description: row.text(DESCRIPTION)?,
                pages: row.list(PAGES)?,
                location_title: row.text(LOCATION_TITLE)?,
                location_description: row.text(LOCATION_DESCRIPTION)?,
            }))
        })
    }

    pub fn read_biobanks<S>(&self, source: &mut S) -> TemplateResult<IndexMap<String, Biobank>>
    where
        S: WorkbookSource + ?Sized,
    {
        self.read_resources(source, Biobank::RESOURCE_TYPE, |resource| Biobank {
            catalog_url: self.catalog_url.clone(),
            title: resource.title,
            description: resource.description,
            population_coverage: resource.population_coverage,
            themes: resource.themes,
            publisher_name: resource.publisher_name,
            pages: resource.pages,
        })
    }

    pub fn read_patient_registries<S>(
        &self,
        source: &mut S,
    ) -> TemplateResult<IndexMap<String, PatientRegistry>>
    where
        S: WorkbookSource + ?Sized,
    {
        self.read_resources(source, PatientRegistry::RESOURCE_TYPE, |resource| PatientRegistry {
            catalog_url: self.catalog_url.clone(),
            title: resource.title,
            description: resource.description,
            population_coverage: resource.population_coverage,
            themes: resource.themes,
            publisher_name: resource.publisher_name,
            pages: resource.pages,
        })
    }

    pub fn read_datasets<S>(&self, source: &mut S) -> TemplateResult<IndexMap<String, Dataset>>
    where
        S: WorkbookSource + ?Sized,
    {
        use cols::dataset::*;

        self.read_sheet(source, sheets::DATASET, TITLE, |row, title| {
            Ok(Some(Dataset {
                catalog_url: self.catalog_url.clone(),
                title: title.to_string(),
                description: row.text(DESCRIPTION)?,
                themes: row.list(THEMES)?,
                vp_connection: row.text(VP_CONNECTION)?,
                license: row.text(LICENSE)?,
                related: row.list(RELATED)?,
                version: row
                    .text(VERSION)?
                    .unwrap_or_else(|| DEFAULT_DATASET_VERSION.to_string()),
                keywords: row.list(KEYWORDS)?,
                publisher_name: row.text(PUBLISHER_NAME)?,
                language: DEFAULT_DATASET_LANGUAGE.to_string(),
                page: row.text(PAGE)?,
            }))
        })
    }

    pub fn read_distributions<S>(&self, source: &mut S) -> TemplateResult<IndexMap<String, Distribution>>
    where
        S: WorkbookSource + ?Sized,
    {
        use cols::distribution::*;

        self.read_sheet(source, sheets::DISTRIBUTION, TITLE, |row, title| {
            Ok(Some(Distribution {
                title: title.to_string(),
                dataset_title: row.text(DATASET_TITLE)?,
                description: row.text(DESCRIPTION)?,
                url: row.text(URL)?,
                url_type: row.text(URL_TYPE)?,
                license: row.text(LICENSE)?,
                version: row.text(VERSION)?,
                media_type: row.text(MEDIA_TYPE)?,
                publisher_name: row.text(PUBLISHER_NAME)?,
                is_part_of: row.list(IS_PART_OF)?,
            }))
        })
    }

    /// Read every sheet of the template. Stops at the first sheet that fails.
    pub fn read_all<S>(&self, source: &mut S) -> TemplateResult<TemplateContents>
    where
        S: WorkbookSource + ?Sized,
    {
        Ok(TemplateContents {
            organisations: self.read_organisations(source)?,
            biobanks: self.read_biobanks(source)?,
            patient_registries: self.read_patient_registries(source)?,
            datasets: self.read_datasets(source)?,
            distributions: self.read_distributions(source)?,
        })
    }

    fn read_resources<S, T, F>(
        &self,
        source: &mut S,
        wanted: ResourceType,
        build: F,
    ) -> TemplateResult<IndexMap<String, T>>
    where
        S: WorkbookSource + ?Sized,
        F: Fn(ResourceRow) -> T,
    {
        self.read_sheet(
            source,
            sheets::BIOBANK_PATIENT_REGISTRY,
            cols::resource::TITLE,
            |row, title| {
                // Rows of the other kind are never looked at past the discriminator
                if ResourceRow::resource_type(row)? != Some(wanted) {
                    return Ok(None);
                }
                Ok(Some(build(ResourceRow::extract(row, title)?)))
            },
        )
    }

    fn read_sheet<S, T, F>(
        &self,
        source: &mut S,
        sheet: &str,
        title_column: usize,
        build: F,
    ) -> TemplateResult<IndexMap<String, T>>
    where
        S: WorkbookSource + ?Sized,
        F: FnMut(&SheetRow<'_>, &str) -> TemplateResult<Option<T>>,
    {
        let range = source.worksheet(sheet)?;
        let records = walk_rows(sheet, &range, title_column, build)?;

        info!(sheet, records = records.len(), "Read template sheet");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use crate::template::source::InMemoryWorkbook;
    use calamine::DataType;

    const CATALOG_URL: &str = "http://localhost:8080";

    fn text(value: &str) -> DataType {
        DataType::String(value.to_string())
    }

    fn row(values: &[Option<&str>]) -> Vec<DataType> {
        values
            .iter()
            .map(|value| value.map(text).unwrap_or(DataType::Empty))
            .collect()
    }

    fn header(width: usize) -> Vec<DataType> {
        (0..width).map(|i| text(&format!("column {}", i))).collect()
    }

    fn reader() -> TemplateReader {
        TemplateReader::new(CATALOG_URL)
    }

    fn resource_workbook() -> InMemoryWorkbook {
        InMemoryWorkbook::new().with_sheet(sheets::BIOBANK_PATIENT_REGISTRY, resource_rows())
    }

    fn resource_rows() -> Vec<Vec<DataType>> {
        vec![
            header(7),
            row(&[
                Some("Bio A"),
                Some("A biobank"),
                Some("Europe"),
                Some("theme1; theme2"),
                Some("Org A"),
                Some("https://a.example.org"),
                Some("Biobank"),
            ]),
            row(&[
                Some("Reg B"),
                Some("A registry"),
                None,
                None,
                Some("Org B"),
                None,
                Some("Patient registry"),
            ]),
            row(&[Some("Other C"), None, None, None, None, None, Some("Cohort")]),
            row(&[Some("Lower D"), None, None, None, None, None, Some("biobank")]),
        ]
    }

    #[test]
    fn test_read_organisation_end_to_end() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::ORGANISATION,
            vec![
                header(5),
                row(&[Some("Org A"), Some("desc"), None, Some("LocTitle"), Some("LocDesc")]),
            ],
        );

        let organisations = reader().read_organisations(&mut workbook).unwrap();

        assert_eq!(organisations.len(), 1);
        assert_eq!(
            organisations["Org A"],
            Organisation {
                catalog_url: CATALOG_URL.to_string(),
                title: "Org A".to_string(),
                description: Some("desc".to_string()),
                pages: Vec::new(),
                location_title: Some("LocTitle".to_string()),
                location_description: Some("LocDesc".to_string()),
            }
        );
    }

    #[test]
    fn test_organisation_pages_split() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::ORGANISATION,
            vec![
                header(5),
                row(&[Some("Org A"), None, Some("https://a.org ; https://b.org"), None, None]),
            ],
        );

        let organisations = reader().read_organisations(&mut workbook).unwrap();
        assert_eq!(
            organisations["Org A"].pages,
            vec!["https://a.org", "https://b.org"]
        );
    }

    #[test]
    fn test_title_is_not_trimmed() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::ORGANISATION,
            vec![header(5), row(&[Some(" Org A "), None, None, None, None])],
        );

        let organisations = reader().read_organisations(&mut workbook).unwrap();
        assert_eq!(organisations[" Org A "].title, " Org A ");
    }

    #[test]
    fn test_biobanks_only_take_biobank_rows() {
        let biobanks = reader().read_biobanks(&mut resource_workbook()).unwrap();

        assert_eq!(biobanks.keys().collect::<Vec<_>>(), vec!["Bio A"]);
        let biobank = &biobanks["Bio A"];
        assert_eq!(biobank.themes, vec!["theme1", "theme2"]);
        assert_eq!(biobank.pages, vec!["https://a.example.org"]);
        assert_eq!(biobank.population_coverage.as_deref(), Some("Europe"));
        assert_eq!(biobank.catalog_url, CATALOG_URL);
    }

    #[test]
    fn test_patient_registries_only_take_registry_rows() {
        let registries = reader()
            .read_patient_registries(&mut resource_workbook())
            .unwrap();

        assert_eq!(registries.keys().collect::<Vec<_>>(), vec!["Reg B"]);
        let registry = &registries["Reg B"];
        assert!(registry.themes.is_empty());
        assert!(registry.pages.is_empty());
        assert_eq!(registry.publisher_name.as_deref(), Some("Org B"));
    }

    #[test]
    fn test_other_kind_rows_are_not_extracted() {
        let mut cells = row(&[Some("Reg X"), None, None, None, None, None, Some("Patient registry")]);
        cells[1] = DataType::Error(calamine::CellErrorType::NA);
        let mut other = row(&[Some("Other Y"), None, None, None, None, None, Some("Cohort")]);
        other[4] = DataType::Error(calamine::CellErrorType::Value);
        let mut rows = resource_rows();
        rows.push(cells);
        rows.push(other);
        let mut workbook =
            InMemoryWorkbook::new().with_sheet(sheets::BIOBANK_PATIENT_REGISTRY, rows);

        let biobanks = reader().read_biobanks(&mut workbook).unwrap();
        assert_eq!(biobanks.keys().collect::<Vec<_>>(), vec!["Bio A"]);

        let error = reader().read_patient_registries(&mut workbook).unwrap_err();
        assert!(matches!(error, TemplateError::MalformedCell { column: 1, .. }));
    }

    #[test]
    fn test_dataset_version_defaults_to_one() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::DATASET,
            vec![
                header(10),
                row(&[
                    Some("Dataset A"),
                    Some("desc"),
                    Some("t1;t2"),
                    Some("VPDiscoverable"),
                    Some("CC-BY-4.0"),
                    Some("Bio A; Reg B"),
                    None,
                    Some("k1 ;k2"),
                    Some("Org A"),
                    Some("https://dataset.example.org"),
                ]),
            ],
        );

        let datasets = reader().read_datasets(&mut workbook).unwrap();
        let dataset = &datasets["Dataset A"];

        assert_eq!(dataset.version, "1");
        assert_eq!(dataset.language, "en");
        assert_eq!(dataset.themes, vec!["t1", "t2"]);
        assert_eq!(dataset.related, vec!["Bio A", "Reg B"]);
        assert_eq!(dataset.keywords, vec!["k1", "k2"]);
        assert_eq!(dataset.vp_connection.as_deref(), Some("VPDiscoverable"));
        assert_eq!(dataset.page.as_deref(), Some("https://dataset.example.org"));
    }

    #[test]
    fn test_dataset_numeric_version() {
        let mut cells = row(&[Some("Dataset A"), None, None, None, None, None, None, None, None, None]);
        cells[6] = DataType::Float(2.0);
        let mut workbook =
            InMemoryWorkbook::new().with_sheet(sheets::DATASET, vec![header(10), cells]);

        let datasets = reader().read_datasets(&mut workbook).unwrap();
        assert_eq!(datasets["Dataset A"].version, "2");
    }

    #[test]
    fn test_read_distributions() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::DISTRIBUTION,
            vec![
                header(10),
                row(&[
                    Some("Dist A"),
                    Some("Dataset A"),
                    Some("CSV dump"),
                    Some("https://dist.example.org/a.csv"),
                    Some("download"),
                    Some("CC0"),
                    Some("3"),
                    Some("text/csv"),
                    Some("Org A"),
                    Some("Dataset A;;Dataset B"),
                ]),
                row(&[None, Some("Dataset A"), None, None, None, None, None, None, None, None]),
            ],
        );

        let distributions = reader().read_distributions(&mut workbook).unwrap();

        assert_eq!(distributions.len(), 1);
        let distribution = &distributions["Dist A"];
        assert_eq!(distribution.dataset_title.as_deref(), Some("Dataset A"));
        assert_eq!(distribution.url_type.as_deref(), Some("download"));
        assert_eq!(distribution.version.as_deref(), Some("3"));
        assert_eq!(distribution.is_part_of, vec!["Dataset A", "", "Dataset B"]);
    }

    #[test]
    fn test_duplicate_titles_last_row_wins() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::ORGANISATION,
            vec![
                header(5),
                row(&[Some("Org A"), Some("first"), None, None, None]),
                row(&[Some("Org A"), Some("second"), Some("https://a.org"), None, None]),
            ],
        );

        let organisations = reader().read_organisations(&mut workbook).unwrap();

        assert_eq!(organisations.len(), 1);
        assert_eq!(organisations["Org A"].description.as_deref(), Some("second"));
        assert_eq!(organisations["Org A"].pages, vec!["https://a.org"]);
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let mut workbook = InMemoryWorkbook::new();

        let error = reader().read_datasets(&mut workbook).unwrap_err();
        assert_eq!(error, TemplateError::sheet_not_found(sheets::DATASET));
    }

    #[test]
    fn test_narrow_sheet_is_an_error() {
        let mut workbook = InMemoryWorkbook::new().with_sheet(
            sheets::DISTRIBUTION,
            vec![header(5), row(&[Some("Dist A"), None, None, None, None])],
        );

        let error = reader().read_distributions(&mut workbook).unwrap_err();
        assert!(matches!(error, TemplateError::MissingColumn { row: 2, .. }));
    }

    #[test]
    fn test_read_all() {
        let mut workbook = resource_workbook()
            .with_sheet(
                sheets::ORGANISATION,
                vec![header(5), row(&[Some("Org A"), None, None, None, None])],
            )
            .with_sheet(sheets::DATASET, vec![header(10)])
            .with_sheet(sheets::DISTRIBUTION, vec![header(10)]);

        let contents = reader().read_all(&mut workbook).unwrap();

        assert_eq!(contents.organisations.len(), 1);
        assert_eq!(contents.biobanks.len(), 1);
        assert_eq!(contents.patient_registries.len(), 1);
        assert!(contents.datasets.is_empty());
        assert_eq!(contents.total_records(), 3);
        assert!(!contents.is_empty());
    }
}
