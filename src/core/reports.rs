//! Documentation report generators
//!
//! Each report is a pure function of the dataset and the settings. It
//! selects boards, aggregates their recipes and renders the result.
//! Writing the report is left to the caller.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::core::aggregate::{
    bootloader_classes, group_by_shared_value, per_soc_package_version, soc_membership,
    uniform_package_version,
};
use crate::core::dataset::{Dataset, BAREBOX, BOOTLOADER, DEFAULT_BOOTLOADER, KERNEL};
use crate::core::format::{describe, format_version, render_table};
use crate::core::settings::Settings;
use crate::error::{ConsistencyError, ReportError};

/// Scope shown for packages shared by every board
pub const ALL_BOARDS: &str = "All";

/// Kinds of generated reports, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportKind {
    /// Kernel provider per board
    Kernel,
    /// U-Boot provider per board
    UBoot,
    /// Barebox provider per barebox board
    Barebox,
    /// Kernels maintained in the community layers
    CommunityKernels,
    /// Userspace packages shared by all boards
    Userspace,
    /// SoC specific package versions
    SocPackages,
}

impl ReportKind {
    /// All report kinds, in generation order
    pub const ALL: [Self; 6] = [
        Self::Kernel,
        Self::UBoot,
        Self::Barebox,
        Self::CommunityKernels,
        Self::Userspace,
        Self::SocPackages,
    ];

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Kernel => "kernel",
            Self::UBoot => "u-boot",
            Self::Barebox => "barebox",
            Self::CommunityKernels => "community-kernels",
            Self::Userspace => "userspace",
            Self::SocPackages => "soc",
        }
    }

    /// Name of the file the report is written to
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Kernel => "linux-default.inc",
            Self::UBoot => "u-boot-default.inc",
            Self::Barebox => "barebox-mainline.inc",
            Self::CommunityKernels => "fsl-community-bsp-supported-kernels.inc",
            Self::Userspace => "userspace-pkg.inc",
            Self::SocPackages => "soc-pkg.inc",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.file_name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown report '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// A generated report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Report kind
    pub kind: ReportKind,
    /// Rendered text
    pub content: String,
    /// Non-fatal observations made while generating
    pub warnings: Vec<String>,
}

impl Report {
    fn new(kind: ReportKind, content: String) -> Self {
        Self {
            kind,
            content,
            warnings: Vec::new(),
        }
    }

    /// Name of the file the report is written to
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}

/// Generate one report
pub fn generate(
    kind: ReportKind,
    dataset: &Dataset,
    settings: &Settings,
) -> Result<Report, ReportError> {
    tracing::debug!("Generating {} from {} boards", kind.file_name(), dataset.len());
    match kind {
        ReportKind::Kernel => kernel_table(dataset, settings),
        ReportKind::UBoot => u_boot_table(dataset, settings),
        ReportKind::Barebox => barebox_table(dataset, settings),
        ReportKind::CommunityKernels => community_kernels(dataset, settings),
        ReportKind::Userspace => userspace_packages(dataset, settings),
        ReportKind::SocPackages => soc_packages(dataset, settings),
    }
}

fn inconsistent(kind: ReportKind, errors: Vec<ConsistencyError>) -> ReportError {
    ReportError::Inconsistent {
        report: kind.file_name().to_string(),
        errors,
    }
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(ToString::to_string).collect()
}

fn table(
    kind: ReportKind,
    header: &[String],
    rows: &[Vec<String>],
    settings: &Settings,
) -> Result<Report, ReportError> {
    let content =
        render_table(header, rows, settings.spacing()).map_err(|source| ReportError::Table {
            report: kind.file_name().to_string(),
            source,
        })?;
    Ok(Report::new(kind, content))
}

/// Board, provider and version of one recipe for the given boards
fn recipe_table(
    kind: ReportKind,
    dataset: &Dataset,
    boards: &[&str],
    recipe: &str,
    columns: &[&str],
    settings: &Settings,
) -> Result<Report, ReportError> {
    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for board in boards {
        match dataset.require_recipe(board, recipe) {
            Ok(r) => rows.push(vec![
                (*board).to_string(),
                r.recipe.clone(),
                format_version(&r.version),
            ]),
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(inconsistent(kind, errors));
    }
    table(kind, &header(columns), &rows, settings)
}

/// Boards grouped under the given bootloader class
fn bootloader_boards<'a>(dataset: &'a Dataset, class: &str) -> Vec<&'a str> {
    group_by_shared_value(dataset, |_, board| bootloader_classes(board))
        .remove(class)
        .unwrap_or_default()
}

/// Kernel provider of every board
pub fn kernel_table(dataset: &Dataset, settings: &Settings) -> Result<Report, ReportError> {
    let boards: Vec<&str> = dataset.boards().map(|(name, _)| name).collect();
    recipe_table(
        ReportKind::Kernel,
        dataset,
        &boards,
        KERNEL,
        &["Board", "Kernel Provider", "Kernel Version"],
        settings,
    )
}

/// U-Boot provider of boards booting the default bootloader
pub fn u_boot_table(dataset: &Dataset, settings: &Settings) -> Result<Report, ReportError> {
    recipe_table(
        ReportKind::UBoot,
        dataset,
        &bootloader_boards(dataset, DEFAULT_BOOTLOADER),
        BOOTLOADER,
        &["Board", "U-Boot Provider", "U-Boot Version"],
        settings,
    )
}

/// Barebox provider of boards booting barebox
pub fn barebox_table(dataset: &Dataset, settings: &Settings) -> Result<Report, ReportError> {
    recipe_table(
        ReportKind::Barebox,
        dataset,
        &bootloader_boards(dataset, BAREBOX),
        BAREBOX,
        &["Board", "Barebox Provider", "Barebox Version"],
        settings,
    )
}

/// Bulleted list of the kernels provided by the community layers
///
/// Each kernel recipe is listed once, in the order boards are seen.
pub fn community_kernels(dataset: &Dataset, settings: &Settings) -> Result<Report, ReportError> {
    let layers = settings.community_layers();
    let mut seen = BTreeSet::new();
    let mut kernels = Vec::new();
    let mut errors = Vec::new();

    for (name, _) in dataset.boards() {
        let kernel = match dataset.require_recipe(name, KERNEL) {
            Ok(kernel) => kernel,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };
        if layers.contains(&kernel.layer) && seen.insert(kernel.recipe.as_str()) {
            kernels.push((kernel.recipe.as_str(), kernel.description.as_str()));
        }
    }

    if !errors.is_empty() {
        return Err(inconsistent(ReportKind::CommunityKernels, errors));
    }
    Ok(Report::new(ReportKind::CommunityKernels, describe(&kernels)))
}

/// Versions of the packages every board shares
pub fn userspace_packages(dataset: &Dataset, settings: &Settings) -> Result<Report, ReportError> {
    let kind = ReportKind::Userspace;
    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for package in settings.userspace_packages() {
        match uniform_package_version(dataset, &package) {
            Ok(Some(version)) => {
                rows.push(vec![package, ALL_BOARDS.to_string(), format_version(&version)]);
            }
            Ok(None) => {
                warnings.push(format!("No board provides {package}"));
                rows.push(vec![package, ALL_BOARDS.to_string(), "-".to_string()]);
            }
            Err(e) => errors.extend(e),
        }
    }

    if !errors.is_empty() {
        return Err(inconsistent(kind, errors));
    }

    let mut report = table(
        kind,
        &header(&["Package", "Board/SoC Family", "Version"]),
        &rows,
        settings,
    )?;
    report.warnings = warnings;
    Ok(report)
}

/// Version of each SoC specific package on each SoC
///
/// A board must belong to exactly one of the configured SoCs.
pub fn soc_packages(dataset: &Dataset, settings: &Settings) -> Result<Report, ReportError> {
    let kind = ReportKind::SocPackages;
    let socs = settings.soc_families();
    let membership = soc_membership(dataset, &socs).map_err(|e| inconsistent(kind, e))?;

    let warnings: Vec<String> = membership
        .iter()
        .filter(|(_, boards)| boards.is_empty())
        .map(|(soc, _)| format!("No board found for SoC {soc}"))
        .collect();

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for package in settings.soc_packages() {
        match per_soc_package_version(dataset, &membership, &package) {
            Ok(versions) => {
                let mut row = vec![package];
                row.extend(socs.iter().map(|soc| {
                    versions
                        .get(soc)
                        .map_or_else(|| "-".to_string(), |v| v.display())
                }));
                rows.push(row);
            }
            Err(e) => errors.extend(e),
        }
    }

    if !errors.is_empty() {
        return Err(inconsistent(kind, errors));
    }

    let mut columns = vec!["Package name".to_string()];
    columns.extend(socs.iter().cloned());
    let mut report = table(kind, &columns, &rows, settings)?;
    report.warnings = warnings;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{SocSettings, UserspaceSettings};

    const DATASET: &str = r#"{
        "imx6qsabresd": {
            "soc-family": "mx6:mx6q",
            "image-bootloader": "",
            "recipes": {
                "virtual/kernel": {"recipe": "linux-imx", "version": "3.10.17-1.0.0", "layer": "meta-fsl-arm", "description": "Linux kernel for i.MX 6"},
                "virtual/bootloader": {"recipe": "u-boot-imx", "version": "2013.04"},
                "udev": {"recipe": "udev", "version": "182"},
                "imx-lib": {"recipe": "imx-lib", "version": "1:3.10.17", "compatible-machine": "(mx6)"}
            }
        },
        "imx6dlsabresd": {
            "soc-family": "mx6:mx6dl",
            "image-bootloader": "u-boot",
            "recipes": {
                "virtual/kernel": {"recipe": "linux-imx", "version": "3.10.17-1.0.0", "layer": "meta-fsl-arm", "description": "Linux kernel for i.MX 6"},
                "virtual/bootloader": {"recipe": "u-boot-fslc", "version": "2014.01+gitAUTOINC+abc"},
                "udev": {"recipe": "udev", "version": "182"},
                "imx-lib": {"recipe": "imx-lib", "version": "1:3.10.17", "compatible-machine": "(mx6)"}
            }
        },
        "imx28evk": {
            "soc-family": "mxs:mx28",
            "image-bootloader": "barebox",
            "recipes": {
                "virtual/kernel": {"recipe": "linux-fslc", "version": "3.14", "layer": "meta-fsl-arm", "description": "Mainline based kernel"},
                "virtual/bootloader": {"recipe": "u-boot-fslc", "version": "2014.01"},
                "barebox": {"recipe": "barebox", "version": "2013.08.0"},
                "udev": {"recipe": "udev", "version": "182"},
                "imx-lib": {"recipe": "imx-lib", "version": "1:3.10.17", "compatible-machine": "(mx6)"}
            }
        },
        "wandboard": {
            "soc-family": "mx6:mx6dl",
            "recipes": {
                "virtual/kernel": {"recipe": "linux-wandboard", "version": "3.0.35", "layer": "meta-fsl-arm-extra", "description": "Wandboard kernel"},
                "virtual/bootloader": {"recipe": "u-boot-fslc", "version": "2014.01"},
                "udev": {"recipe": "udev", "version": "182"},
                "imx-lib": {"recipe": "imx-lib", "version": "1:3.5.7", "compatible-machine": "(mx6)"}
            }
        },
        "cubox-i": {
            "soc-family": "mx6:mx6q",
            "recipes": {
                "virtual/kernel": {"recipe": "linux-cubox-i", "version": "3.0.35", "layer": "meta-fsl-arm-extra", "description": "SolidRun kernel"},
                "virtual/bootloader": {"recipe": "u-boot-cubox-i", "version": "2013.10"},
                "udev": {"recipe": "udev", "version": "182"},
                "imx-lib": {"recipe": "imx-lib", "version": "1:3.10.17", "compatible-machine": "(mx6)"}
            }
        }
    }"#;

    fn dataset() -> Dataset {
        Dataset::from_json(DATASET).unwrap()
    }

    fn soc_settings() -> Settings {
        Settings {
            soc: SocSettings {
                families: Some(vec!["mx6".to_string(), "mx28".to_string()]),
                packages: Some(vec!["imx-lib".to_string()]),
            },
            ..Settings::default()
        }
    }

    #[test]
    fn test_report_kind_names() {
        assert_eq!("soc".parse::<ReportKind>(), Ok(ReportKind::SocPackages));
        assert_eq!(
            "linux-default.inc".parse::<ReportKind>(),
            Ok(ReportKind::Kernel)
        );
        assert!("pdf".parse::<ReportKind>().is_err());
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kernel_table() {
        let report = kernel_table(&dataset(), &Settings::default()).unwrap();
        let expected = concat!(
            "=============  ===============  ==============\n",
            "Board          Kernel Provider  Kernel Version\n",
            "=============  ===============  ==============\n",
            "cubox-i        linux-cubox-i    3.0.35        \n",
            "imx28evk       linux-fslc       3.14          \n",
            "imx6dlsabresd  linux-imx        3.10.17-1.0.0 \n",
            "imx6qsabresd   linux-imx        3.10.17-1.0.0 \n",
            "wandboard      linux-wandboard  3.0.35        \n",
            "=============  ===============  ==============\n",
        );
        assert_eq!(report.content, expected);
        assert_eq!(report.file_name(), "linux-default.inc");
    }

    #[test]
    fn test_u_boot_table_excludes_other_bootloaders() {
        let report = u_boot_table(&dataset(), &Settings::default()).unwrap();
        assert!(!report.content.contains("imx28evk"));
        assert!(report.content.contains("imx6dlsabresd  u-boot-fslc      git"));
        assert!(report.content.contains("imx6qsabresd   u-boot-imx       2013.04"));
        assert_eq!(report.content.lines().count(), 8);
    }

    #[test]
    fn test_barebox_table() {
        let report = barebox_table(&dataset(), &Settings::default()).unwrap();
        let rows: Vec<&str> = report.content.lines().skip(3).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("imx28evk  barebox"));
        assert!(rows[0].contains("2013.08.0"));
    }

    #[test]
    fn test_u_boot_table_reports_every_missing_bootloader() {
        let dataset = Dataset::from_json(
            r#"{
                "a": {"soc-family": "mx6", "recipes": {"virtual/kernel": {"recipe": "linux-imx", "version": "1"}}},
                "b": {"soc-family": "mx6", "recipes": {"virtual/kernel": {"recipe": "linux-imx", "version": "1"}}}
            }"#,
        )
        .unwrap();

        let err = u_boot_table(&dataset, &Settings::default()).unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_community_kernels_deduplicated_in_order() {
        let report = community_kernels(&dataset(), &Settings::default()).unwrap();
        assert_eq!(
            report.content,
            "* **linux-cubox-i**: SolidRun kernel\n\
             * **linux-fslc**: Mainline based kernel\n\
             * **linux-imx**: Linux kernel for i.MX 6\n\
             * **linux-wandboard**: Wandboard kernel\n"
        );
    }

    #[test]
    fn test_userspace_packages() {
        let settings = Settings {
            userspace: UserspaceSettings {
                packages: Some(vec!["udev".to_string()]),
            },
            ..Settings::default()
        };
        let report = userspace_packages(&dataset(), &settings).unwrap();
        assert_eq!(
            report.content,
            "=======  ================  =======\n\
             Package  Board/SoC Family  Version\n\
             =======  ================  =======\n\
             udev     All               182    \n\
             =======  ================  =======\n"
        );
    }

    #[test]
    fn test_userspace_packages_collects_every_violation() {
        let err = userspace_packages(&dataset(), &Settings::default()).unwrap_err();
        // gstreamer and libdrm are missing on all five boards
        assert_eq!(err.violations().len(), 10);
        assert!(err
            .violations()
            .iter()
            .all(|v| matches!(v, ConsistencyError::MissingRecipe { .. })));
    }

    #[test]
    fn test_soc_packages() {
        let report = soc_packages(&dataset(), &soc_settings()).unwrap();
        assert_eq!(
            report.content,
            "============  ====  =======\n\
             Package name  mx28  mx6    \n\
             ============  ====  =======\n\
             imx-lib       -     3.10.17\n\
             ============  ====  =======\n"
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_soc_packages_warns_about_empty_soc() {
        let mut settings = soc_settings();
        settings.soc.families = Some(vec![
            "mx6".to_string(),
            "mx28".to_string(),
            "vf60".to_string(),
        ]);

        let report = soc_packages(&dataset(), &settings).unwrap();
        assert_eq!(report.warnings, vec!["No board found for SoC vf60".to_string()]);
        assert!(report.content.contains("imx-lib       -     3.10.17  -   "));
    }

    #[test]
    fn test_soc_packages_rejects_board_in_two_socs() {
        let mut settings = soc_settings();
        settings.soc.families = Some(vec!["mx6".to_string(), "mx6q".to_string()]);

        let err = soc_packages(&dataset(), &settings).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                ConsistencyError::MultiMembership {
                    board: "cubox-i".to_string(),
                    groups: vec!["mx6".to_string(), "mx6q".to_string()],
                },
                ConsistencyError::MultiMembership {
                    board: "imx6qsabresd".to_string(),
                    groups: vec!["mx6".to_string(), "mx6q".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_generate_dispatches_by_kind() {
        let report = generate(ReportKind::Barebox, &dataset(), &Settings::default()).unwrap();
        assert_eq!(report.kind, ReportKind::Barebox);
        assert_eq!(report.file_name(), "barebox-mainline.inc");
    }
}
