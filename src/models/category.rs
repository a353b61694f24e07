use clap::ValueEnum;

/// Kind of visit planned for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Category {
    #[default]
    #[value(name = "ht")]
    HtInstallation,
    #[value(name = "eht")]
    EhtInstallation,
    #[value(name = "non-ht")]
    NonHtInstallations,
    #[value(name = "mv")]
    MvInstallations,
    #[value(name = "lift")]
    LiftInspection,
    #[value(name = "ac-cinema")]
    AcCinemaCheck,
    #[value(name = "quality-control")]
    QualityControl,
    #[value(name = "x-ray-neon")]
    XRayNeon,
    #[value(name = "office-work")]
    OfficeWork,
    #[value(name = "leave")]
    Leave,
}

impl Category {
    /// Label printed in the table and in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Category::HtInstallation => "HT Installation",
            Category::EhtInstallation => "EHT Installation",
            Category::NonHtInstallations => "Non HT installations",
            Category::MvInstallations => "MV Installations",
            Category::LiftInspection => "Lift Inspection",
            Category::AcCinemaCheck => "AC Check at AC Cinema halls",
            Category::QualityControl => "Quality control inspections",
            Category::XRayNeon => "X-Ray/Neon",
            Category::OfficeWork => "Office Work",
            Category::Leave => "Leave",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
