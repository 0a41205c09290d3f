/// Columns a department table must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentColumn {
    Name,
    Budget,
    CostOverruns,
    PatientLoad,
    Revenue,
}

impl DepartmentColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Budget => "budget",
            Self::CostOverruns => "costOverruns",
            Self::PatientLoad => "patientLoad",
            Self::Revenue => "revenueGenerated",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Name,
            Self::Budget,
            Self::CostOverruns,
            Self::PatientLoad,
            Self::Revenue,
        ]
    }

    /// Accepted header spellings
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Name => vec!["name", "Name", "department", "Department"],
            Self::Budget => vec!["budget", "Budget"],
            Self::CostOverruns => vec![
                "costOverruns",
                "cost_overruns",
                "CostOverruns",
                "overrun",
                "overruns",
            ],
            Self::PatientLoad => vec![
                "patientLoad",
                "patient_load",
                "PatientLoad",
                "patients",
                "Patients",
            ],
            Self::Revenue => vec![
                "revenueGenerated",
                "revenue_generated",
                "RevenueGenerated",
                "revenue",
                "Revenue",
            ],
        }
    }
}
