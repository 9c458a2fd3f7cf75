use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    TaxConsultation,
    FinancialPlanning,
    BusinessAdvisory,
    ComplianceServices,
    Accounting,
    LegalServices,
    Custom,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::TaxConsultation,
        ServiceCategory::FinancialPlanning,
        ServiceCategory::BusinessAdvisory,
        ServiceCategory::ComplianceServices,
        ServiceCategory::Accounting,
        ServiceCategory::LegalServices,
        ServiceCategory::Custom,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ServiceCategory::TaxConsultation => "tax-consultation",
            ServiceCategory::FinancialPlanning => "financial-planning",
            ServiceCategory::BusinessAdvisory => "business-advisory",
            ServiceCategory::ComplianceServices => "compliance-services",
            ServiceCategory::Accounting => "accounting",
            ServiceCategory::LegalServices => "legal-services",
            ServiceCategory::Custom => "custom",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::TaxConsultation => "Tax Consultation",
            ServiceCategory::FinancialPlanning => "Financial Planning",
            ServiceCategory::BusinessAdvisory => "Business Advisory",
            ServiceCategory::ComplianceServices => "Compliance Services",
            ServiceCategory::Accounting => "Accounting & Bookkeeping",
            ServiceCategory::LegalServices => "Legal Services",
            ServiceCategory::Custom => "Custom Amount",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            ServiceCategory::TaxConsultation => "Income tax returns, GST registration and filing, and tax planning for individuals and firms.",
            ServiceCategory::FinancialPlanning => "Retirement, investment and insurance planning built around your goals.",
            ServiceCategory::BusinessAdvisory => "Business structuring, valuations and growth strategy for founders.",
            ServiceCategory::ComplianceServices => "ROC filings, audits support and statutory compliance calendars.",
            ServiceCategory::Accounting => "Monthly books, payroll and MIS reporting handled by qualified accountants.",
            ServiceCategory::LegalServices => "Contracts, company incorporation and regulatory documentation.",
            ServiceCategory::Custom => "Agreed a different fee with us? Enter the amount yourself.",
        }
    }
}

/// Fixed base price in rupees; `None` for `custom`, where the client enters it.
pub fn price_for(category: ServiceCategory) -> Option<u32> {
    match category {
        ServiceCategory::TaxConsultation => Some(2_000),
        ServiceCategory::FinancialPlanning => Some(5_000),
        ServiceCategory::BusinessAdvisory => Some(10_000),
        ServiceCategory::ComplianceServices => Some(15_000),
        ServiceCategory::Accounting => Some(8_000),
        ServiceCategory::LegalServices => Some(12_000),
        ServiceCategory::Custom => None,
    }
}
