//! Section identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PagingError;

/// One independently paginated data domain of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Staff and patient accounts.
    Users,
    /// Scheduled visits.
    Appointments,
    /// Billing documents.
    Invoices,
    /// Frequently asked questions.
    Faqs,
    /// Patient evaluations of visits.
    Evaluations,
    /// Stock items.
    Inventory,
    /// Clinic locations.
    Sites,
    /// Inventory categories.
    Categories,
    /// Stock suppliers.
    Suppliers,
}

impl SectionKind {
    /// Every section, in sidebar order.
    pub const ALL: [SectionKind; 9] = [
        Self::Users,
        Self::Appointments,
        Self::Invoices,
        Self::Faqs,
        Self::Evaluations,
        Self::Inventory,
        Self::Sites,
        Self::Categories,
        Self::Suppliers,
    ];

    /// Stable lowercase identifier (settings keys, data file names).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Appointments => "appointments",
            Self::Invoices => "invoices",
            Self::Faqs => "faqs",
            Self::Evaluations => "evaluations",
            Self::Inventory => "inventory",
            Self::Sites => "sites",
            Self::Categories => "categories",
            Self::Suppliers => "suppliers",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Appointments => "Appointments",
            Self::Invoices => "Invoices",
            Self::Faqs => "FAQs",
            Self::Evaluations => "Evaluations",
            Self::Inventory => "Inventory",
            Self::Sites => "Sites",
            Self::Categories => "Categories",
            Self::Suppliers => "Suppliers",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionKind {
    type Err = PagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| PagingError::unknown_section(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for section in SectionKind::ALL {
            assert_eq!(section.key().parse::<SectionKind>(), Ok(section));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" FAQs ".parse::<SectionKind>(), Ok(SectionKind::Faqs));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "payroll".parse::<SectionKind>().unwrap_err();
        assert_eq!(err, PagingError::unknown_section("payroll"));
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&SectionKind::Inventory).unwrap();
        assert_eq!(json, "\"inventory\"");
    }
}
