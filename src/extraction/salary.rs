//! Salary expectation extraction

use crate::error::Result;
use regex::Regex;

pub struct SalaryExtractor {
    patterns: Vec<Regex>,
}

impl SalaryExtractor {
    pub fn new() -> Result<Self> {
        let amount = r"\$?([0-9][0-9,]*(?:\.[0-9]+)?[kK]?)";
        let patterns = ["Salary", "Expected Salary", "Compensation"]
            .iter()
            .map(|label| Regex::new(&format!(r"(?i){}:?\s*{}", label, amount)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// The amount following the first salary-like label, as written
    pub fn extract(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|regex| {
            regex
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|amount| amount.as_str().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_labels() {
        let extractor = SalaryExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("Expected Salary: $120,000").as_deref(),
            Some("120,000")
        );
        assert_eq!(extractor.extract("salary 95k").as_deref(), Some("95k"));
        assert_eq!(
            extractor.extract("Compensation: 150000.50").as_deref(),
            Some("150000.50")
        );
    }

    #[test]
    fn test_label_without_amount() {
        let extractor = SalaryExtractor::new().unwrap();
        assert_eq!(extractor.extract("Salary: negotiable"), None);
        assert_eq!(extractor.extract(""), None);
    }
}
