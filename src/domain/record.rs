use serde::{Deserialize, Serialize};

/// One row of a chart, in the order it appeared on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl Record {
    pub fn new(title: String) -> Self {
        Self {
            title,
            year: None,
            runtime: None,
            rating: None,
        }
    }

    pub fn with_details(
        mut self,
        year: Option<String>,
        runtime: Option<String>,
        rating: Option<String>,
    ) -> Self {
        self.year = year;
        self.runtime = runtime;
        self.rating = rating;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_fields_in_order() {
        let record = Record::new("The Godfather".to_string()).with_details(
            Some("1972".to_string()),
            Some("2h 55m".to_string()),
            Some("R".to_string()),
        );

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"title":"The Godfather","year":"1972","runtime":"2h 55m","rating":"R"}"#
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let record = Record::new("Untitled".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"title":"Untitled"}"#);
    }
}
