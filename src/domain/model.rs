use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of week categories. Wire values are the Turkish labels the
/// model is asked to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekCategory {
    #[serde(rename = "Teori")]
    Theory,
    #[serde(rename = "Uygulama")]
    Practice,
    #[serde(rename = "Araçlar")]
    Tools,
    #[serde(rename = "Etik")]
    Ethics,
}

impl WeekCategory {
    pub const ALL: [WeekCategory; 4] = [
        WeekCategory::Theory,
        WeekCategory::Practice,
        WeekCategory::Tools,
        WeekCategory::Ethics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeekCategory::Theory => "Teori",
            WeekCategory::Practice => "Uygulama",
            WeekCategory::Tools => "Araçlar",
            WeekCategory::Ethics => "Etik",
        }
    }
}

impl fmt::Display for WeekCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekData {
    pub week_number: u32,
    pub title: String,
    pub category: WeekCategory,
    pub description: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    pub practical_task: String,
    pub recommended_reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    pub name: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusData {
    pub course_title: String,
    pub course_description: String,
    #[serde(default)]
    pub tools: Vec<ToolData>,
    #[serde(default)]
    pub weeks: Vec<WeekData>,
}

impl SyllabusData {
    /// 週次應從 1 開始嚴格遞增；不強制，只供記錄警告
    pub fn is_week_order_consistent(&self) -> bool {
        self.weeks
            .iter()
            .enumerate()
            .all(|(idx, week)| week.week_number as usize == idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_payload() {
        let payload = serde_json::json!({
            "courseTitle": "İK Analitiği",
            "courseDescription": "Veriye dayalı insan kaynakları",
            "tools": [
                {"name": "Python", "description": "Veri analizi", "category": "Programlama"}
            ],
            "weeks": [{
                "weekNumber": 1,
                "title": "Giriş",
                "category": "Teori",
                "description": "Temel kavramlar",
                "learningObjectives": ["Tanımları bilmek"],
                "practicalTask": "Okuma özeti",
                "recommendedReading": "Bölüm 1"
            }]
        });

        let syllabus: SyllabusData = serde_json::from_value(payload).unwrap();
        assert_eq!(syllabus.course_title, "İK Analitiği");
        assert_eq!(syllabus.tools.len(), 1);
        assert_eq!(syllabus.weeks[0].category, WeekCategory::Theory);
        assert_eq!(syllabus.weeks[0].learning_objectives.len(), 1);
    }

    #[test]
    fn test_missing_tools_defaults_to_empty() {
        let payload = serde_json::json!({
            "courseTitle": "İK Analitiği",
            "courseDescription": "Açıklama",
            "weeks": []
        });

        let syllabus: SyllabusData = serde_json::from_value(payload).unwrap();
        assert!(syllabus.tools.is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let payload = serde_json::json!({
            "weekNumber": 1,
            "title": "Giriş",
            "category": "Sanat",
            "description": "",
            "learningObjectives": [],
            "practicalTask": "",
            "recommendedReading": ""
        });

        assert!(serde_json::from_value::<WeekData>(payload).is_err());
    }

    #[test]
    fn test_category_wire_value_uses_turkish_label() {
        for category in WeekCategory::ALL {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire.as_str().unwrap(), category.label());
        }
    }

    #[test]
    fn test_week_order_consistency() {
        let week = |n: u32| WeekData {
            week_number: n,
            title: format!("Hafta {}", n),
            category: WeekCategory::Practice,
            description: String::new(),
            learning_objectives: vec![],
            practical_task: String::new(),
            recommended_reading: String::new(),
        };
        let mut syllabus = SyllabusData {
            course_title: "t".to_string(),
            course_description: "d".to_string(),
            tools: vec![],
            weeks: vec![week(1), week(2), week(3)],
        };
        assert!(syllabus.is_week_order_consistent());

        syllabus.weeks.swap(0, 2);
        assert!(!syllabus.is_week_order_consistent());
    }
}
