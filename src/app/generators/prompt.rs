use serde_json::{json, Value};

pub const WEEK_COUNT: usize = 14;

pub const SYLLABUS_PROMPT: &str = "\
Türkiye'deki bir üniversitenin İnsan Kaynakları Yönetimi bölümü 3. sınıf lisans \
öğrencileri için 14 haftalık bir \"İK Analitiği\" dersi programı hazırla. \
Program teorik temelleri, veri toplama ve temizleme, tanımlayıcı ve tahmine dayalı \
analitik, işe alım, performans, bağlılık ve işten ayrılma analizlerini, görselleştirme \
ve raporlamayı ve veri etiğini kapsamalı. \
Her hafta için haftanın numarasını (1-14), başlığını, kategorisini (yalnızca \"Teori\", \
\"Uygulama\", \"Araçlar\" veya \"Etik\"), kısa bir açıklamasını, 3-4 öğrenme hedefini, \
bir uygulamalı görevi ve bir önerilen okumayı ver. \
Ayrıca derste kullanılacak 5-6 aracı/teknolojiyi (ad, kısa açıklama, kategori) listele. \
Tüm içerik Türkçe olmalı.";

/// Response schema sent as `generationConfig.responseSchema`.
pub fn response_schema() -> Value {
    let string = json!({ "type": "STRING" });

    json!({
        "type": "OBJECT",
        "properties": {
            "courseTitle": string,
            "courseDescription": string,
            "tools": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": string,
                        "description": string,
                        "category": string
                    },
                    "required": ["name", "description", "category"]
                }
            },
            "weeks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "weekNumber": { "type": "INTEGER" },
                        "title": string,
                        "category": {
                            "type": "STRING",
                            "enum": ["Teori", "Uygulama", "Araçlar", "Etik"]
                        },
                        "description": string,
                        "learningObjectives": { "type": "ARRAY", "items": string },
                        "practicalTask": string,
                        "recommendedReading": string
                    },
                    "required": [
                        "weekNumber",
                        "title",
                        "category",
                        "description",
                        "learningObjectives",
                        "practicalTask",
                        "recommendedReading"
                    ]
                }
            }
        },
        "required": ["courseTitle", "courseDescription", "tools", "weeks"]
    })
}

/// Request body for `models/{model}:generateContent`.
pub fn request_body() -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": SYLLABUS_PROMPT }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::WeekCategory;

    #[test]
    fn test_schema_category_enum_matches_model() {
        let schema = response_schema();
        let allowed: Vec<&str> = schema["properties"]["weeks"]["items"]["properties"]["category"]
            ["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        let labels: Vec<&str> = WeekCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(allowed, labels);
    }

    #[test]
    fn test_request_body_asks_for_json() {
        let body = request_body();
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("14 haftalık"));
    }
}
