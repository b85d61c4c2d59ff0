use serde::{Deserialize, Deserializer, Serialize};

/// One course/module block from the question bank dataset. `module` and
/// `markWeightage` appear as numbers in some exports and numeric strings in
/// others; both forms deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub course: String,
    #[serde(deserialize_with = "number_or_string")]
    pub module: u32,
    #[serde(rename = "markWeightage", deserialize_with = "number_or_string")]
    pub mark_weightage: u32,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "number_or_string")]
    pub id: u32,
    pub question: String,
}

/// A flattened question as presented after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionHit {
    pub id: u32,
    pub question: String,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom(format!("not a number: {:?}", s))),
    }
}
