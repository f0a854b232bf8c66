//! Wire types for the `predict` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct PredictRequest {
    pub instances: Vec<Instance>,
    pub parameters: Parameters,
}

#[derive(Debug, Serialize)]
pub(super) struct Instance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Parameters {
    pub sample_count: u32,
    pub aspect_ratio: String,
    pub output_mime_type: String,
}

impl PredictRequest {
    /// Build a request for one portrait PNG from the given prompt.
    pub fn single_portrait_png(prompt: impl Into<String>) -> Self {
        Self {
            instances: vec![Instance {
                prompt: prompt.into(),
            }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: "9:16".to_string(),
                output_mime_type: "image/png".to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Prediction {
    pub bytes_base64_encoded: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialization_uses_camel_case() {
        let request = PredictRequest::single_portrait_png("a lighthouse");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["instances"][0]["prompt"], "a lighthouse");
        assert_eq!(json["parameters"]["sampleCount"], 1);
        assert_eq!(json["parameters"]["aspectRatio"], "9:16");
        assert_eq!(json["parameters"]["outputMimeType"], "image/png");
    }

    #[test]
    fn response_deserialization_reads_predictions() {
        let json = r#"{
            "predictions": [{
                "bytesBase64Encoded": "aVZCT1J3",
                "mimeType": "image/png"
            }]
        }"#;
        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.predictions.len(), 1);
        assert_eq!(response.predictions[0].bytes_base64_encoded, "aVZCT1J3");
    }

    #[test]
    fn empty_response_has_no_predictions() {
        let response: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(response.predictions.is_empty());
    }
}
