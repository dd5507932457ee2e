//! Diagnosis result types
//!
//! The demo site renders one fixed record:
//! - AnalysisResult: the full diagnosis card shown after the simulated analysis
//! - Severity: the three-level badge on that card

use serde::{Deserialize, Serialize};

/// How far the disease has progressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Moderate,
    High,
}

impl Severity {
    /// CSS token for the severity badge.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }

    /// User-facing badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low Severity",
            Severity::Moderate => "Moderate Severity",
            Severity::High => "High Severity",
        }
    }
}

/// Diagnosis record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub plant_name: String,
    pub disease: String,

    /// Confidence percentage, 0-100.
    pub confidence: u8,

    pub severity: Severity,
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub prevention: Vec<String>,
}

impl AnalysisResult {
    /// The canned diagnosis shown for every upload. The demo has no model
    /// behind it, so this record never varies with the image.
    pub fn early_blight() -> Self {
        Self {
            plant_name: "Tomato (Solanum lycopersicum)".to_string(),
            disease: "Early Blight".to_string(),
            confidence: 94,
            severity: Severity::Moderate,
            description: "Early blight is a common fungal disease caused by \
                          Alternaria solani. It typically appears as dark brown \
                          spots with concentric rings on lower leaves first."
                .to_string(),
            symptoms: vec![
                "Dark brown spots with concentric rings".to_string(),
                "Yellowing around affected areas".to_string(),
                "Lower leaves affected first".to_string(),
                "Premature leaf drop".to_string(),
            ],
            treatments: vec![
                "Remove and destroy infected leaves immediately".to_string(),
                "Apply copper-based fungicide every 7-10 days".to_string(),
                "Improve air circulation around plants".to_string(),
                "Water at the base, avoid wetting leaves".to_string(),
                "Mulch around plants to prevent soil splash".to_string(),
            ],
            prevention: vec![
                "Rotate crops every 2-3 years".to_string(),
                "Use disease-resistant varieties".to_string(),
                "Maintain proper plant spacing".to_string(),
                "Keep garden free of debris".to_string(),
            ],
        }
    }
}
