//! Static sensor readings and crop data shown on the dashboard.
//!
//! These are display fixtures: there is no sensor ingestion behind them.

use crate::i18n::TranslationSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientLevels {
    pub nitrogen: &'static str,
    pub phosphorus: &'static str,
    pub potassium: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentalReading {
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub soil_moisture: &'static str,
    pub npk: NutrientLevels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRecommendation {
    pub name: &'static str,
    pub confidence: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStage {
    Flowering,
    EarlyFruiting,
    Mature,
}

impl GrowthStage {
    pub fn label(&self, t: &TranslationSet) -> &'static str {
        match self {
            GrowthStage::Flowering => t.flowering,
            GrowthStage::EarlyFruiting => t.early_fruiting,
            GrowthStage::Mature => t.mature,
        }
    }
}

/// A crop currently in the field, with a reference photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSnapshot {
    pub name: &'static str,
    pub stage: GrowthStage,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

pub const CURRENT_READING: EnvironmentalReading = EnvironmentalReading {
    temperature: "28°C",
    humidity: "65%",
    soil_moisture: "45%",
    npk: NutrientLevels {
        nitrogen: "45 mg/kg",
        phosphorus: "32 mg/kg",
        potassium: "28 mg/kg",
    },
};

pub const RECOMMENDATIONS: [CropRecommendation; 3] = [
    CropRecommendation {
        name: "Tomatoes",
        confidence: "95%",
        reason: "Optimal soil conditions and temperature",
    },
    CropRecommendation {
        name: "Bell Peppers",
        confidence: "88%",
        reason: "Good NPK levels for growth",
    },
    CropRecommendation {
        name: "Lettuce",
        confidence: "82%",
        reason: "Suitable humidity levels",
    },
];

pub const CURRENT_CROPS: [CropSnapshot; 3] = [
    CropSnapshot {
        name: "Tomatoes",
        stage: GrowthStage::Flowering,
        image_url: "https://images.unsplash.com/photo-1601493700631-2b16ec4b4716?auto=format&fit=crop&w=800&q=80",
        image_alt: "Tomato plants",
    },
    CropSnapshot {
        name: "Bell Peppers",
        stage: GrowthStage::EarlyFruiting,
        image_url: "https://images.unsplash.com/photo-1595855759920-86582396756c?auto=format&fit=crop&w=800&q=80",
        image_alt: "Bell peppers",
    },
    CropSnapshot {
        name: "Lettuce",
        stage: GrowthStage::Mature,
        image_url: "https://images.unsplash.com/photo-1622206151226-18ca2c9ab4a1?auto=format&fit=crop&w=800&q=80",
        image_alt: "Lettuce",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_growth_stage_labels_follow_language() {
        let es = Language::Es.translations();
        assert_eq!(GrowthStage::Flowering.label(es), "Floración");
        assert_eq!(GrowthStage::Mature.label(Language::En.translations()), "Mature");
    }

    #[test]
    fn test_recommendations_are_ranked_by_confidence() {
        let confidences: Vec<u32> = RECOMMENDATIONS
            .iter()
            .map(|r| r.confidence.trim_end_matches('%').parse().unwrap())
            .collect();
        assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_gallery_images_are_https() {
        for crop in CURRENT_CROPS {
            assert!(crop.image_url.starts_with("https://"), "{}", crop.name);
        }
    }
}
