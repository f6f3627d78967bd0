use serde::Serialize;

/// The fixed catalog of one-click nature prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Forest,
    Mountains,
    Ocean,
    Sunset,
    Flowers,
    Butterflies,
    NightSky,
    Rainforest,
    Snow,
    Landscape,
}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Preset::Forest,
        Preset::Mountains,
        Preset::Ocean,
        Preset::Sunset,
        Preset::Flowers,
        Preset::Butterflies,
        Preset::NightSky,
        Preset::Rainforest,
        Preset::Snow,
        Preset::Landscape,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Forest => "🌲 Forest",
            Preset::Mountains => "🏔️ Mountains",
            Preset::Ocean => "🌊 Ocean",
            Preset::Sunset => "🌅 Sunset",
            Preset::Flowers => "🌸 Flowers",
            Preset::Butterflies => "🦋 Butterflies",
            Preset::NightSky => "🌙 Night Sky",
            Preset::Rainforest => "🍃 Rainforest",
            Preset::Snow => "❄️ Snow",
            Preset::Landscape => "🏞️ Landscape",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Preset::Forest => {
                "mystical ancient forest with sunbeams, lush green trees, magical atmosphere"
            }
            Preset::Mountains => {
                "majestic snow-capped mountains at dawn, dramatic peaks, cinematic landscape"
            }
            Preset::Ocean => {
                "crystal clear turquoise ocean waves, tropical paradise, serene seascape"
            }
            Preset::Sunset => "breathtaking sunset over rolling hills, golden hour, vibrant colors",
            Preset::Flowers => "field of wildflowers in bloom, colorful meadow, spring scenery",
            Preset::Butterflies => {
                "magical butterfly garden, colorful butterflies, enchanted flowers"
            }
            Preset::NightSky => {
                "starry night sky with milky way, aurora borealis, cosmic beauty"
            }
            Preset::Rainforest => {
                "dense tropical rainforest with waterfalls, exotic plants, vibrant nature"
            }
            Preset::Snow => {
                "peaceful winter wonderland, snow-covered pine trees, serene white landscape"
            }
            Preset::Landscape => {
                "epic natural landscape vista, dramatic scenery, photorealistic nature"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Preset> {
        Self::ALL.iter().copied().find(|preset| preset.label() == label)
    }
}

/// JSON view of a preset for the API.
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    pub label: &'static str,
    pub prompt: &'static str,
}

impl From<Preset> for PresetInfo {
    fn from(preset: Preset) -> Self {
        PresetInfo {
            label: preset.label(),
            prompt: preset.prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_distinct_entries() {
        let labels: HashSet<_> = Preset::ALL.iter().map(|p| p.label()).collect();
        let prompts: HashSet<_> = Preset::ALL.iter().map(|p| p.prompt()).collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(prompts.len(), 10);
    }

    #[test]
    fn test_label_lookup_round_trips_every_preset() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_label(preset.label()), Some(preset));
        }
        assert_eq!(Preset::from_label("Forest"), None);
        assert_eq!(Preset::from_label(""), None);
    }

    #[test]
    fn test_forest_sentence() {
        assert_eq!(
            Preset::Forest.prompt(),
            "mystical ancient forest with sunbeams, lush green trees, magical atmosphere"
        );
        assert_eq!(Preset::NightSky.label(), "🌙 Night Sky");
    }
}
