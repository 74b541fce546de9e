//! Room visualizer: previews a room with a chosen wall color, furniture
//! style and lighting mood.

use tracing::debug;

/// One selectable entry. For wall colors `id` is the hex value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerOption {
    pub id: String,
    pub name: String,
}

impl VisualizerOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

fn options(pairs: &[(&str, &str)]) -> Vec<VisualizerOption> {
    pairs
        .iter()
        .map(|(id, name)| VisualizerOption::new(*id, *name))
        .collect()
}

fn find<'a>(
    list: &'a [VisualizerOption],
    id: &str,
) -> Option<&'a VisualizerOption> {
    list.iter().find(|o| o.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizerTab {
    #[default]
    Colors,
    Furniture,
    Lighting,
    Accessories,
}

/// Brightness slider limits, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityRange {
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

impl IntensityRange {
    pub const DEFAULT: IntensityRange = IntensityRange {
        min: 30,
        max: 100,
        step: 5,
    };

    /// Nearest step counted from `min`, clamped into range.
    pub fn snap(
        &self,
        value: u8,
    ) -> u8 {
        let clamped = value.clamp(self.min, self.max);
        if self.step == 0 {
            return clamped;
        }
        let step = u16::from(self.step);
        let offset = u16::from(clamped - self.min);
        let snapped = u16::from(self.min) + (offset + step / 2) / step * step;
        // bounded by max, so it fits back into u8
        snapped.min(u16::from(self.max)) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomVisualizer {
    rooms: Vec<VisualizerOption>,
    colors: Vec<VisualizerOption>,
    furniture: Vec<VisualizerOption>,
    lighting: Vec<VisualizerOption>,
    room: String,
    color: String,
    furniture_style: String,
    lighting_mood: String,
    tab: VisualizerTab,
    intensity: u8,
    intensity_range: IntensityRange,
    fullscreen: bool,
}

impl RoomVisualizer {
    pub const DEFAULT_INTENSITY: u8 = 70;

    /// Builds a visualizer over the given option lists. Each selection starts
    /// at the first entry of its list.
    pub fn new(
        rooms: Vec<VisualizerOption>,
        colors: Vec<VisualizerOption>,
        furniture: Vec<VisualizerOption>,
        lighting: Vec<VisualizerOption>,
    ) -> Self {
        let first = |list: &[VisualizerOption]| {
            list.first()
                .map(|o| o.id.clone())
                .unwrap_or_default()
        };

        Self {
            room: first(&rooms),
            color: first(&colors),
            furniture_style: first(&furniture),
            lighting_mood: first(&lighting),
            rooms,
            colors,
            furniture,
            lighting,
            tab: VisualizerTab::default(),
            intensity: Self::DEFAULT_INTENSITY,
            intensity_range: IntensityRange::DEFAULT,
            fullscreen: false,
        }
    }

    /// The studio's standard rooms, palette, styles and moods.
    pub fn studio() -> Self {
        Self::new(
            options(&[
                ("living", "Living Room"),
                ("bedroom", "Bedroom"),
                ("kitchen", "Kitchen"),
                ("bathroom", "Bathroom"),
            ]),
            options(&[
                ("#F9F5F0", "Warm White"),
                ("#E0E0E0", "Soft Gray"),
                ("#D1E2C4", "Sage Green"),
                ("#B8C5D6", "Dusty Blue"),
                ("#E07A5F", "Terracotta"),
                ("#2C3E50", "Navy Blue"),
            ]),
            options(&[
                ("modern", "Modern"),
                ("traditional", "Traditional"),
                ("minimalist", "Minimalist"),
                ("industrial", "Industrial"),
            ]),
            options(&[
                ("warm", "Warm"),
                ("cool", "Cool"),
                ("natural", "Natural"),
                ("dramatic", "Dramatic"),
            ]),
        )
    }

    pub fn rooms(&self) -> &[VisualizerOption] {
        &self.rooms
    }

    pub fn colors(&self) -> &[VisualizerOption] {
        &self.colors
    }

    pub fn furniture_styles(&self) -> &[VisualizerOption] {
        &self.furniture
    }

    pub fn lighting_moods(&self) -> &[VisualizerOption] {
        &self.lighting
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Display name of the selected wall color.
    pub fn color_name(&self) -> Option<&str> {
        find(&self.colors, &self.color).map(|o| o.name.as_str())
    }

    pub fn furniture_style(&self) -> &str {
        &self.furniture_style
    }

    pub fn lighting_mood(&self) -> &str {
        &self.lighting_mood
    }

    pub fn tab(&self) -> VisualizerTab {
        self.tab
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn select_room(
        &mut self,
        id: &str,
    ) -> bool {
        Self::select(&self.rooms, &mut self.room, id, "room")
    }

    pub fn select_color(
        &mut self,
        id: &str,
    ) -> bool {
        Self::select(&self.colors, &mut self.color, id, "wall color")
    }

    pub fn select_furniture(
        &mut self,
        id: &str,
    ) -> bool {
        Self::select(&self.furniture, &mut self.furniture_style, id, "furniture style")
    }

    pub fn select_lighting(
        &mut self,
        id: &str,
    ) -> bool {
        Self::select(&self.lighting, &mut self.lighting_mood, id, "lighting mood")
    }

    fn select(
        list: &[VisualizerOption],
        current: &mut String,
        id: &str,
        what: &'static str,
    ) -> bool {
        if find(list, id).is_none() {
            debug!(id, what, "unknown option rejected");
            return false;
        }
        *current = id.to_string();
        true
    }

    pub fn set_tab(
        &mut self,
        tab: VisualizerTab,
    ) {
        self.tab = tab;
    }

    /// Sets light intensity, snapped to the slider step. Returns the value used.
    pub fn set_intensity(
        &mut self,
        value: u8,
    ) -> u8 {
        self.intensity = self.intensity_range.snap(value);
        self.intensity
    }

    /// CSS-style filter applied to the preview image.
    pub fn brightness_filter(&self) -> String {
        format!("brightness({}%)", self.intensity)
    }

    /// Host reported entering or leaving fullscreen.
    pub fn fullscreen_changed(
        &mut self,
        fullscreen: bool,
    ) {
        self.fullscreen = fullscreen;
    }
}

impl Default for RoomVisualizer {
    fn default() -> Self {
        Self::studio()
    }
}
