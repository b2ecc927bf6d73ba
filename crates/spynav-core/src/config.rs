use serde::{Deserialize, Serialize};

/// Easing curve applied to animated scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// No interpolation: jump to the target when the duration elapses.
    None,
    Linear,
    /// Cubic ease-out.
    Cubic,
    /// Symmetric cubic ease-in-ease-out.
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolls instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Animation frame rate
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Rows scrolled per line-scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration_ms(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Relative width of the navigation pane
    #[serde(default = "default_navigation_weight")]
    pub navigation_weight: u16,
    /// Relative width of the content pane
    #[serde(default = "default_content_weight")]
    pub content_weight: u16,
    /// Blank rows above and below each heading
    #[serde(default = "default_heading_padding")]
    pub heading_padding: u16,
    /// Blank rows above and below each content block
    #[serde(default = "default_content_padding")]
    pub content_padding: u16,
    /// Blank rows between adjacent items
    #[serde(default = "default_item_spacing")]
    pub item_spacing: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            navigation_weight: default_navigation_weight(),
            content_weight: default_content_weight(),
            heading_padding: default_heading_padding(),
            content_padding: default_content_padding(),
            item_spacing: default_item_spacing(),
        }
    }
}

impl LayoutConfig {
    /// Pane weights must be positive so both panes get a nonzero share of
    /// the split.
    pub fn validate(&self) -> crate::Result<()> {
        if self.navigation_weight == 0 {
            return Err(crate::Error::Config(
                "navigation_weight must be positive".to_string(),
            ));
        }
        if self.content_weight == 0 {
            return Err(crate::Error::Config(
                "content_weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for the component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpyConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl SpyConfig {
    pub fn validate(&self) -> crate::Result<()> {
        self.layout.validate()
    }
}

fn default_true() -> bool {
    true
}

fn default_animation_duration_ms() -> u64 {
    300
}

fn default_easing() -> EasingType {
    EasingType::EaseInOut
}

fn default_animation_fps() -> u16 {
    60
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_navigation_weight() -> u16 {
    1
}

fn default_content_weight() -> u16 {
    3
}

fn default_heading_padding() -> u16 {
    0
}

fn default_content_padding() -> u16 {
    1
}

fn default_item_spacing() -> u16 {
    1
}
