/// Viewport width threshold below which the compact picker is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub max_width_rem: f32,
}

impl Breakpoint {
    pub const fn max_width_rem(max_width_rem: f32) -> Self {
        Self { max_width_rem }
    }

    /// CSS media query matched when the viewport is at or below the breakpoint.
    pub fn media_query(&self) -> String {
        format!("(max-width: {}rem)", self.max_width_rem)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        SMALL_SCREEN
    }
}

pub const SMALL_SCREEN: Breakpoint = Breakpoint::max_width_rem(36.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickerVariant {
    /// One month, no preset ranges.
    SingleCalendar,
    /// Two consecutive months with a preset column.
    RangeCalendar,
}

impl PickerVariant {
    pub fn months(self) -> usize {
        match self {
            PickerVariant::SingleCalendar => 1,
            PickerVariant::RangeCalendar => 2,
        }
    }

    pub fn shows_presets(self) -> bool {
        matches!(self, PickerVariant::RangeCalendar)
    }
}

pub fn select_variant(is_small_screen: bool) -> PickerVariant {
    if is_small_screen {
        PickerVariant::SingleCalendar
    } else {
        PickerVariant::RangeCalendar
    }
}
