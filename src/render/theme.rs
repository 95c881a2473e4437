/// SVG color palette, as CSS color strings
pub struct Theme {
    pub bg: &'static str,
    pub fg: &'static str,
    pub slot_fill: &'static str,
    pub empty_fill: &'static str,
    pub border: &'static str,
    pub title: &'static str,
    pub comment: &'static str, // offset labels, ellipsis
    pub pointer: &'static str, // stack-pointer arrow
    pub base_pointer: &'static str,
    pub font_family: &'static str,
    pub font_size: f64,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: "#1e1e2e",
    fg: "#cdd6f4",
    slot_fill: "#313244",
    empty_fill: "#1e1e2e",
    border: "#6c7086",
    title: "#f9e2af",        // Yellow
    comment: "#6c7086",      // Grey
    pointer: "#fab387",      // Orange
    base_pointer: "#89b4fa", // Blue
    font_family: "monospace",
    font_size: 12.0,
};
