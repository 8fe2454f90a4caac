/// Static dashboard configuration
pub struct Config {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub chart_title: &'static str,

    // Initial range selection (0-based, inclusive)
    pub default_start: usize,
    pub default_end: usize,

    pub chart: ChartConfig,
    pub theme_note: &'static str,
}

pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
}

pub static CONFIG: Config = Config {
    title: "Sales Dashboard",
    subtitle: "Interactive analytics with theme support",
    chart_title: "Revenue vs Expenses",

    default_start: 0,
    default_end: 5,

    chart: ChartConfig {
        width: 720.0,
        height: 400.0,
    },

    theme_note: "Every color, spacing and font size on this page comes from the active theme. \
                 Switch themes above to see the chart, inputs and cards update together.",
};
