use winspan_core::Rect;
use winspan_core::monitor::SurveyedMonitor;

const INDEX_WIDTH: usize = 3;
const RECT_WIDTH: usize = 44;
const FLAG_WIDTH: usize = 7;

pub fn print_monitors_table(monitors: &[SurveyedMonitor]) {
    println!("{}", border('┌', '┬', '┐'));
    println!(
        "│ {:<wi$} │ {:<wr$} │ {:<wr$} │ {:<wf$} │ {:<wf$} │",
        "#",
        "Work Area",
        "Bounds",
        "Primary",
        "Spanned",
        wi = INDEX_WIDTH,
        wr = RECT_WIDTH,
        wf = FLAG_WIDTH,
    );
    println!("{}", border('├', '┼', '┤'));
    for (idx, m) in monitors.iter().enumerate() {
        println!("{}", monitor_row(idx, m));
    }
    println!("{}", border('└', '┴', '┘'));
}

fn monitor_row(idx: usize, monitor: &SurveyedMonitor) -> String {
    format!(
        "│ {:<wi$} │ {:<wr$} │ {:<wr$} │ {:<wf$} │ {:<wf$} │",
        idx,
        format_rect(&monitor.info.work_area),
        format_rect(&monitor.info.monitor),
        yes_no(monitor.info.is_primary),
        yes_no(monitor.spanned),
        wi = INDEX_WIDTH,
        wr = RECT_WIDTH,
        wf = FLAG_WIDTH,
    )
}

fn border(left: char, mid: char, right: char) -> String {
    let segments = [INDEX_WIDTH, RECT_WIDTH, RECT_WIDTH, FLAG_WIDTH, FLAG_WIDTH]
        .map(|w| "─".repeat(w + 2));
    format!("{left}{}{right}", segments.join(&mid.to_string()))
}

fn format_rect(rect: &Rect) -> String {
    truncate(&rect.to_string(), RECT_WIDTH)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
