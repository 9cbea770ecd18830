//! Override tag builders.
//!
//! Each function returns a bare tag fragment (no surrounding braces).
//! Times are milliseconds relative to the event start.

/// `\fad(in,out)`
pub fn fade_tag(entry_ms: u32, exit_ms: u32) -> String {
    format!("\\fad({entry_ms},{exit_ms})")
}

/// `\move(x1,y1,x2,y2,t1,t2)`
pub fn move_tag(x1: i32, y1: i32, x2: i32, y2: i32, t1: u32, t2: u32) -> String {
    format!("\\move({x1},{y1},{x2},{y2},{t1},{t2})")
}

/// Scale from `start_scale` to `end_scale` percent over `t1..t2`.
pub fn scale_tag(start_scale: u32, end_scale: u32, t1: u32, t2: u32) -> String {
    format!(
        "\\t({t1},{t2},\\fscx{end_scale}\\fscy{end_scale})\\fscx{start_scale}\\fscy{start_scale}"
    )
}

/// Grow from half size to full size.
pub fn pop_in_tag(duration_ms: u32) -> String {
    format!("\\fscx50\\fscy50\\t(0,{duration_ms},\\fscx100\\fscy100)")
}

/// Shrink to half size and vanish, starting at `start_ms`.
pub fn pop_out_tag(start_ms: u32, duration_ms: u32) -> String {
    let end_ms = u64::from(start_ms) + u64::from(duration_ms);
    format!("\\t({start_ms},{end_ms},\\fscx50\\fscy50\\alpha&HFF&)")
}

/// Rise `offset` pixels into `(x, y)`.
pub fn slide_up_tag(x: i32, y: i32, offset: i32, duration_ms: u32) -> String {
    move_tag(x, y + offset, x, y, 0, duration_ms)
}

/// Drop `offset` pixels into `(x, y)`.
pub fn slide_down_tag(x: i32, y: i32, offset: i32, duration_ms: u32) -> String {
    move_tag(x, y - offset, x, y, 0, duration_ms)
}

/// Overshoot then settle, in thirds of `duration_ms`.
pub fn bounce_tag(duration_ms: u32) -> String {
    let t1 = duration_ms / 3;
    let t2 = u64::from(duration_ms) * 2 / 3;
    format!(
        "\\fscx80\\fscy80\\t(0,{t1},\\fscx110\\fscy110)\\t({t1},{t2},\\fscx95\\fscy95)\\t({t2},{duration_ms},\\fscx100\\fscy100)"
    )
}

/// Karaoke syllable timing, in centiseconds.
pub fn karaoke_tag(duration_cs: u32) -> String {
    format!("\\k{duration_cs}")
}

/// Karaoke sweep-fill timing, in centiseconds.
pub fn karaoke_fill_tag(duration_cs: u32) -> String {
    format!("\\kf{duration_cs}")
}

/// Reset overrides to the line style.
pub fn reset_tag() -> &'static str {
    "\\r"
}

/// Per-word color change: `primary` until `start_ms`, `highlight` until
/// `end_ms`, then `primary` again. Each transition takes `window_ms`.
pub fn color_sweep_tags(
    primary: &str,
    highlight: &str,
    start_ms: i64,
    end_ms: i64,
    window_ms: i64,
) -> String {
    format!(
        "\\c{primary}\\t({start_ms},{},\\c{highlight})\\t({end_ms},{},\\c{primary})",
        start_ms + window_ms,
        end_ms + window_ms
    )
}

/// Wrap tags in an override block; empty tags give an empty string.
pub fn wrap_override(tags: &str) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("{{{tags}}}")
    }
}
