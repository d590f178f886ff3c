//! Scroll position to active navigation section.
//!
//! The spy does not read the page itself. The caller hands it the current
//! scroll offset and a lookup from section id to [`SectionLayout`], which in
//! the browser comes from `offsetTop`/`offsetHeight` at event time.

/// Section ids in page order.
pub const SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Distance below the top of the viewport used as the comparison point.
pub const DEFAULT_LEAD: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub top: i32,
    pub height: i32,
}

impl SectionLayout {
    pub fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    /// Half-open: `top <= probe < top + height`.
    pub fn contains(&self, probe: i32) -> bool {
        probe >= self.top && probe < self.top.saturating_add(self.height)
    }
}

/// Returns the last section in iteration order whose layout contains `probe`.
///
/// Sections the lookup has no layout for are skipped. Iteration never stops
/// early, so when stale layouts overlap the later section wins.
pub fn locate<'a, I, F>(sections: I, probe: i32, mut layout: F) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str) -> Option<SectionLayout>,
{
    let mut found = None;
    for id in sections {
        if let Some(rect) = layout(id) {
            if rect.contains(probe) {
                found = Some(id);
            }
        }
    }
    found
}

/// Normalises a raw `scrollY` reading into a pixel offset.
pub fn scroll_offset(raw: f64) -> i32 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    // `as` saturates at i32::MAX
    raw.round() as i32
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<String>,
    lead: i32,
    active: String,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SECTIONS, SECTIONS[0])
    }
}

impl ScrollSpy {
    pub fn new<I, S>(sections: I, initial: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            lead: DEFAULT_LEAD,
            active: initial.into(),
        }
    }

    pub fn with_lead(mut self, lead: i32) -> Self {
        self.lead = lead;
        self
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn lead(&self) -> i32 {
        self.lead
    }

    /// Recomputes the active section for `scroll_offset`.
    ///
    /// When nothing matches the previous section stays active.
    pub fn update<F>(&mut self, scroll_offset: i32, layout: F) -> &str
    where
        F: FnMut(&str) -> Option<SectionLayout>,
    {
        self.advance(scroll_offset, layout);
        &self.active
    }

    /// Same as [`update`](Self::update), but only yields the section when it
    /// differs from the one that was active before.
    pub fn advance<F>(&mut self, scroll_offset: i32, layout: F) -> Option<&str>
    where
        F: FnMut(&str) -> Option<SectionLayout>,
    {
        let probe = scroll_offset.saturating_add(self.lead);
        let id = locate(self.sections.iter().map(String::as_str), probe, layout)?;
        if id == self.active {
            return None;
        }
        log::trace!("active section {} -> {id}", self.active);
        self.active = id.to_string();
        Some(&self.active)
    }
}
