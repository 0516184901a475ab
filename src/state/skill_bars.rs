//! Skill bar fill animation state

use std::time::{Duration, Instant};

/// Skills shown on the page with their declared levels
pub const SITE_SKILLS: &[(&str, &str)] = &[
    ("Rust", "90"),
    ("TypeScript", "80"),
    ("UI design", "70"),
    ("Accessibility", "65"),
];

/// A single skill indicator
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    pub label: String,
    /// Target fill percentage, 0..=100
    pub level: u8,
    /// Current fill percentage
    pub width: f32,
}

impl SkillBar {
    /// Build a bar from its declared level attribute.
    ///
    /// Missing or unparsable levels fall back to 0; values are clamped to 100.
    pub fn new(label: &str, level_attr: Option<&str>) -> Self {
        let level = level_attr
            .and_then(|raw| raw.trim().trim_end_matches('%').parse::<f32>().ok())
            .filter(|l| l.is_finite())
            .map_or(0, |l| l.clamp(0.0, 100.0).round() as u8);
        Self {
            label: label.to_string(),
            level,
            width: 0.0,
        }
    }
}

/// Animation phase for the skill bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPhase {
    /// Waiting for the page load event
    Idle,
    /// Bars filling
    Filling,
    /// Animation finished
    Complete,
}

/// One-shot fill animation over all skill bars
#[derive(Debug)]
pub struct SkillBarAnimation {
    pub bars: Vec<SkillBar>,
    pub phase: BarPhase,
    start_time: Option<Instant>,
}

impl Default for SkillBarAnimation {
    fn default() -> Self {
        Self::new(
            SITE_SKILLS
                .iter()
                .map(|(label, level)| SkillBar::new(label, Some(level)))
                .collect(),
        )
    }
}

impl SkillBarAnimation {
    /// Duration of the fill animation
    pub const DURATION: Duration = Duration::from_millis(900);

    pub fn new(bars: Vec<SkillBar>) -> Self {
        Self {
            bars,
            phase: BarPhase::Idle,
            start_time: None,
        }
    }

    /// Start filling. Runs once: later calls are ignored.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.phase != BarPhase::Idle {
            return false;
        }
        self.start_time = Some(now);
        self.phase = BarPhase::Filling;
        true
    }

    /// Update bar widths for the time elapsed since start
    pub fn update(&mut self, now: Instant) {
        if let Some(start) = self.start_time {
            self.update_elapsed(now.saturating_duration_since(start));
        }
    }

    /// Update bar widths for a given elapsed time
    pub fn update_elapsed(&mut self, elapsed: Duration) {
        if self.phase != BarPhase::Filling {
            return;
        }
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        // Ease-out for smooth deceleration
        let eased = simple_easing::cubic_out(progress);
        for bar in &mut self.bars {
            bar.width = eased * bar.level as f32;
        }
        if progress >= 1.0 {
            self.phase = BarPhase::Complete;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase == BarPhase::Filling
    }
}
