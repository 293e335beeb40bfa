//! Scene wiring: hero, startup sequence, section entrances, the project
//! carousel and the skills marquees, all driven from one frame loop.

use std::cell::Cell;
use std::rc::Rc;

use indexmap::IndexMap;
use vitrine_animation::{presets, Easing, Property, Stagger, Timeline, TweenSpec};
use vitrine_core::{
    PointerEvent, ResizeEvent, RuntimeHandle, ScrollEvent, Timer, ViewportClass,
};
use vitrine_foundation::hero::HeroScrollEffect;
use vitrine_foundation::marquee::MarqueeBand;
use vitrine_foundation::text::{segment_lines, CharUnit};
use vitrine_foundation::track::{LoopingTrack, PanelTarget, TrackHost};
use vitrine_foundation::visibility::EntranceTrigger;

use crate::content::SceneContent;
use crate::rotator::ContentRotator;

/// Milliseconds the loading-screen dot animation runs before the reveal.
const DOT_ANIMATION_MILLIS: u64 = 2500;

/// Milliseconds after the reveal starts until scrolling is enabled.
const REVEAL_ANIMATION_MILLIS: u64 = 1200;

/// Carousel panel width including its gap.
const PANEL_WIDTH: f32 = 376.0;

/// Synthetic per-character width used to size marquee bands.
const MARQUEE_CHAR_WIDTH: f32 = 12.0;

/// Sections whose entrance runs once when they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Content,
    SkillsTitle,
    Skills,
    Projects,
    ProjectsTitle,
    Contact,
}

/// Group-level visual state kept for the coarse scene elements (rows,
/// panels, links, the hero container).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementState {
    pub translate_x: f32,
    pub translate_y: f32,
    pub opacity: f32,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            opacity: 1.0,
        }
    }
}

/// Track host that logs transforms instead of painting them.
struct LogHost {
    viewport_width: Cell<f32>,
    navigations: Cell<usize>,
}

impl LogHost {
    fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width: Cell::new(viewport_width),
            navigations: Cell::new(0),
        }
    }
}

impl TrackHost for LogHost {
    fn set_track_offset(&self, x: f32) {
        log::trace!("carousel offset {x:.2}");
    }

    fn set_item_shift(&self, item_index: usize, shift_percent: f32) {
        log::trace!("carousel item {item_index} image shift {shift_percent:.2}%");
    }

    fn navigate(&self, url: &str) {
        self.navigations.set(self.navigations.get() + 1);
        log::info!("navigate -> {url}");
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width.get()
    }
}

/// One running entrance timeline, keyed so its samples land on the right
/// element group.
struct ActiveTimeline {
    group: &'static str,
    timeline: Timeline,
}

pub struct Scene {
    runtime: RuntimeHandle,
    content: SceneContent,
    viewport: ViewportClass,
    viewport_height: f32,

    hero_lines: Vec<Vec<CharUnit>>,
    hero_effect: HeroScrollEffect,
    hero_reveal: Option<Timeline>,
    reveal_requested: Rc<Cell<bool>>,
    scroll_requested: Rc<Cell<bool>>,
    scroll_enabled: bool,
    // Held so the startup chain stays cancellable; the timers themselves
    // survive on the runtime queue regardless.
    startup_timers: Vec<Timer>,

    pub rotator: ContentRotator,
    triggers: IndexMap<Section, EntranceTrigger>,
    active: Vec<ActiveTimeline>,
    pub elements: IndexMap<String, ElementState>,

    track: LoopingTrack,
    track_host: Rc<LogHost>,
    /// Item index the pointer is currently over, fed by the embedder.
    hovered_panel: Option<usize>,
    marquees: Vec<MarqueeBand>,
}

impl Scene {
    pub fn new(
        content: SceneContent,
        runtime: RuntimeHandle,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let viewport = ViewportClass::classify(viewport_width);
        let phrases: Vec<&str> = content
            .phrases_for(viewport)
            .iter()
            .map(String::as_str)
            .collect();
        let hero_lines = segment_lines(&phrases);
        let hero_unit_count: usize = hero_lines.iter().map(Vec::len).sum();

        let track_host = Rc::new(LogHost::new(viewport_width));
        let track = LoopingTrack::new(
            content.panels.len(),
            PANEL_WIDTH,
            runtime.clone(),
            track_host.clone(),
            viewport,
        );

        let marquees = Self::build_marquees(&content, viewport, &runtime);

        let mut triggers = IndexMap::new();
        triggers.insert(Section::Content, EntranceTrigger::new(0.05));
        triggers.insert(Section::SkillsTitle, EntranceTrigger::new(0.1));
        triggers.insert(Section::Skills, EntranceTrigger::new(0.2));
        triggers.insert(Section::Projects, EntranceTrigger::new(0.1));
        triggers.insert(Section::ProjectsTitle, EntranceTrigger::new(0.1));
        triggers.insert(Section::Contact, EntranceTrigger::new(0.3));

        let mut elements = IndexMap::new();
        elements.insert("hero-container".to_owned(), ElementState {
            opacity: 0.0,
            ..ElementState::default()
        });
        elements.insert("scroll-indicator".to_owned(), ElementState::default());
        for row in 0..content.skill_rows.len() {
            elements.insert(format!("skills-row-{row}"), ElementState {
                translate_x: -100.0,
                ..ElementState::default()
            });
        }
        for panel in 0..content.panels.len() {
            elements.insert(format!("project-panel-{panel}"), ElementState {
                translate_y: -100.0,
                opacity: 0.0,
                ..ElementState::default()
            });
        }
        for link in 0..content.contact_links.len() {
            elements.insert(format!("contact-link-{link}"), ElementState {
                translate_y: 50.0,
                opacity: 0.0,
                ..ElementState::default()
            });
        }

        Self {
            rotator: ContentRotator::new(content.rotation.clone()),
            runtime,
            content,
            viewport,
            viewport_height,
            hero_lines,
            hero_effect: HeroScrollEffect::new(viewport_height, hero_unit_count),
            hero_reveal: None,
            reveal_requested: Rc::new(Cell::new(false)),
            scroll_requested: Rc::new(Cell::new(false)),
            scroll_enabled: false,
            startup_timers: Vec::new(),
            triggers,
            active: Vec::new(),
            elements,
            track,
            track_host,
            hovered_panel: None,
            marquees,
        }
    }

    fn build_marquees(
        content: &SceneContent,
        viewport: ViewportClass,
        runtime: &RuntimeHandle,
    ) -> Vec<MarqueeBand> {
        content
            .skill_rows
            .iter()
            .enumerate()
            .map(|(row, skills)| {
                let chars: usize = skills.skills.iter().map(String::len).sum();
                let set_width = chars as f32 * MARQUEE_CHAR_WIDTH;
                let on_position: Rc<dyn Fn(f32)> = Rc::new(move |x| {
                    log::trace!("marquee row {row} position {x:.2}");
                });
                match viewport {
                    ViewportClass::Narrow => {
                        MarqueeBand::continuous(row, set_width, runtime.clone(), on_position)
                    }
                    ViewportClass::Wide => {
                        MarqueeBand::hover_driven(set_width, runtime.clone(), on_position)
                    }
                }
            })
            .collect()
    }

    /// Kick off the loading sequence: the dot animation runs its course,
    /// then the hero reveal starts and scrolling unlocks a little later.
    pub fn start(&mut self) {
        let reveal = self.reveal_requested.clone();
        self.startup_timers.push(Timer::after(
            self.runtime.clone(),
            DOT_ANIMATION_MILLIS,
            move || reveal.set(true),
        ));
        let scroll = self.scroll_requested.clone();
        self.startup_timers.push(Timer::after(
            self.runtime.clone(),
            DOT_ANIMATION_MILLIS + REVEAL_ANIMATION_MILLIS,
            move || scroll.set(true),
        ));
        log::info!("loading screen up; reveal in {DOT_ANIMATION_MILLIS}ms");
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn hero_unit_count(&self) -> usize {
        self.hero_effect.unit_count()
    }

    pub fn navigation_count(&self) -> usize {
        self.track_host.navigations.get()
    }

    /// The embedder reports which panel the pointer is over before a
    /// press; panel identity is what a click navigates with.
    pub fn set_hovered_panel(&mut self, panel: Option<usize>) {
        self.hovered_panel = panel;
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y, target } => {
                let panel = target.or(self.hovered_panel);
                let target = panel.map(|index| PanelTarget {
                    index,
                    url: self
                        .content
                        .panels
                        .get(index)
                        .and_then(|p| p.url.clone()),
                });
                self.track.begin_drag(x, y, target);
            }
            PointerEvent::Move { x, y } => self.track.update_drag(x, y),
            PointerEvent::Up => self.track.end_drag(),
        }
    }

    pub fn handle_scroll(&mut self, event: ScrollEvent) {
        if !self.scroll_enabled {
            return;
        }
        let frame = self.hero_effect.sample(event.y);
        if let Some(state) = self.elements.get_mut("hero-container") {
            state.opacity = frame.container_opacity;
        }
        if let Some(state) = self.elements.get_mut("scroll-indicator") {
            state.opacity = frame.indicator_opacity;
        }
        let lifts = self.hero_effect.unit_lifts(event.y);
        if let (Some(first), Some(last)) = (lifts.first(), lifts.last()) {
            log::debug!(
                "hero scroll y={:.0}: lift first {first:.1} last {last:.1}",
                event.y
            );
        }
    }

    pub fn handle_resize(&mut self, event: ResizeEvent) {
        self.viewport_height = event.height;
        self.hero_effect.set_scroll_height(event.height);
        self.track_host.viewport_width.set(event.width);

        let class = ViewportClass::classify(event.width);
        if class != self.viewport {
            log::info!("viewport reclassified: {:?} -> {class:?}", self.viewport);
            self.viewport = class;
            // Marquee modes are per-class; rebuild the bands.
            self.marquees = Self::build_marquees(&self.content, class, &self.runtime);
        }
        self.track.set_viewport_class(class);
    }

    /// Report how much of `section` is visible; fires its entrance once.
    pub fn handle_section_visibility(&mut self, section: Section, fraction: f32) {
        let fired = self
            .triggers
            .get_mut(&section)
            .map(|t| t.observe(fraction))
            .unwrap_or(false);
        if !fired {
            return;
        }
        let now = self.runtime.now_millis();
        log::info!("section {section:?} entered view");
        match section {
            Section::Content => {
                // Title chars slide in fast; the body reveals slowly.
                let title_units = self.rotator.title_units().len();
                let body_units = self.rotator.body_units().len();
                self.push_timeline("content-title", {
                    let mut t = presets::title_slide_in(title_units);
                    t.start(now);
                    t
                });
                self.push_timeline("content-body", {
                    let mut t = presets::body_fade_in(body_units);
                    t.start(now);
                    t
                });
            }
            Section::SkillsTitle | Section::ProjectsTitle => {
                let group = if section == Section::SkillsTitle {
                    "skills-title"
                } else {
                    "projects-title"
                };
                let mut t = presets::title_slide_in(16);
                t.start(now);
                self.push_timeline(group, t);
            }
            Section::Skills => {
                let rows = self.content.skill_rows.len();
                let mut banners = Timeline::new(
                    rows,
                    TweenSpec::tween(800, Easing::OutCubic),
                    Stagger::per_index(150),
                )
                .track(Property::TranslateX, -100.0, 0.0);
                banners.start(now);
                self.push_timeline("skills-row", banners);

                if self.viewport.is_narrow() {
                    let mut text = Timeline::new(
                        rows,
                        TweenSpec::tween(400, Easing::InOutQuad),
                        Stagger::per_index(80).with_base(300),
                    )
                    .track(Property::Opacity, 0.0, 1.0);
                    text.start(now);
                    self.push_timeline("skills-marquee", text);
                }
            }
            Section::Projects => {
                let panels = self.content.panels.len();
                let mut t = Timeline::new(
                    panels,
                    TweenSpec::tween(900, Easing::OutCubic),
                    Stagger::per_index(120),
                )
                .track(Property::TranslateY, -100.0, 0.0)
                .track(Property::Opacity, 0.0, 1.0);
                t.start(now);
                self.push_timeline("project-panel", t);
            }
            Section::Contact => {
                let mut title = presets::title_drop_in(12);
                title.start(now);
                self.push_timeline("contact-title", title);

                let links = self.content.contact_links.len();
                let mut t = Timeline::new(
                    links,
                    TweenSpec::tween(1200, Easing::OutExpo),
                    Stagger::per_index_from_one(200).with_base(800),
                )
                .track(Property::TranslateY, 50.0, 0.0)
                .track(Property::Opacity, 0.0, 1.0);
                t.start(now);
                self.push_timeline("contact-link", t);
            }
        }
    }

    /// A click on the highlight panel cycles the profession content.
    pub fn click_highlight_panel(&mut self) {
        self.rotator.advance_click(self.runtime.now_millis());
    }

    /// Hover state for a wide-viewport marquee row.
    pub fn marquee_hover(&mut self, row: usize, hovering: bool) {
        if let Some(band) = self.marquees.get(row) {
            if hovering {
                band.pointer_enter();
            } else {
                band.pointer_leave();
            }
        }
    }

    pub fn marquees(&self) -> &[MarqueeBand] {
        &self.marquees
    }

    pub fn track(&self) -> &LoopingTrack {
        &self.track
    }

    fn push_timeline(&mut self, group: &'static str, timeline: Timeline) {
        self.active.push(ActiveTimeline { group, timeline });
    }

    /// Advance everything that is time-based. Call once per frame, after
    /// pumping the runtime.
    pub fn tick(&mut self, now_millis: u64) {
        if self.reveal_requested.take() {
            let mut reveal = presets::title_drop_in(self.hero_effect.unit_count());
            reveal.start(now_millis);
            self.hero_reveal = Some(reveal);
            if let Some(state) = self.elements.get_mut("hero-container") {
                state.opacity = 1.0;
            }
            log::info!("loading screen exits; hero reveal starts");
        }
        if self.scroll_requested.take() && !self.scroll_enabled {
            self.scroll_enabled = true;
            log::info!("scrolling enabled");
        }

        if let Some(reveal) = &mut self.hero_reveal {
            if reveal.poll_finished(now_millis) {
                log::debug!("hero reveal finished");
            }
        }

        self.rotator.tick(now_millis);

        // Sample active entrance timelines into the element registry,
        // then drop the finished ones.
        let mut finished = Vec::new();
        for (slot, active) in self.active.iter_mut().enumerate() {
            for unit in 0..active.timeline.unit_count() {
                let key = format!("{}-{}", active.group, unit);
                if let Some(state) = self.elements.get_mut(&key) {
                    for (property, value) in active.timeline.sample_unit(now_millis, unit) {
                        match property {
                            Property::TranslateX => state.translate_x = value,
                            Property::TranslateY => state.translate_y = value,
                            Property::Opacity => state.opacity = value,
                        }
                    }
                }
            }
            if active.timeline.poll_finished(now_millis) {
                log::debug!("entrance '{}' finished", active.group);
                finished.push(slot);
            }
        }
        for slot in finished.into_iter().rev() {
            self.active.remove(slot);
        }
    }

    /// Lines of hero characters, for embedders that render text.
    pub fn hero_lines(&self) -> &[Vec<CharUnit>] {
        &self.hero_lines
    }
}
